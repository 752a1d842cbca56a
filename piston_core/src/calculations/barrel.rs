//! # Piston Barrel
//!
//! Wall thickness of the cylindrical barrel: t3 at the ring zone, tapering
//! to t4 at the open end.

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::settings::DesignConstants;

/// Inputs for the barrel stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrelInput {
    pub bore_diameter_mm: f64,
    /// Ring radial thickness t1 (mm)
    pub radial_ring_thickness_mm: f64,
}

/// Results from the barrel stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrelResult {
    /// Maximum wall thickness t3 = 0.03·D + t1 + 4.9 (mm)
    pub max_thickness_mm: f64,
    /// Open-end wall thickness t4 (mm)
    pub open_end_thickness_mm: f64,
}

impl BarrelInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("bore_diameter_mm", self.bore_diameter_mm)?;
        require_positive("radial_ring_thickness_mm", self.radial_ring_thickness_mm)?;
        Ok(())
    }
}

/// Calculate barrel wall thicknesses.
pub fn calculate(input: &BarrelInput, constants: &DesignConstants) -> CalcResult<BarrelResult> {
    input.validate()?;

    let t3 = 0.03 * input.bore_diameter_mm + input.radial_ring_thickness_mm + 4.9;

    Ok(BarrelResult {
        max_thickness_mm: t3,
        open_end_thickness_mm: constants.open_end_factor * t3,
    })
}
