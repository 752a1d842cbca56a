//! # Piston Skirt
//!
//! The skirt carries the side thrust of the connecting rod against the
//! cylinder wall. Its length comes from the allowable bearing pressure,
//! reconciled with the practical range 0.65·D to 0.8·D according to the
//! configured [`SkirtLengthPolicy`]. The overall piston length then adds the
//! ring section and the top land.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::calculations::skirt::{calculate, LengthAdjustment, SkirtInput};
//! use piston_core::settings::DesignConstants;
//!
//! let input = SkirtInput {
//!     bore_diameter_mm: 100.0,
//!     max_gas_pressure_mpa: 5.0,
//!     skirt_bearing_pressure_mpa: 0.45,
//!     number_of_rings: 4,
//!     axial_ring_thickness_mm: 2.5,
//!     land_width_mm: 2.125,
//!     top_land_width_mm: 17.28,
//! };
//!
//! let result = calculate(&input, &DesignConstants::default()).unwrap();
//! // Calculated 87.27 mm is above 0.8·D
//! assert_eq!(result.length_mm, 80.0);
//! assert_eq!(result.length_adjustment, LengthAdjustment::ReducedToMaximum);
//! ```

use serde::{Deserialize, Serialize};

use super::rings::validate_ring_count;
use super::DimensionRange;
use crate::equations::loads::{max_gas_load, side_thrust};
use crate::errors::{require_positive, CalcResult};
use crate::settings::{DesignConstants, SkirtLengthPolicy};

/// Inputs for the skirt stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkirtInput {
    pub bore_diameter_mm: f64,
    pub max_gas_pressure_mpa: f64,
    /// Allowable bearing pressure of the skirt on the wall (N/mm²)
    pub skirt_bearing_pressure_mpa: f64,
    pub number_of_rings: u32,
    /// Ring axial thickness t2 (mm)
    pub axial_ring_thickness_mm: f64,
    /// Land width b2 (mm)
    pub land_width_mm: f64,
    /// Top land width b1 (mm)
    pub top_land_width_mm: f64,
}

impl SkirtInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("bore_diameter_mm", self.bore_diameter_mm)?;
        require_positive("max_gas_pressure_mpa", self.max_gas_pressure_mpa)?;
        require_positive("skirt_bearing_pressure_mpa", self.skirt_bearing_pressure_mpa)?;
        validate_ring_count(self.number_of_rings)?;
        require_positive("axial_ring_thickness_mm", self.axial_ring_thickness_mm)?;
        require_positive("land_width_mm", self.land_width_mm)?;
        require_positive("top_land_width_mm", self.top_land_width_mm)?;
        Ok(())
    }
}

/// How the adopted skirt length relates to the calculated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthAdjustment {
    /// Calculated length used as is
    None,
    /// Raised to the lower practical bound
    RaisedToMinimum,
    /// Reduced to the upper practical bound
    ReducedToMaximum,
}

/// Results from the skirt stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkirtResult {
    /// Maximum gas load P (N)
    pub max_gas_load_n: f64,
    /// Side thrust R (N)
    pub side_thrust_n: f64,

    /// l = R/(p_b·D) (mm)
    pub calculated_length_mm: f64,
    /// Practical range 0.65·D to 0.8·D
    pub practical_range: DimensionRange,
    /// Adopted skirt length (mm)
    pub length_mm: f64,
    pub length_adjustment: LengthAdjustment,

    /// Lands counted in the ring section
    pub land_count: u32,
    /// n_R·t2 + lands·b2 (mm)
    pub ring_section_length_mm: f64,
    /// Skirt + ring section + top land (mm)
    pub total_length_mm: f64,
}

/// Reconcile a calculated skirt length with the practical range.
pub fn adopt_length(calculated_mm: f64, range: DimensionRange, policy: SkirtLengthPolicy) -> (f64, LengthAdjustment) {
    match policy {
        SkirtLengthPolicy::Calculated => (calculated_mm, LengthAdjustment::None),
        SkirtLengthPolicy::LowerBoundOnly => {
            if calculated_mm < range.min_mm {
                (range.min_mm, LengthAdjustment::RaisedToMinimum)
            } else {
                (calculated_mm, LengthAdjustment::None)
            }
        }
        SkirtLengthPolicy::Clamp => {
            if calculated_mm < range.min_mm {
                (range.min_mm, LengthAdjustment::RaisedToMinimum)
            } else if calculated_mm > range.max_mm {
                (range.max_mm, LengthAdjustment::ReducedToMaximum)
            } else {
                (calculated_mm, LengthAdjustment::None)
            }
        }
    }
}

/// Calculate skirt and overall piston length.
pub fn calculate(input: &SkirtInput, constants: &DesignConstants) -> CalcResult<SkirtResult> {
    input.validate()?;

    let d = input.bore_diameter_mm;
    let gas_load = max_gas_load(d, input.max_gas_pressure_mpa);
    let thrust = side_thrust(gas_load, constants.side_thrust_ratio);

    let calculated_length_mm = thrust / (input.skirt_bearing_pressure_mpa * d);
    let practical_range = DimensionRange::new(constants.skirt_min_factor * d, constants.skirt_max_factor * d);
    let (length_mm, length_adjustment) =
        adopt_length(calculated_length_mm, practical_range, constants.skirt_length_policy);

    let land_count = constants.land_count.lands(input.number_of_rings);
    let ring_section_length_mm = f64::from(input.number_of_rings) * input.axial_ring_thickness_mm
        + f64::from(land_count) * input.land_width_mm;

    Ok(SkirtResult {
        max_gas_load_n: gas_load,
        side_thrust_n: thrust,
        calculated_length_mm,
        practical_range,
        length_mm,
        length_adjustment,
        land_count,
        ring_section_length_mm,
        total_length_mm: length_mm + ring_section_length_mm + input.top_land_width_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LandCount;

    fn test_skirt() -> SkirtInput {
        SkirtInput {
            bore_diameter_mm: 100.0,
            max_gas_pressure_mpa: 5.0,
            skirt_bearing_pressure_mpa: 0.45,
            number_of_rings: 4,
            axial_ring_thickness_mm: 2.5,
            land_width_mm: 2.125,
            top_land_width_mm: 17.2777,
        }
    }

    #[test]
    fn test_loads() {
        let result = calculate(&test_skirt(), &DesignConstants::default()).unwrap();
        assert!((result.max_gas_load_n - 39_269.908).abs() < 0.001);
        assert!((result.side_thrust_n - 3_926.991).abs() < 0.001);
        assert!((result.calculated_length_mm - 87.266).abs() < 0.001);
    }

    #[test]
    fn test_clamp_to_maximum() {
        let result = calculate(&test_skirt(), &DesignConstants::default()).unwrap();
        assert_eq!(result.length_mm, 80.0);
        assert_eq!(result.length_adjustment, LengthAdjustment::ReducedToMaximum);
    }

    #[test]
    fn test_lower_bound_only_keeps_long_skirt() {
        let constants = DesignConstants {
            skirt_length_policy: SkirtLengthPolicy::LowerBoundOnly,
            ..Default::default()
        };
        let result = calculate(&test_skirt(), &constants).unwrap();
        assert_eq!(result.length_mm, result.calculated_length_mm);
        assert_eq!(result.length_adjustment, LengthAdjustment::None);
    }

    #[test]
    fn test_short_skirt_raised() {
        let range = DimensionRange::new(65.0, 80.0);
        for policy in [SkirtLengthPolicy::Clamp, SkirtLengthPolicy::LowerBoundOnly] {
            assert_eq!(adopt_length(40.0, range, policy), (65.0, LengthAdjustment::RaisedToMinimum));
        }
        assert_eq!(
            adopt_length(40.0, range, SkirtLengthPolicy::Calculated),
            (40.0, LengthAdjustment::None)
        );
        assert_eq!(adopt_length(70.0, range, SkirtLengthPolicy::Clamp), (70.0, LengthAdjustment::None));
    }

    #[test]
    fn test_ring_section_between_rings() {
        let result = calculate(&test_skirt(), &DesignConstants::default()).unwrap();
        assert_eq!(result.land_count, 3);
        assert!((result.ring_section_length_mm - 16.375).abs() < 1e-9);
        assert!((result.total_length_mm - (80.0 + 16.375 + 17.2777)).abs() < 1e-9);
    }

    #[test]
    fn test_ring_section_one_per_ring() {
        let constants = DesignConstants {
            land_count: LandCount::OnePerRing,
            ..Default::default()
        };
        let result = calculate(&test_skirt(), &constants).unwrap();
        assert_eq!(result.land_count, 4);
        assert!((result.ring_section_length_mm - 18.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_bearing_pressure() {
        let mut input = test_skirt();
        input.skirt_bearing_pressure_mpa = 0.0;
        let err = calculate(&input, &DesignConstants::default()).unwrap_err();
        assert_eq!(err.field(), Some("skirt_bearing_pressure_mpa"));
    }
}
