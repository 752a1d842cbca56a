//! # Piston Rings
//!
//! Ring cross-section, lands and gaps for the compression rings.
//!
//! - Radial thickness t1 from the wall pressure the ring must exert and the
//!   allowable bending stress of the ring material.
//! - Axial thickness t2 = max(f·t1, D/(10·n_R)); the empirical term keeps
//!   thin rings from being used in large bores with few rings.
//! - Top land b1 from the head thickness, other lands b2 from t2.

use serde::{Deserialize, Serialize};

use super::DimensionRange;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::{DesignConstants, RadialThicknessRule};

/// Allowed number of piston rings
pub const RING_COUNT_RANGE: std::ops::RangeInclusive<u32> = 3..=7;

/// Inputs for the ring stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingInput {
    pub bore_diameter_mm: f64,
    pub number_of_rings: u32,
    /// Allowable radial pressure of the ring on the cylinder wall p_w (N/mm²)
    pub ring_wall_pressure_mpa: f64,
    /// Allowable bending stress of the ring material (MPa)
    pub ring_allowable_bending_stress_mpa: f64,
    /// Adopted head thickness t_H (mm), sets the top land
    pub head_thickness_mm: f64,
}

impl RingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("bore_diameter_mm", self.bore_diameter_mm)?;
        validate_ring_count(self.number_of_rings)?;
        require_positive("ring_wall_pressure_mpa", self.ring_wall_pressure_mpa)?;
        require_positive("ring_allowable_bending_stress_mpa", self.ring_allowable_bending_stress_mpa)?;
        require_positive("head_thickness_mm", self.head_thickness_mm)?;
        Ok(())
    }
}

pub(crate) fn validate_ring_count(rings: u32) -> CalcResult<()> {
    if !RING_COUNT_RANGE.contains(&rings) {
        return Err(CalcError::invalid_input(
            "number_of_rings",
            rings.to_string(),
            format!(
                "Number of rings must be between {} and {}",
                RING_COUNT_RANGE.start(),
                RING_COUNT_RANGE.end()
            ),
        ));
    }
    Ok(())
}

/// Results from the ring stage. All dimensions in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingResult {
    /// Radial thickness t1
    pub radial_thickness_mm: f64,

    /// Adopted axial thickness t2
    pub axial_thickness_mm: f64,
    /// Candidate f·t1
    pub axial_from_radial_mm: f64,
    /// Candidate D/(10·n_R)
    pub axial_empirical_mm: f64,

    /// Top land width b1
    pub top_land_width_mm: f64,
    /// Width of the other lands b2
    pub land_width_mm: f64,

    /// Gap between ring ends before assembly
    pub free_gap_mm: f64,
    /// Adopted gap when fitted in the cylinder
    pub fitted_gap_mm: f64,
    /// Practical fitted-gap range 0.002·D to 0.004·D
    pub fitted_gap_range: DimensionRange,

    /// Radial depth of the ring groove
    pub groove_depth_mm: f64,
}

/// Radial ring thickness for the selected formula.
pub fn radial_thickness(rule: RadialThicknessRule, bore_mm: f64, wall_pressure: f64, sigma_t: f64) -> f64 {
    match rule {
        RadialThicknessRule::BoreScaled => bore_mm * (3.0 * wall_pressure / sigma_t).sqrt(),
        RadialThicknessRule::RootOfProduct => (3.0 * wall_pressure * bore_mm / sigma_t).sqrt(),
    }
}

/// Calculate ring dimensions.
pub fn calculate(input: &RingInput, constants: &DesignConstants) -> CalcResult<RingResult> {
    input.validate()?;

    let d = input.bore_diameter_mm;
    let t1 = radial_thickness(
        constants.radial_thickness_rule,
        d,
        input.ring_wall_pressure_mpa,
        input.ring_allowable_bending_stress_mpa,
    );

    let axial_from_radial_mm = constants.ring_axial_factor * t1;
    let axial_empirical_mm = d / (10.0 * f64::from(input.number_of_rings));
    let t2 = axial_from_radial_mm.max(axial_empirical_mm);

    Ok(RingResult {
        radial_thickness_mm: t1,
        axial_thickness_mm: t2,
        axial_from_radial_mm,
        axial_empirical_mm,
        top_land_width_mm: constants.top_land_factor * input.head_thickness_mm,
        land_width_mm: constants.land_width_factor * t2,
        free_gap_mm: constants.free_gap_factor * t1,
        fitted_gap_mm: constants.fitted_gap_factor * d,
        fitted_gap_range: DimensionRange::new(0.002 * d, 0.004 * d),
        groove_depth_mm: t1 + constants.groove_clearance_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rings() -> RingInput {
        RingInput {
            bore_diameter_mm: 100.0,
            number_of_rings: 4,
            ring_wall_pressure_mpa: 0.035,
            ring_allowable_bending_stress_mpa: 90.0,
            head_thickness_mm: 15.707,
        }
    }

    #[test]
    fn test_radial_thickness() {
        let result = calculate(&test_rings(), &DesignConstants::default()).unwrap();
        // √(3·0.035·100/90)
        assert!((result.radial_thickness_mm - 0.34157).abs() < 1e-5);
    }

    #[test]
    fn test_radial_thickness_bore_scaled() {
        let t1 = radial_thickness(RadialThicknessRule::BoreScaled, 100.0, 0.035, 90.0);
        assert!((t1 - 3.4157).abs() < 1e-4);
    }

    #[test]
    fn test_axial_thickness_is_max_of_candidates() {
        let result = calculate(&test_rings(), &DesignConstants::default()).unwrap();
        assert_eq!(
            result.axial_thickness_mm,
            (0.7 * result.radial_thickness_mm).max(100.0 / 40.0)
        );
        // Empirical term governs: 0.7·0.3416 = 0.24 < 2.5
        assert_eq!(result.axial_thickness_mm, 2.5);
        assert_eq!(result.axial_empirical_mm, 2.5);
    }

    #[test]
    fn test_axial_factor_configurable() {
        let constants = DesignConstants {
            radial_thickness_rule: RadialThicknessRule::BoreScaled,
            ring_axial_factor: 1.0,
            ..Default::default()
        };
        let result = calculate(&test_rings(), &constants).unwrap();
        assert_eq!(result.axial_thickness_mm, result.radial_thickness_mm);
    }

    #[test]
    fn test_lands_and_gaps() {
        let result = calculate(&test_rings(), &DesignConstants::default()).unwrap();
        assert!((result.top_land_width_mm - 1.1 * 15.707).abs() < 1e-9);
        assert!((result.land_width_mm - 2.125).abs() < 1e-9);
        assert!((result.free_gap_mm - 1.19548).abs() < 1e-5);
        assert!((result.fitted_gap_mm - 0.3).abs() < 1e-9);
        assert!(result.fitted_gap_range.contains(result.fitted_gap_mm));
        assert!((result.groove_depth_mm - 0.74157).abs() < 1e-5);
    }

    #[test]
    fn test_ring_count_limits() {
        for rings in [2, 8, 0] {
            let mut input = test_rings();
            input.number_of_rings = rings;
            let err = calculate(&input, &DesignConstants::default()).unwrap_err();
            assert_eq!(err.field(), Some("number_of_rings"));
        }
        for rings in [3, 7] {
            let mut input = test_rings();
            input.number_of_rings = rings;
            assert!(calculate(&input, &DesignConstants::default()).is_ok());
        }
    }
}
