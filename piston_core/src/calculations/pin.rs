//! # Piston Pin
//!
//! The gudgeon pin is sized from the bearing pressure in the connecting-rod
//! small-end bush, then checked as a hollow beam under the standard
//! piston-pin bending approximation M = P·D/8.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::calculations::pin::{calculate, PinInput, PinVerdict};
//! use piston_core::settings::DesignConstants;
//!
//! let input = PinInput {
//!     bore_diameter_mm: 100.0,
//!     max_gas_load_n: 39_269.908,
//!     pin_bearing_pressure_mpa: 25.0,
//!     pin_allowable_bending_stress_mpa: 140.0,
//! };
//!
//! let result = calculate(&input, &DesignConstants::default()).unwrap();
//! assert_eq!(result.verdict, PinVerdict::Safe);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::loads::{bending_stress, pin_max_moment};
use crate::equations::section::hollow_circle_section_modulus;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::settings::{DesignConstants, PinDiameterRule};

/// Inputs for the pin stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinInput {
    pub bore_diameter_mm: f64,
    /// Maximum gas load P from the skirt stage (N)
    pub max_gas_load_n: f64,
    /// Bearing pressure in the small-end bush (N/mm²)
    pub pin_bearing_pressure_mpa: f64,
    pub pin_allowable_bending_stress_mpa: f64,
}

impl PinInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("bore_diameter_mm", self.bore_diameter_mm)?;
        require_positive("max_gas_load_n", self.max_gas_load_n)?;
        require_positive("pin_bearing_pressure_mpa", self.pin_bearing_pressure_mpa)?;
        require_positive(
            "pin_allowable_bending_stress_mpa",
            self.pin_allowable_bending_stress_mpa,
        )?;
        Ok(())
    }
}

/// Outcome of the pin bending check. An unsafe pin is a valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinVerdict {
    Safe,
    Unsafe,
}

impl PinVerdict {
    /// Safe when the induced stress does not exceed the allowable (inclusive).
    pub fn from_stresses(induced_mpa: f64, allowable_mpa: f64) -> Self {
        if induced_mpa <= allowable_mpa {
            PinVerdict::Safe
        } else {
            PinVerdict::Unsafe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PinVerdict::Safe => "SAFE",
            PinVerdict::Unsafe => "UNSAFE",
        }
    }
}

impl std::fmt::Display for PinVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Results from the pin stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinResult {
    /// l1, length seated in the rod bush (mm)
    pub length_in_bush_mm: f64,
    /// d0 (mm)
    pub outside_diameter_mm: f64,
    /// di (mm)
    pub inside_diameter_mm: f64,
    /// l2 = D − l1 (mm)
    pub support_span_mm: f64,

    // === Bending check ===
    /// M (N·mm)
    pub max_bending_moment_nmm: f64,
    /// Z (mm³)
    pub section_modulus_mm3: f64,
    pub induced_stress_mpa: f64,
    pub allowable_stress_mpa: f64,
    /// σb / σb_allowable
    pub utilisation: f64,
    pub verdict: PinVerdict,

    /// Mean boss diameter, reporting only (mm)
    pub boss_diameter_mm: f64,
}

impl PinResult {
    pub fn is_safe(&self) -> bool {
        self.verdict == PinVerdict::Safe
    }
}

/// Pin outside diameter from the bearing-pressure equality P = p_b1·d0·l1.
///
/// [`PinDiameterRule::RootOfBearingArea`] takes the square root of the same
/// quotient, as printed in some editions.
pub fn outside_diameter(rule: PinDiameterRule, gas_load_n: f64, bearing_pressure_mpa: f64, length_mm: f64) -> f64 {
    let quotient = gas_load_n / (bearing_pressure_mpa * length_mm);
    match rule {
        PinDiameterRule::BearingArea => quotient,
        PinDiameterRule::RootOfBearingArea => quotient.sqrt(),
    }
}

/// Size the piston pin and check it in bending.
pub fn calculate(input: &PinInput, constants: &DesignConstants) -> CalcResult<PinResult> {
    input.validate()?;

    let d = input.bore_diameter_mm;
    let length_in_bush_mm = constants.pin_length_factor * d;
    let d0 = outside_diameter(
        constants.pin_diameter_rule,
        input.max_gas_load_n,
        input.pin_bearing_pressure_mpa,
        length_in_bush_mm,
    );
    if !d0.is_finite() || d0 <= 0.0 {
        return Err(CalcError::invalid_input(
            "pin_outside_diameter_mm",
            d0.to_string(),
            "Pin outside diameter must be positive for the section modulus",
        ));
    }
    let di = constants.pin_bore_ratio * d0;

    let moment = pin_max_moment(input.max_gas_load_n, d);
    let z = hollow_circle_section_modulus(d0, di);
    let induced = bending_stress(moment, z);
    let allowable = input.pin_allowable_bending_stress_mpa;

    Ok(PinResult {
        length_in_bush_mm,
        outside_diameter_mm: d0,
        inside_diameter_mm: di,
        support_span_mm: d - length_in_bush_mm,
        max_bending_moment_nmm: moment,
        section_modulus_mm3: z,
        induced_stress_mpa: induced,
        allowable_stress_mpa: allowable,
        utilisation: induced / allowable,
        verdict: PinVerdict::from_stresses(induced, allowable),
        boss_diameter_mm: constants.boss_diameter_factor * d0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pin() -> PinInput {
        PinInput {
            bore_diameter_mm: 100.0,
            max_gas_load_n: 39_269.908_169_872_42,
            pin_bearing_pressure_mpa: 25.0,
            pin_allowable_bending_stress_mpa: 140.0,
        }
    }

    #[test]
    fn test_pin_geometry() {
        let result = calculate(&test_pin(), &DesignConstants::default()).unwrap();
        assert!((result.length_in_bush_mm - 45.0).abs() < 1e-9);
        assert!((result.outside_diameter_mm - 34.9066).abs() < 1e-4);
        assert!((result.inside_diameter_mm - 20.9440).abs() < 1e-4);
        assert!((result.support_span_mm - 55.0).abs() < 1e-9);
        assert!((result.boss_diameter_mm - 48.869).abs() < 1e-3);
    }

    #[test]
    fn test_pin_bending() {
        let result = calculate(&test_pin(), &DesignConstants::default()).unwrap();
        assert!((result.max_bending_moment_nmm - 490_873.85).abs() < 0.01);
        assert!((result.section_modulus_mm3 - 3_634.47).abs() < 0.01);
        assert!((result.induced_stress_mpa - 135.06).abs() < 0.01);
        assert!(result.is_safe());
        assert!(result.utilisation < 1.0);
    }

    #[test]
    fn test_unsafe_pin() {
        let mut input = test_pin();
        input.pin_allowable_bending_stress_mpa = 100.0;
        let result = calculate(&input, &DesignConstants::default()).unwrap();
        assert_eq!(result.verdict, PinVerdict::Unsafe);
        assert!(result.utilisation > 1.0);
    }

    #[test]
    fn test_verdict_boundary_inclusive() {
        assert_eq!(PinVerdict::from_stresses(140.0, 140.0), PinVerdict::Safe);
        assert_eq!(PinVerdict::from_stresses(140.000_001, 140.0), PinVerdict::Unsafe);
        assert_eq!(PinVerdict::Unsafe.to_string(), "UNSAFE");
    }

    #[test]
    fn test_root_rule() {
        let constants = DesignConstants {
            pin_diameter_rule: PinDiameterRule::RootOfBearingArea,
            ..Default::default()
        };
        let result = calculate(&test_pin(), &constants).unwrap();
        assert!((result.outside_diameter_mm - 5.9082).abs() < 1e-4);
        // A pin that thin fails the bending check
        assert_eq!(result.verdict, PinVerdict::Unsafe);
    }

    #[test]
    fn test_solid_pin() {
        let constants = DesignConstants {
            pin_bore_ratio: 0.0,
            ..Default::default()
        };
        let result = calculate(&test_pin(), &constants).unwrap();
        assert_eq!(result.inside_diameter_mm, 0.0);
    }

    #[test]
    fn test_invalid_bearing_pressure() {
        let mut input = test_pin();
        input.pin_bearing_pressure_mpa = -1.0;
        let err = calculate(&input, &DesignConstants::default()).unwrap_err();
        assert_eq!(err.field(), Some("pin_bearing_pressure_mpa"));
    }
}
