//! # Unit Types
//!
//! Lightweight newtype wrappers used where a formula crosses unit systems.
//!
//! Piston dimensions are specified and reported in the workshop units of
//! machine-design practice (mm, N, N/mm² = MPa). The heat-dissipation chain
//! for the crown mixes those with kJ/kg and kg/BP/hr, so it is evaluated in
//! SI (m, Pa, W) and converted back to mm at the end. These wrappers make
//! each of those conversions explicit.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::units::{Meters, Millimeters, SqMeters, SqMillimeters};
//!
//! let stroke = Millimeters(125.0);
//! let stroke_m: Meters = stroke.into();
//! assert_eq!(stroke_m.0, 0.125);
//!
//! let area: SqMeters = SqMillimeters(7_853.98).into();
//! assert!((area.0 - 0.00785398).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMillimeters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMeters(pub f64);

impl From<SqMillimeters> for SqMeters {
    fn from(mm2: SqMillimeters) -> Self {
        SqMeters(mm2.0 / 1.0e6)
    }
}

// ============================================================================
// Pressure / Stress Units
// ============================================================================

/// Pressure or stress in megapascals (identical to N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Pressure in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

impl From<MegaPascals> for Pascals {
    fn from(mpa: MegaPascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

// ============================================================================
// Specific Energy Units
// ============================================================================

/// Calorific value in kJ/kg
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KjPerKg(pub f64);

/// Calorific value in J/kg
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JPerKg(pub f64);

impl From<KjPerKg> for JPerKg {
    fn from(kj: KjPerKg) -> Self {
        JPerKg(kj.0 * 1000.0)
    }
}

/// Scaling by a dimensionless factor (efficiencies, fractions)
impl Mul<f64> for Watts {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Watts(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let m: Meters = Millimeters(125.0).into();
        assert_eq!(m.0, 0.125);
        let back: Millimeters = m.into();
        assert_eq!(back.0, 125.0);
    }

    #[test]
    fn test_mpa_to_pa() {
        let pa: Pascals = MegaPascals(0.75).into();
        assert_eq!(pa.0, 750_000.0);
    }

    #[test]
    fn test_watts_to_kilowatts() {
        let kw: Kilowatts = Watts(9_817.5).into();
        assert!((kw.0 - 9.8175).abs() < 1e-12);
    }

    #[test]
    fn test_calorific_value() {
        let j: JPerKg = KjPerKg(42_000.0).into();
        assert_eq!(j.0, 42_000_000.0);
    }

    #[test]
    fn test_power_scaling() {
        assert_eq!((Watts(1_000.0) * 0.8).0, 800.0);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
