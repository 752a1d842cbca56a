//! # Design Constants
//!
//! Every empirical constant and policy choice the piston formulas depend on.
//! Textbook editions disagree on several of these (ring axial multiplier,
//! land count, skirt clamping, unit handling of the pin diameter), so they
//! are collected here with documented defaults and can be overridden from a
//! TOML document. Unspecified fields keep their defaults.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::settings::{DesignConstants, SkirtLengthPolicy};
//!
//! let constants = DesignConstants::from_toml_str(r#"
//! ring_axial_factor = 0.85
//! skirt_length_policy = "LowerBoundOnly"
//! "#).unwrap();
//!
//! assert_eq!(constants.ring_axial_factor, 0.85);
//! assert_eq!(constants.skirt_length_policy, SkirtLengthPolicy::LowerBoundOnly);
//! assert_eq!(constants.top_land_factor, 1.1);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_in_range, require_positive, CalcError, CalcResult};

/// Engine working cycle, which sets power strokes per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EngineCycle {
    /// One power stroke every two revolutions (N/2 per minute)
    #[default]
    FourStroke,
    /// One power stroke per revolution (N per minute)
    TwoStroke,
}

impl EngineCycle {
    /// Power strokes per minute at `speed_rpm`
    pub fn power_strokes_per_min(&self, speed_rpm: f64) -> f64 {
        match self {
            EngineCycle::FourStroke => speed_rpm / 2.0,
            EngineCycle::TwoStroke => speed_rpm,
        }
    }
}

/// Form of the ring radial-thickness formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RadialThicknessRule {
    /// t1 = √(3·p_w·D/σt)
    #[default]
    RootOfProduct,
    /// t1 = D·√(3·p_w/σt), the dimensionally consistent form
    BoreScaled,
}

/// How the calculated skirt length is reconciled with the practical range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkirtLengthPolicy {
    /// Clamp into [min, max]
    #[default]
    Clamp,
    /// Raise to the lower bound only; long skirts are kept
    LowerBoundOnly,
    /// Use the calculated length unchanged
    Calculated,
}

/// Number of lands counted in the ring-section length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LandCount {
    /// n_R − 1 lands between the rings (top land counted separately)
    #[default]
    BetweenRings,
    /// n_R lands, one below each ring
    OnePerRing,
}

impl LandCount {
    /// Lands counted for `rings` piston rings
    pub fn lands(&self, rings: u32) -> u32 {
        match self {
            LandCount::BetweenRings => rings.saturating_sub(1),
            LandCount::OnePerRing => rings,
        }
    }
}

/// Form of the pin outside-diameter formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PinDiameterRule {
    /// d0 = P/(p_b1·l1), straight from the bearing equality P = p_b1·d0·l1
    #[default]
    BearingArea,
    /// d0 = √(P/(p_b1·l1))
    RootOfBearingArea,
}

/// Empirical constants and policies for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConstants {
    // === Head ===
    pub cycle: EngineCycle,
    /// Share of fuel heat conducted through the crown
    pub crown_heat_fraction: f64,
    /// Disc conduction constant (≈ 4π)
    pub conduction_factor: f64,
    /// Ribs are required when the adopted head thickness exceeds this (mm)
    pub rib_threshold_mm: f64,

    // === Rings ===
    pub radial_thickness_rule: RadialThicknessRule,
    /// f in t2 = max(f·t1, D/(10·n_R)), range [0.7, 1.0]
    pub ring_axial_factor: f64,
    /// b1 = factor·t_H, range [1.0, 1.2]
    pub top_land_factor: f64,
    /// b2 = factor·t2, range [0.75, 1.0]
    pub land_width_factor: f64,
    /// Free ring gap = factor·t1, range [3.5, 3.75]
    pub free_gap_factor: f64,
    /// Fitted ring gap = factor·D, range [0.002, 0.004]
    pub fitted_gap_factor: f64,
    /// Groove depth = t1 + clearance (mm)
    pub groove_clearance_mm: f64,

    // === Barrel ===
    /// t4 = factor·t3, range [0.25, 0.35]
    pub open_end_factor: f64,

    // === Skirt ===
    /// Side thrust as a fraction of the maximum gas load
    pub side_thrust_ratio: f64,
    pub skirt_min_factor: f64,
    pub skirt_max_factor: f64,
    pub skirt_length_policy: SkirtLengthPolicy,
    pub land_count: LandCount,

    // === Pin ===
    /// l1 = factor·D
    pub pin_length_factor: f64,
    pub pin_diameter_rule: PinDiameterRule,
    /// di = ratio·d0
    pub pin_bore_ratio: f64,
    /// d_boss = factor·d0, range [1.4, 1.5]
    pub boss_diameter_factor: f64,
}

impl Default for DesignConstants {
    fn default() -> Self {
        DesignConstants {
            cycle: EngineCycle::FourStroke,
            crown_heat_fraction: 0.05,
            conduction_factor: 12.56,
            rib_threshold_mm: 6.0,
            radial_thickness_rule: RadialThicknessRule::RootOfProduct,
            ring_axial_factor: 0.7,
            top_land_factor: 1.1,
            land_width_factor: 0.85,
            free_gap_factor: 3.5,
            fitted_gap_factor: 0.003,
            groove_clearance_mm: 0.4,
            open_end_factor: 0.3,
            side_thrust_ratio: 0.1,
            skirt_min_factor: 0.65,
            skirt_max_factor: 0.8,
            skirt_length_policy: SkirtLengthPolicy::Clamp,
            land_count: LandCount::BetweenRings,
            pin_length_factor: 0.45,
            pin_diameter_rule: PinDiameterRule::BearingArea,
            pin_bore_ratio: 0.6,
            boss_diameter_factor: 1.4,
        }
    }
}

impl DesignConstants {
    /// Parse a (possibly partial) TOML document and validate it.
    pub fn from_toml_str(source: &str) -> CalcResult<Self> {
        let constants: DesignConstants = toml::from_str(source)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Serialize to TOML, e.g. to write out a starting template.
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Check every constant against its documented range.
    pub fn validate(&self) -> CalcResult<()> {
        require_in_range("constants.crown_heat_fraction", self.crown_heat_fraction, f64::MIN_POSITIVE, 1.0)?;
        require_positive("constants.conduction_factor", self.conduction_factor)?;
        require_positive("constants.rib_threshold_mm", self.rib_threshold_mm)?;

        require_in_range("constants.ring_axial_factor", self.ring_axial_factor, 0.7, 1.0)?;
        require_in_range("constants.top_land_factor", self.top_land_factor, 1.0, 1.2)?;
        require_in_range("constants.land_width_factor", self.land_width_factor, 0.75, 1.0)?;
        require_in_range("constants.free_gap_factor", self.free_gap_factor, 3.5, 3.75)?;
        require_in_range("constants.fitted_gap_factor", self.fitted_gap_factor, 0.002, 0.004)?;
        require_in_range("constants.groove_clearance_mm", self.groove_clearance_mm, 0.0, f64::MAX)?;

        require_in_range("constants.open_end_factor", self.open_end_factor, 0.25, 0.35)?;

        require_in_range("constants.side_thrust_ratio", self.side_thrust_ratio, f64::MIN_POSITIVE, 1.0)?;
        require_positive("constants.skirt_min_factor", self.skirt_min_factor)?;
        require_positive("constants.skirt_max_factor", self.skirt_max_factor)?;
        if self.skirt_min_factor > self.skirt_max_factor {
            return Err(CalcError::invalid_input(
                "constants.skirt_min_factor",
                self.skirt_min_factor.to_string(),
                format!("Must not exceed skirt_max_factor ({})", self.skirt_max_factor),
            ));
        }

        require_positive("constants.pin_length_factor", self.pin_length_factor)?;
        if self.pin_length_factor >= 1.0 {
            return Err(CalcError::invalid_input(
                "constants.pin_length_factor",
                self.pin_length_factor.to_string(),
                "Pin bush length must be shorter than the bore",
            ));
        }
        if !(0.0..1.0).contains(&self.pin_bore_ratio) {
            return Err(CalcError::invalid_input(
                "constants.pin_bore_ratio",
                self.pin_bore_ratio.to_string(),
                "Inside diameter must be smaller than outside diameter",
            ));
        }
        require_in_range("constants.boss_diameter_factor", self.boss_diameter_factor, 1.4, 1.5)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DesignConstants::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let constants = DesignConstants::from_toml_str("land_count = \"OnePerRing\"\n").unwrap();
        assert_eq!(constants.land_count, LandCount::OnePerRing);
        assert_eq!(constants.ring_axial_factor, 0.7);
        assert_eq!(constants.cycle, EngineCycle::FourStroke);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let constants = DesignConstants::from_toml_str("").unwrap();
        assert_eq!(constants, DesignConstants::default());
    }

    #[test]
    fn test_out_of_range_factor() {
        let err = DesignConstants::from_toml_str("ring_axial_factor = 0.5\n").unwrap_err();
        assert_eq!(err.field(), Some("constants.ring_axial_factor"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = DesignConstants::from_toml_str("ring_axial_factor = \"high\"\n").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_skirt_bounds_order() {
        let constants = DesignConstants {
            skirt_min_factor: 0.9,
            skirt_max_factor: 0.8,
            ..Default::default()
        };
        assert!(constants.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let constants = DesignConstants {
            pin_diameter_rule: PinDiameterRule::RootOfBearingArea,
            ..Default::default()
        };
        let text = constants.to_toml_string().unwrap();
        assert!(text.contains("RootOfBearingArea"));
        let parsed = DesignConstants::from_toml_str(&text).unwrap();
        assert_eq!(parsed, constants);
    }

    #[test]
    fn test_power_strokes() {
        assert_eq!(EngineCycle::FourStroke.power_strokes_per_min(2000.0), 1000.0);
        assert_eq!(EngineCycle::TwoStroke.power_strokes_per_min(2000.0), 2000.0);
    }

    #[test]
    fn test_land_count() {
        assert_eq!(LandCount::BetweenRings.lands(4), 3);
        assert_eq!(LandCount::OnePerRing.lands(4), 4);
    }
}
