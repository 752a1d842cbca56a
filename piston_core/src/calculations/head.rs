//! # Piston Head Thickness
//!
//! Sizes the crown from two independent criteria and adopts the larger:
//!
//! - **Strength**: Grashof's clamped-plate formula under peak gas pressure.
//! - **Heat dissipation**: enough section to conduct the crown's share of
//!   fuel heat to the cylinder wall.
//!
//! When the adopted thickness exceeds the rib threshold (6 mm by default)
//! the crown needs stiffening ribs of thickness t_H/3 to t_H/2.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::calculations::head::{calculate, HeadCriterion, HeadInput};
//! use piston_core::materials::PistonMaterial;
//! use piston_core::settings::DesignConstants;
//!
//! let input = HeadInput {
//!     bore_diameter_mm: 100.0,
//!     stroke_length_mm: 125.0,
//!     max_gas_pressure_mpa: 5.0,
//!     engine_speed_rpm: 2000.0,
//!     imep_mpa: 0.75,
//!     mechanical_efficiency: 0.8,
//!     fuel_consumption_kg_per_bp_hr: 0.15,
//!     higher_calorific_value_kj_per_kg: 42_000.0,
//!     material: PistonMaterial::CastIron.properties(),
//! };
//!
//! let result = calculate(&input, &DesignConstants::default()).unwrap();
//! assert_eq!(result.governing, HeadCriterion::Strength);
//! assert!(result.ribs_required());
//! ```

use serde::{Deserialize, Serialize};

use super::DimensionRange;
use crate::equations::crown::{
    brake_power, crown_heat_flow, grashof_thickness, heat_dissipation_thickness, indicated_power,
};
use crate::errors::{require_in_range, require_positive, CalcResult};
use crate::materials::MaterialProperties;
use crate::settings::DesignConstants;
use crate::units::{Kilowatts, KjPerKg, MegaPascals, Millimeters};

/// Inputs for the head-thickness stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadInput {
    pub bore_diameter_mm: f64,
    pub stroke_length_mm: f64,
    pub max_gas_pressure_mpa: f64,
    pub engine_speed_rpm: f64,
    pub imep_mpa: f64,
    pub mechanical_efficiency: f64,
    pub fuel_consumption_kg_per_bp_hr: f64,
    pub higher_calorific_value_kj_per_kg: f64,
    /// Resolved crown material properties (after overrides)
    pub material: MaterialProperties,
}

impl HeadInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("bore_diameter_mm", self.bore_diameter_mm)?;
        require_positive("stroke_length_mm", self.stroke_length_mm)?;
        require_positive("max_gas_pressure_mpa", self.max_gas_pressure_mpa)?;
        require_positive("engine_speed_rpm", self.engine_speed_rpm)?;
        require_positive("imep_mpa", self.imep_mpa)?;
        require_in_range("mechanical_efficiency", self.mechanical_efficiency, f64::MIN_POSITIVE, 1.0)?;
        require_positive("fuel_consumption_kg_per_bp_hr", self.fuel_consumption_kg_per_bp_hr)?;
        require_positive("higher_calorific_value_kj_per_kg", self.higher_calorific_value_kj_per_kg)?;
        require_positive(
            "allowable_bending_stress_head_mpa",
            self.material.allowable_bending_stress_head_mpa,
        )?;
        require_positive("thermal_conductivity_w_mc", self.material.thermal_conductivity_w_mc)?;
        require_positive("head_to_wall_temp_diff_c", self.material.head_to_wall_temp_diff_c)?;
        Ok(())
    }
}

/// Which criterion set the adopted head thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadCriterion {
    Strength,
    HeatDissipation,
}

impl HeadCriterion {
    pub fn label(&self) -> &'static str {
        match self {
            HeadCriterion::Strength => "strength",
            HeadCriterion::HeatDissipation => "heat dissipation",
        }
    }
}

impl std::fmt::Display for HeadCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Results from the head-thickness stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadResult {
    /// Thickness from Grashof's formula (mm)
    pub strength_thickness_mm: f64,

    // === Heat chain ===
    pub indicated_power_kw: f64,
    pub brake_power_kw: f64,
    /// Heat conducted through the crown (W)
    pub heat_flow_w: f64,
    /// Thickness from heat dissipation (mm)
    pub heat_thickness_mm: f64,

    /// Adopted thickness, max of the two criteria (mm)
    pub thickness_mm: f64,
    pub governing: HeadCriterion,

    /// Recommended rib thickness, present only when ribs are required
    pub rib_thickness: Option<DimensionRange>,
}

impl HeadResult {
    /// True when the crown needs stiffening ribs
    pub fn ribs_required(&self) -> bool {
        self.rib_thickness.is_some()
    }
}

/// Rib recommendation for a crown of `thickness_mm`.
///
/// Ribs are required only when the thickness is strictly greater than the
/// threshold; the recommended rib thickness is t_H/3 to t_H/2.
pub fn rib_recommendation(thickness_mm: f64, threshold_mm: f64) -> Option<DimensionRange> {
    if thickness_mm > threshold_mm {
        Some(DimensionRange::new(thickness_mm / 3.0, thickness_mm / 2.0))
    } else {
        None
    }
}

/// Calculate the piston head thickness.
pub fn calculate(input: &HeadInput, constants: &DesignConstants) -> CalcResult<HeadResult> {
    input.validate()?;

    let strength_thickness_mm = grashof_thickness(
        input.max_gas_pressure_mpa,
        input.bore_diameter_mm,
        input.material.allowable_bending_stress_head_mpa,
    );

    let indicated = indicated_power(
        MegaPascals(input.imep_mpa),
        Millimeters(input.stroke_length_mm),
        Millimeters(input.bore_diameter_mm),
        constants.cycle.power_strokes_per_min(input.engine_speed_rpm),
    );
    let brake = brake_power(indicated, input.mechanical_efficiency);
    let heat = crown_heat_flow(
        constants.crown_heat_fraction,
        KjPerKg(input.higher_calorific_value_kj_per_kg),
        input.fuel_consumption_kg_per_bp_hr,
        brake,
    );
    let heat_thickness = heat_dissipation_thickness(
        heat,
        constants.conduction_factor,
        input.material.thermal_conductivity_w_mc,
        input.material.head_to_wall_temp_diff_c,
    );

    let (thickness_mm, governing) = if heat_thickness.0 > strength_thickness_mm {
        (heat_thickness.0, HeadCriterion::HeatDissipation)
    } else {
        (strength_thickness_mm, HeadCriterion::Strength)
    };

    Ok(HeadResult {
        strength_thickness_mm,
        indicated_power_kw: Kilowatts::from(indicated).0,
        brake_power_kw: Kilowatts::from(brake).0,
        heat_flow_w: heat.0,
        heat_thickness_mm: heat_thickness.0,
        thickness_mm,
        governing,
        rib_thickness: rib_recommendation(thickness_mm, constants.rib_threshold_mm),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::PistonMaterial;

    fn test_head() -> HeadInput {
        HeadInput {
            bore_diameter_mm: 100.0,
            stroke_length_mm: 125.0,
            max_gas_pressure_mpa: 5.0,
            engine_speed_rpm: 2000.0,
            imep_mpa: 0.75,
            mechanical_efficiency: 0.8,
            fuel_consumption_kg_per_bp_hr: 0.15,
            higher_calorific_value_kj_per_kg: 42_000.0,
            material: PistonMaterial::CastIron.properties(),
        }
    }

    #[test]
    fn test_strength_thickness() {
        let result = calculate(&test_head(), &DesignConstants::default()).unwrap();
        assert!((result.strength_thickness_mm - 15.707).abs() < 0.001);
    }

    #[test]
    fn test_heat_chain() {
        let result = calculate(&test_head(), &DesignConstants::default()).unwrap();
        assert!((result.indicated_power_kw - 12.272).abs() < 0.001);
        assert!((result.brake_power_kw - 9.817).abs() < 0.001);
        assert!((result.heat_flow_w - 859.03).abs() < 0.01);
        assert!((result.heat_thickness_mm - 6.671).abs() < 0.001);
    }

    #[test]
    fn test_adopted_is_max() {
        let result = calculate(&test_head(), &DesignConstants::default()).unwrap();
        assert_eq!(
            result.thickness_mm,
            result.strength_thickness_mm.max(result.heat_thickness_mm)
        );
        assert_eq!(result.governing, HeadCriterion::Strength);
    }

    #[test]
    fn test_heat_governs_for_hot_crown() {
        // Low conductivity and a small temperature drop push the heat criterion up
        let mut input = test_head();
        input.material.thermal_conductivity_w_mc = 10.0;
        input.material.head_to_wall_temp_diff_c = 50.0;
        let result = calculate(&input, &DesignConstants::default()).unwrap();
        assert_eq!(result.governing, HeadCriterion::HeatDissipation);
        assert_eq!(result.thickness_mm, result.heat_thickness_mm);
    }

    #[test]
    fn test_two_stroke_doubles_power() {
        let four = calculate(&test_head(), &DesignConstants::default()).unwrap();
        let constants = DesignConstants {
            cycle: crate::settings::EngineCycle::TwoStroke,
            ..Default::default()
        };
        let two = calculate(&test_head(), &constants).unwrap();
        assert!((two.indicated_power_kw - 2.0 * four.indicated_power_kw).abs() < 1e-9);
    }

    #[test]
    fn test_rib_threshold_is_strict() {
        assert!(rib_recommendation(6.0, 6.0).is_none());
        let ribs = rib_recommendation(6.01, 6.0).unwrap();
        assert!((ribs.min_mm - 6.01 / 3.0).abs() < 1e-12);
        assert!((ribs.max_mm - 6.01 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rib_range() {
        let result = calculate(&test_head(), &DesignConstants::default()).unwrap();
        assert!(result.ribs_required());
        let ribs = result.rib_thickness.unwrap();
        assert!((ribs.min_mm - 5.236).abs() < 0.001);
        assert!((ribs.max_mm - 7.854).abs() < 0.001);
    }

    #[test]
    fn test_invalid_efficiency() {
        let mut input = test_head();
        input.mechanical_efficiency = 1.2;
        let err = calculate(&input, &DesignConstants::default()).unwrap_err();
        assert_eq!(err.field(), Some("mechanical_efficiency"));
    }

    #[test]
    fn test_zero_conductivity() {
        let mut input = test_head();
        input.material.thermal_conductivity_w_mc = 0.0;
        assert!(calculate(&input, &DesignConstants::default()).is_err());
    }
}
