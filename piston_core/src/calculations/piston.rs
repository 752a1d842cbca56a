//! # Piston Design Pipeline
//!
//! [`calculate`] evaluates every stage from a single [`EngineInputs`] record
//! in dependency order (head → rings → barrel → skirt → pin) and returns a
//! [`DesignResult`]. Any invalid input rejects the whole computation; there
//! is no partial result.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::calculations::piston::{compute, EngineInputs};
//!
//! let result = compute(&EngineInputs::default()).unwrap();
//! assert!(result.head.ribs_required());
//! assert!(result.pin.is_safe());
//! ```

use serde::{Deserialize, Serialize};

use super::barrel::{self, BarrelInput, BarrelResult};
use super::head::{self, HeadInput, HeadResult};
use super::pin::{self, PinInput, PinResult};
use super::rings::{self, RingInput, RingResult};
use super::skirt::{self, LengthAdjustment, SkirtInput, SkirtResult};
use super::summary::DesignSummary;
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{require_in_range, require_magnitude, CalcError, CalcResult};
use crate::materials::{MaterialOverrides, MaterialProperties, PistonMaterial};
use crate::settings::{DesignConstants, PinDiameterRule, RadialThicknessRule};

/// Engine operating parameters and material selection for one piston design.
///
/// `Default` carries a worked example: a 100 mm × 125 mm cast-iron piston at
/// 5 N/mm² peak pressure and 2000 rpm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineInputs {
    // === Engine ===
    pub bore_diameter_mm: f64,
    pub stroke_length_mm: f64,
    pub max_gas_pressure_mpa: f64,
    pub engine_speed_rpm: f64,
    pub imep_mpa: f64,
    pub mechanical_efficiency: f64,
    /// Fuel consumption (kg per brake-power hour)
    pub fuel_consumption_kg_per_bp_hr: f64,
    pub higher_calorific_value_kj_per_kg: f64,

    // === Material ===
    pub material: PistonMaterial,
    #[serde(default)]
    pub material_overrides: MaterialOverrides,

    // === Rings ===
    pub number_of_rings: u32,
    pub ring_wall_pressure_mpa: f64,
    pub ring_allowable_bending_stress_mpa: f64,

    // === Skirt and pin ===
    pub skirt_bearing_pressure_mpa: f64,
    pub pin_bearing_pressure_mpa: f64,
    pub pin_allowable_bending_stress_mpa: f64,
}

impl Default for EngineInputs {
    fn default() -> Self {
        Self {
            bore_diameter_mm: 100.0,
            stroke_length_mm: 125.0,
            max_gas_pressure_mpa: 5.0,
            engine_speed_rpm: 2000.0,
            imep_mpa: 0.75,
            mechanical_efficiency: 0.8,
            fuel_consumption_kg_per_bp_hr: 0.15,
            higher_calorific_value_kj_per_kg: 42_000.0,
            material: PistonMaterial::CastIron,
            material_overrides: MaterialOverrides::default(),
            number_of_rings: 4,
            ring_wall_pressure_mpa: 0.035,
            ring_allowable_bending_stress_mpa: 90.0,
            skirt_bearing_pressure_mpa: 0.45,
            pin_bearing_pressure_mpa: 25.0,
            pin_allowable_bending_stress_mpa: 140.0,
        }
    }
}

impl EngineInputs {
    /// Parse inputs from JSON.
    ///
    /// An unknown material key is reported as `InvalidInput` on `material`;
    /// any other malformed document is a `SerializationError`.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if let Some(material) = value.get("material") {
            match material.as_str() {
                Some(key) => {
                    key.parse::<PistonMaterial>()?;
                }
                None => {
                    return Err(CalcError::invalid_input(
                        "material",
                        material.to_string(),
                        "Material must be given as a string key",
                    ));
                }
            }
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate engine-level inputs. Every physical quantity must lie within
    /// the accepted input magnitudes. Stage inputs are validated again by
    /// each stage.
    pub fn validate(&self) -> CalcResult<()> {
        require_magnitude("bore_diameter_mm", self.bore_diameter_mm)?;
        require_magnitude("stroke_length_mm", self.stroke_length_mm)?;
        require_magnitude("max_gas_pressure_mpa", self.max_gas_pressure_mpa)?;
        require_magnitude("engine_speed_rpm", self.engine_speed_rpm)?;
        require_magnitude("imep_mpa", self.imep_mpa)?;
        require_in_range("mechanical_efficiency", self.mechanical_efficiency, f64::MIN_POSITIVE, 1.0)?;
        require_magnitude("fuel_consumption_kg_per_bp_hr", self.fuel_consumption_kg_per_bp_hr)?;
        require_magnitude("higher_calorific_value_kj_per_kg", self.higher_calorific_value_kj_per_kg)?;
        rings::validate_ring_count(self.number_of_rings)?;
        require_magnitude("ring_wall_pressure_mpa", self.ring_wall_pressure_mpa)?;
        require_magnitude("ring_allowable_bending_stress_mpa", self.ring_allowable_bending_stress_mpa)?;
        require_magnitude("skirt_bearing_pressure_mpa", self.skirt_bearing_pressure_mpa)?;
        require_magnitude("pin_bearing_pressure_mpa", self.pin_bearing_pressure_mpa)?;
        require_magnitude("pin_allowable_bending_stress_mpa", self.pin_allowable_bending_stress_mpa)?;
        Ok(())
    }
}

/// Every derived quantity of one piston design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub bore_diameter_mm: f64,
    pub material: PistonMaterial,
    /// Properties after overrides
    pub material_properties: MaterialProperties,
    /// Constants the design was computed with
    pub constants: DesignConstants,

    pub head: HeadResult,
    pub rings: RingResult,
    pub barrel: BarrelResult,
    pub skirt: SkirtResult,
    pub pin: PinResult,

    /// Equations applied, in pipeline order
    pub equations: EquationTracker,
}

impl DesignResult {
    /// Flat projection for display and export
    pub fn summary(&self) -> DesignSummary {
        DesignSummary::from(self)
    }
}

/// Compute a piston design with the default design constants.
pub fn compute(inputs: &EngineInputs) -> CalcResult<DesignResult> {
    calculate(inputs, &DesignConstants::default())
}

/// Compute a piston design.
pub fn calculate(inputs: &EngineInputs, constants: &DesignConstants) -> CalcResult<DesignResult> {
    constants.validate()?;
    inputs.validate()?;

    let material_properties = inputs.material_overrides.resolve(inputs.material)?;
    let mut equations = EquationTracker::new();

    let head = head::calculate(
        &HeadInput {
            bore_diameter_mm: inputs.bore_diameter_mm,
            stroke_length_mm: inputs.stroke_length_mm,
            max_gas_pressure_mpa: inputs.max_gas_pressure_mpa,
            engine_speed_rpm: inputs.engine_speed_rpm,
            imep_mpa: inputs.imep_mpa,
            mechanical_efficiency: inputs.mechanical_efficiency,
            fuel_consumption_kg_per_bp_hr: inputs.fuel_consumption_kg_per_bp_hr,
            higher_calorific_value_kj_per_kg: inputs.higher_calorific_value_kj_per_kg,
            material: material_properties,
        },
        constants,
    )?;
    record_head(&mut equations, &head);

    let rings = rings::calculate(
        &RingInput {
            bore_diameter_mm: inputs.bore_diameter_mm,
            number_of_rings: inputs.number_of_rings,
            ring_wall_pressure_mpa: inputs.ring_wall_pressure_mpa,
            ring_allowable_bending_stress_mpa: inputs.ring_allowable_bending_stress_mpa,
            head_thickness_mm: head.thickness_mm,
        },
        constants,
    )?;
    record_rings(&mut equations, &rings, constants);

    let barrel = barrel::calculate(
        &BarrelInput {
            bore_diameter_mm: inputs.bore_diameter_mm,
            radial_ring_thickness_mm: rings.radial_thickness_mm,
        },
        constants,
    )?;
    equations.record(Equation::BarrelMaxThickness, format!("t3 = {:.2} mm", barrel.max_thickness_mm));
    equations.record(
        Equation::BarrelOpenEndThickness,
        format!("t4 = {:.2} mm", barrel.open_end_thickness_mm),
    );

    let skirt = skirt::calculate(
        &SkirtInput {
            bore_diameter_mm: inputs.bore_diameter_mm,
            max_gas_pressure_mpa: inputs.max_gas_pressure_mpa,
            skirt_bearing_pressure_mpa: inputs.skirt_bearing_pressure_mpa,
            number_of_rings: inputs.number_of_rings,
            axial_ring_thickness_mm: rings.axial_thickness_mm,
            land_width_mm: rings.land_width_mm,
            top_land_width_mm: rings.top_land_width_mm,
        },
        constants,
    )?;
    record_skirt(&mut equations, &skirt);

    let pin = pin::calculate(
        &PinInput {
            bore_diameter_mm: inputs.bore_diameter_mm,
            max_gas_load_n: skirt.max_gas_load_n,
            pin_bearing_pressure_mpa: inputs.pin_bearing_pressure_mpa,
            pin_allowable_bending_stress_mpa: inputs.pin_allowable_bending_stress_mpa,
        },
        constants,
    )?;
    record_pin(&mut equations, &pin, constants);

    Ok(DesignResult {
        bore_diameter_mm: inputs.bore_diameter_mm,
        material: inputs.material,
        material_properties,
        constants: constants.clone(),
        head,
        rings,
        barrel,
        skirt,
        pin,
        equations,
    })
}

fn record_head(equations: &mut EquationTracker, head: &HeadResult) {
    equations.record(
        Equation::GrashofHeadThickness,
        format!("t_H = {:.2} mm (strength)", head.strength_thickness_mm),
    );
    equations.record(Equation::IndicatedPower, format!("IP = {:.2} kW", head.indicated_power_kw));
    equations.record(Equation::BrakePower, format!("BP = {:.2} kW", head.brake_power_kw));
    equations.record(Equation::CrownHeatFlow, format!("H = {:.2} W", head.heat_flow_w));
    equations.record(
        Equation::HeatDissipationThickness,
        format!("t_H = {:.2} mm (heat)", head.heat_thickness_mm),
    );
    equations.record(Equation::AdoptedHeadThickness, format!("t_H = {:.2} mm", head.thickness_mm));
    if let Some(ribs) = head.rib_thickness {
        equations.record(Equation::RibThickness, format!("ribs {}", ribs));
    }
}

fn record_rings(equations: &mut EquationTracker, rings: &RingResult, constants: &DesignConstants) {
    let radial = match constants.radial_thickness_rule {
        RadialThicknessRule::RootOfProduct => Equation::RingRadialThickness,
        RadialThicknessRule::BoreScaled => Equation::RingRadialThicknessBoreScaled,
    };
    equations.record(radial, format!("t1 = {:.2} mm", rings.radial_thickness_mm));
    equations.record(Equation::RingAxialThickness, format!("t2 = {:.2} mm", rings.axial_thickness_mm));
    equations.record(Equation::TopLandWidth, format!("b1 = {:.2} mm", rings.top_land_width_mm));
    equations.record(Equation::RingLandWidth, format!("b2 = {:.2} mm", rings.land_width_mm));
    equations.record(
        Equation::RingGap,
        format!("free {:.2} mm, fitted {:.2} mm", rings.free_gap_mm, rings.fitted_gap_mm),
    );
    equations.record(Equation::RingGrooveDepth, format!("b = {:.2} mm", rings.groove_depth_mm));
}

fn record_skirt(equations: &mut EquationTracker, skirt: &SkirtResult) {
    equations.record(Equation::MaxGasLoad, format!("P = {:.2} N", skirt.max_gas_load_n));
    equations.record(Equation::SideThrust, format!("R = {:.2} N", skirt.side_thrust_n));
    equations.record(Equation::SkirtLength, format!("l = {:.2} mm", skirt.calculated_length_mm));
    match skirt.length_adjustment {
        LengthAdjustment::None => {}
        LengthAdjustment::RaisedToMinimum => equations.record(
            Equation::SkirtLengthLimits,
            format!("raised to {:.2} mm", skirt.length_mm),
        ),
        LengthAdjustment::ReducedToMaximum => equations.record(
            Equation::SkirtLengthLimits,
            format!("reduced to {:.2} mm", skirt.length_mm),
        ),
    }
    equations.record(
        Equation::RingSectionLength,
        format!("{:.2} mm ({} lands)", skirt.ring_section_length_mm, skirt.land_count),
    );
    equations.record(Equation::TotalPistonLength, format!("L = {:.2} mm", skirt.total_length_mm));
}

fn record_pin(equations: &mut EquationTracker, pin: &PinResult, constants: &DesignConstants) {
    let outside = match constants.pin_diameter_rule {
        PinDiameterRule::BearingArea => Equation::PinOutsideDiameter,
        PinDiameterRule::RootOfBearingArea => Equation::PinOutsideDiameterRoot,
    };
    equations.record(Equation::PinLengthInBush, format!("l1 = {:.2} mm", pin.length_in_bush_mm));
    equations.record(outside, format!("d0 = {:.2} mm", pin.outside_diameter_mm));
    equations.record(Equation::PinInsideDiameter, format!("di = {:.2} mm", pin.inside_diameter_mm));
    equations.record(Equation::PinBendingMoment, format!("M = {:.2} N·mm", pin.max_bending_moment_nmm));
    equations.record(Equation::HollowSectionModulus, format!("Z = {:.2} mm³", pin.section_modulus_mm3));
    equations.record(
        Equation::PinBendingStress,
        format!("σb = {:.2} MPa, {}", pin.induced_stress_mpa, pin.verdict),
    );
    equations.record(Equation::BossDiameter, format!("d_boss = {:.2} mm", pin.boss_diameter_mm));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::head::HeadCriterion;

    #[test]
    fn test_default_design() {
        let result = compute(&EngineInputs::default()).unwrap();
        assert_eq!(result.material, PistonMaterial::CastIron);
        assert_eq!(result.head.governing, HeadCriterion::Strength);
        assert!((result.head.thickness_mm - 15.707).abs() < 0.001);
        assert!((result.rings.radial_thickness_mm - 0.34157).abs() < 1e-5);
        assert!((result.barrel.max_thickness_mm - 8.24157).abs() < 1e-5);
        assert_eq!(result.skirt.length_mm, 80.0);
        assert!((result.skirt.total_length_mm - 113.653).abs() < 0.001);
        assert!((result.pin.outside_diameter_mm - 34.9066).abs() < 1e-4);
        assert!(result.pin.is_safe());
    }

    #[test]
    fn test_stages_are_chained() {
        let result = compute(&EngineInputs::default()).unwrap();
        assert!((result.rings.top_land_width_mm - 1.1 * result.head.thickness_mm).abs() < 1e-12);
        let d0 = result.skirt.max_gas_load_n / (25.0 * 45.0);
        assert!((result.pin.outside_diameter_mm - d0).abs() < 1e-9);
    }

    #[test]
    fn test_equations_recorded() {
        let result = compute(&EngineInputs::default()).unwrap();
        assert!(result.equations.contains(Equation::GrashofHeadThickness));
        assert!(result.equations.contains(Equation::RibThickness));
        assert!(result.equations.contains(Equation::SkirtLengthLimits));
        assert!(result.equations.contains(Equation::PinBendingStress));
    }

    #[test]
    fn test_default_rules_recorded() {
        let result = compute(&EngineInputs::default()).unwrap();
        assert!(result.equations.contains(Equation::RingRadialThickness));
        assert!(!result.equations.contains(Equation::RingRadialThicknessBoreScaled));
        assert!(result.equations.contains(Equation::PinOutsideDiameter));
        assert!(!result.equations.contains(Equation::PinOutsideDiameterRoot));
    }

    #[test]
    fn test_alternative_rules_recorded() {
        let constants = DesignConstants {
            radial_thickness_rule: RadialThicknessRule::BoreScaled,
            pin_diameter_rule: PinDiameterRule::RootOfBearingArea,
            ..Default::default()
        };
        let result = calculate(&EngineInputs::default(), &constants).unwrap();
        assert!(result.equations.contains(Equation::RingRadialThicknessBoreScaled));
        assert!(!result.equations.contains(Equation::RingRadialThickness));
        assert!(result.equations.contains(Equation::PinOutsideDiameterRoot));
        assert!(!result.equations.contains(Equation::PinOutsideDiameter));

        let appendix = result.equations.render_text_appendix();
        assert!(appendix.contains("t1 = D sqrt(3 p_w / sigma_t)"));
        assert!(appendix.contains("d0 = sqrt(P / (p_b1 l1))"));
        assert!(!appendix.contains("d0 = P / (p_b1 l1)"));
    }

    #[test]
    fn test_unclamped_skirt_skips_limits_equation() {
        let constants = DesignConstants {
            skirt_length_policy: crate::settings::SkirtLengthPolicy::Calculated,
            ..Default::default()
        };
        let result = calculate(&EngineInputs::default(), &constants).unwrap();
        assert!(!result.equations.contains(Equation::SkirtLengthLimits));
    }

    #[test]
    fn test_material_override() {
        let inputs = EngineInputs {
            material_overrides: MaterialOverrides {
                allowable_bending_stress_head_mpa: Some(37.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = compute(&inputs).unwrap();
        assert_eq!(result.material_properties.allowable_bending_stress_head_mpa, 37.5);
        assert!(result.head.strength_thickness_mm > 15.707);
    }

    #[test]
    fn test_invalid_ring_count() {
        let inputs = EngineInputs {
            number_of_rings: 2,
            ..Default::default()
        };
        let err = compute(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("number_of_rings"));
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let constants = DesignConstants {
            open_end_factor: 0.5,
            ..Default::default()
        };
        let err = calculate(&EngineInputs::default(), &constants).unwrap_err();
        assert_eq!(err.field(), Some("constants.open_end_factor"));
    }

    #[test]
    fn test_extreme_bore_attributed_to_input() {
        let inputs = EngineInputs {
            bore_diameter_mm: 1e160,
            ..Default::default()
        };
        let err = compute(&inputs).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("bore_diameter_mm"));
    }

    #[test]
    fn test_vanishing_pressure_attributed_to_input() {
        let inputs = EngineInputs {
            pin_bearing_pressure_mpa: 1e-300,
            ..Default::default()
        };
        let err = compute(&inputs).unwrap_err();
        assert_eq!(err.field(), Some("pin_bearing_pressure_mpa"));
    }

    #[test]
    fn test_json_roundtrip() {
        let inputs = EngineInputs::default();
        let json = inputs.to_json().unwrap();
        assert!(json.contains("\"material\": \"CastIron\""));
        assert_eq!(EngineInputs::from_json(&json).unwrap(), inputs);
    }

    #[test]
    fn test_json_unknown_material() {
        let json = EngineInputs::default()
            .to_json()
            .unwrap()
            .replace("CastIron", "Unobtainium");
        let err = EngineInputs::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("material"));
    }

    #[test]
    fn test_json_missing_field() {
        let err = EngineInputs::from_json(r#"{"bore_diameter_mm": 100.0}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
