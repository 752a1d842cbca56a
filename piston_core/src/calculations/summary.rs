//! # Design Summary
//!
//! A flat projection of a [`DesignResult`] with one field per reported
//! quantity, plus the L/D ratio. Nothing here is recomputed.

use serde::{Deserialize, Serialize};

use super::piston::DesignResult;
use super::head::HeadCriterion;
use super::pin::PinVerdict;
use super::skirt::LengthAdjustment;
use super::DimensionRange;

/// Flat summary of a piston design. Lengths in mm, stresses in MPa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub material: String,

    // === Head ===
    pub head_thickness_strength_mm: f64,
    pub indicated_power_kw: f64,
    pub brake_power_kw: f64,
    pub heat_flow_w: f64,
    pub head_thickness_heat_mm: f64,
    pub head_thickness_mm: f64,
    pub head_governing: HeadCriterion,
    pub ribs_required: bool,
    pub rib_thickness: Option<DimensionRange>,

    // === Rings ===
    pub ring_radial_thickness_mm: f64,
    pub ring_axial_thickness_mm: f64,
    /// Axial candidate f·t1
    pub ring_axial_from_radial_mm: f64,
    /// Axial candidate D/(10·n_R)
    pub ring_axial_empirical_mm: f64,
    pub top_land_width_mm: f64,
    pub land_width_mm: f64,
    pub ring_free_gap_mm: f64,
    pub ring_fitted_gap_mm: f64,
    pub ring_fitted_gap_range: DimensionRange,
    pub ring_groove_depth_mm: f64,

    // === Barrel ===
    pub barrel_max_thickness_mm: f64,
    pub barrel_open_end_thickness_mm: f64,

    // === Skirt ===
    pub max_gas_load_n: f64,
    pub side_thrust_n: f64,
    pub skirt_calculated_length_mm: f64,
    pub skirt_practical_range: DimensionRange,
    pub skirt_length_mm: f64,
    pub skirt_length_adjustment: LengthAdjustment,
    pub land_count: u32,
    pub ring_section_length_mm: f64,
    pub total_length_mm: f64,
    pub length_to_bore_ratio: f64,

    // === Pin ===
    pub pin_length_in_bush_mm: f64,
    pub pin_outside_diameter_mm: f64,
    pub pin_inside_diameter_mm: f64,
    /// l2 = D − l1
    pub pin_support_span_mm: f64,
    /// M (N·mm)
    pub pin_bending_moment_nmm: f64,
    /// Z (mm³)
    pub pin_section_modulus_mm3: f64,
    pub pin_bending_stress_mpa: f64,
    pub pin_allowable_stress_mpa: f64,
    pub pin_utilisation: f64,
    pub pin_verdict: PinVerdict,
    pub boss_diameter_mm: f64,
}

impl From<&DesignResult> for DesignSummary {
    fn from(result: &DesignResult) -> Self {
        let DesignResult {
            head,
            rings,
            barrel,
            skirt,
            pin,
            ..
        } = result;

        Self {
            material: result.material.display_name().to_string(),
            head_thickness_strength_mm: head.strength_thickness_mm,
            indicated_power_kw: head.indicated_power_kw,
            brake_power_kw: head.brake_power_kw,
            heat_flow_w: head.heat_flow_w,
            head_thickness_heat_mm: head.heat_thickness_mm,
            head_thickness_mm: head.thickness_mm,
            head_governing: head.governing,
            ribs_required: head.ribs_required(),
            rib_thickness: head.rib_thickness,
            ring_radial_thickness_mm: rings.radial_thickness_mm,
            ring_axial_thickness_mm: rings.axial_thickness_mm,
            ring_axial_from_radial_mm: rings.axial_from_radial_mm,
            ring_axial_empirical_mm: rings.axial_empirical_mm,
            top_land_width_mm: rings.top_land_width_mm,
            land_width_mm: rings.land_width_mm,
            ring_free_gap_mm: rings.free_gap_mm,
            ring_fitted_gap_mm: rings.fitted_gap_mm,
            ring_fitted_gap_range: rings.fitted_gap_range,
            ring_groove_depth_mm: rings.groove_depth_mm,
            barrel_max_thickness_mm: barrel.max_thickness_mm,
            barrel_open_end_thickness_mm: barrel.open_end_thickness_mm,
            max_gas_load_n: skirt.max_gas_load_n,
            side_thrust_n: skirt.side_thrust_n,
            skirt_calculated_length_mm: skirt.calculated_length_mm,
            skirt_practical_range: skirt.practical_range,
            skirt_length_mm: skirt.length_mm,
            skirt_length_adjustment: skirt.length_adjustment,
            land_count: skirt.land_count,
            ring_section_length_mm: skirt.ring_section_length_mm,
            total_length_mm: skirt.total_length_mm,
            length_to_bore_ratio: skirt.total_length_mm / result.bore_diameter_mm,
            pin_length_in_bush_mm: pin.length_in_bush_mm,
            pin_outside_diameter_mm: pin.outside_diameter_mm,
            pin_inside_diameter_mm: pin.inside_diameter_mm,
            pin_support_span_mm: pin.support_span_mm,
            pin_bending_moment_nmm: pin.max_bending_moment_nmm,
            pin_section_modulus_mm3: pin.section_modulus_mm3,
            pin_bending_stress_mpa: pin.induced_stress_mpa,
            pin_allowable_stress_mpa: pin.allowable_stress_mpa,
            pin_utilisation: pin.utilisation,
            pin_verdict: pin.verdict,
            boss_diameter_mm: pin.boss_diameter_mm,
        }
    }
}

impl DesignSummary {
    /// Labelled numeric values in report order, for tabular export.
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Head thickness, strength (mm)", self.head_thickness_strength_mm),
            ("Indicated power (kW)", self.indicated_power_kw),
            ("Brake power (kW)", self.brake_power_kw),
            ("Heat through crown (W)", self.heat_flow_w),
            ("Head thickness, heat (mm)", self.head_thickness_heat_mm),
            ("Head thickness (mm)", self.head_thickness_mm),
            ("Ring radial thickness t1 (mm)", self.ring_radial_thickness_mm),
            ("Ring axial thickness t2 (mm)", self.ring_axial_thickness_mm),
            ("Axial candidate f·t1 (mm)", self.ring_axial_from_radial_mm),
            ("Axial candidate D/(10·n_R) (mm)", self.ring_axial_empirical_mm),
            ("Top land width b1 (mm)", self.top_land_width_mm),
            ("Land width b2 (mm)", self.land_width_mm),
            ("Ring free gap (mm)", self.ring_free_gap_mm),
            ("Ring fitted gap (mm)", self.ring_fitted_gap_mm),
            ("Ring fitted gap, min (mm)", self.ring_fitted_gap_range.min_mm),
            ("Ring fitted gap, max (mm)", self.ring_fitted_gap_range.max_mm),
            ("Ring groove depth (mm)", self.ring_groove_depth_mm),
            ("Barrel thickness t3 (mm)", self.barrel_max_thickness_mm),
            ("Barrel open end t4 (mm)", self.barrel_open_end_thickness_mm),
            ("Max gas load P (N)", self.max_gas_load_n),
            ("Side thrust R (N)", self.side_thrust_n),
            ("Calculated skirt length (mm)", self.skirt_calculated_length_mm),
            ("Skirt length, practical min (mm)", self.skirt_practical_range.min_mm),
            ("Skirt length, practical max (mm)", self.skirt_practical_range.max_mm),
            ("Skirt length (mm)", self.skirt_length_mm),
            ("Ring section length (mm)", self.ring_section_length_mm),
            ("Total piston length (mm)", self.total_length_mm),
            ("L/D", self.length_to_bore_ratio),
            ("Pin length in bush l1 (mm)", self.pin_length_in_bush_mm),
            ("Pin outside diameter d0 (mm)", self.pin_outside_diameter_mm),
            ("Pin inside diameter di (mm)", self.pin_inside_diameter_mm),
            ("Pin support span l2 (mm)", self.pin_support_span_mm),
            ("Pin bending moment M (N·mm)", self.pin_bending_moment_nmm),
            ("Pin section modulus Z (mm³)", self.pin_section_modulus_mm3),
            ("Pin bending stress (MPa)", self.pin_bending_stress_mpa),
            ("Pin allowable stress (MPa)", self.pin_allowable_stress_mpa),
            ("Pin utilisation", self.pin_utilisation),
            ("Boss diameter (mm)", self.boss_diameter_mm),
        ]
    }
}
