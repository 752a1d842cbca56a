//! # Text Report
//!
//! Plain-text rendering of a piston design, suitable for saving to a file.
//! Sections follow the pipeline order and every dimension and stress is
//! printed to two decimal places.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::calculations::piston::{compute, EngineInputs};
//! use piston_core::report::{render_text_report, ReportOptions};
//!
//! let inputs = EngineInputs::default();
//! let result = compute(&inputs).unwrap();
//! let text = render_text_report(&inputs, &result, &ReportOptions::default());
//! assert!(text.contains("Pin check: SAFE"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::piston::{DesignResult, EngineInputs};
use crate::calculations::skirt::LengthAdjustment;

/// Optional header and appendix settings for a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Report title, defaults to "PISTON DESIGN REPORT"
    pub title: Option<String>,
    pub engineer: Option<String>,
    pub job_id: Option<String>,
    /// Date printed in the header
    pub generated: Option<DateTime<Utc>>,
    /// Append the list of equations used
    pub include_equations: bool,
}

const RULE_WIDTH: usize = 60;

fn section(out: &mut String, heading: &str) {
    out.push('\n');
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"-".repeat(heading.chars().count()));
    out.push('\n');
}

fn line(out: &mut String, label: &str, value: f64, unit: &str) {
    out.push_str(&format!("  {:<34} {:>12.2} {}\n", label, value, unit));
}

/// Render a design as plain text.
pub fn render_text_report(inputs: &EngineInputs, result: &DesignResult, options: &ReportOptions) -> String {
    let mut out = String::new();
    let title = options.title.as_deref().unwrap_or("PISTON DESIGN REPORT");
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    if let Some(engineer) = &options.engineer {
        out.push_str(&format!("Engineer: {}\n", engineer));
    }
    if let Some(job_id) = &options.job_id {
        out.push_str(&format!("Job: {}\n", job_id));
    }
    if let Some(date) = options.generated {
        out.push_str(&format!("Date: {}\n", date.format("%Y-%m-%d")));
    }

    section(&mut out, "INPUTS");
    line(&mut out, "Bore diameter D", inputs.bore_diameter_mm, "mm");
    line(&mut out, "Stroke length L", inputs.stroke_length_mm, "mm");
    line(&mut out, "Max gas pressure p", inputs.max_gas_pressure_mpa, "N/mm²");
    line(&mut out, "Engine speed N", inputs.engine_speed_rpm, "rpm");
    line(&mut out, "IMEP", inputs.imep_mpa, "N/mm²");
    line(&mut out, "Mechanical efficiency", inputs.mechanical_efficiency, "");
    line(&mut out, "Fuel consumption", inputs.fuel_consumption_kg_per_bp_hr, "kg/BP/hr");
    line(&mut out, "Higher calorific value", inputs.higher_calorific_value_kj_per_kg, "kJ/kg");
    out.push_str(&format!("  {:<34} {:>12}\n", "Material", result.material.display_name()));
    let props = &result.material_properties;
    line(&mut out, "Allowable stress σt", props.allowable_bending_stress_head_mpa, "MPa");
    line(&mut out, "Thermal conductivity k", props.thermal_conductivity_w_mc, "W/m·°C");
    line(&mut out, "Temperature difference ΔT", props.head_to_wall_temp_diff_c, "°C");
    out.push_str(&format!("  {:<34} {:>12}\n", "Number of rings", inputs.number_of_rings));

    let head = &result.head;
    section(&mut out, "PISTON HEAD");
    line(&mut out, "Thickness (strength)", head.strength_thickness_mm, "mm");
    line(&mut out, "Indicated power", head.indicated_power_kw, "kW");
    line(&mut out, "Brake power", head.brake_power_kw, "kW");
    line(&mut out, "Heat through crown", head.heat_flow_w, "W");
    line(&mut out, "Thickness (heat dissipation)", head.heat_thickness_mm, "mm");
    line(&mut out, "Adopted thickness t_H", head.thickness_mm, "mm");
    out.push_str(&format!("  Governing criterion: {}\n", head.governing));
    match head.rib_thickness {
        Some(ribs) => out.push_str(&format!("  Ribs: REQUIRED, thickness {}\n", ribs)),
        None => out.push_str("  Ribs: not required\n"),
    }

    let rings = &result.rings;
    section(&mut out, "PISTON RINGS");
    line(&mut out, "Radial thickness t1", rings.radial_thickness_mm, "mm");
    line(&mut out, "Axial candidate f·t1", rings.axial_from_radial_mm, "mm");
    line(&mut out, "Axial candidate D/(10·n_R)", rings.axial_empirical_mm, "mm");
    line(&mut out, "Axial thickness t2", rings.axial_thickness_mm, "mm");
    line(&mut out, "Top land width b1", rings.top_land_width_mm, "mm");
    line(&mut out, "Land width b2", rings.land_width_mm, "mm");
    line(&mut out, "Gap, free", rings.free_gap_mm, "mm");
    line(&mut out, "Gap, fitted", rings.fitted_gap_mm, "mm");
    out.push_str(&format!("  Fitted gap range: {}\n", rings.fitted_gap_range));
    line(&mut out, "Groove depth", rings.groove_depth_mm, "mm");

    section(&mut out, "PISTON BARREL");
    line(&mut out, "Thickness at top t3", result.barrel.max_thickness_mm, "mm");
    line(&mut out, "Thickness at open end t4", result.barrel.open_end_thickness_mm, "mm");

    let skirt = &result.skirt;
    section(&mut out, "PISTON SKIRT");
    line(&mut out, "Max gas load P", skirt.max_gas_load_n, "N");
    line(&mut out, "Side thrust R", skirt.side_thrust_n, "N");
    line(&mut out, "Calculated skirt length", skirt.calculated_length_mm, "mm");
    out.push_str(&format!("  Practical range: {}\n", skirt.practical_range));
    line(&mut out, "Adopted skirt length", skirt.length_mm, "mm");
    match skirt.length_adjustment {
        LengthAdjustment::None => out.push_str("  Calculated length adopted\n"),
        LengthAdjustment::RaisedToMinimum => {
            out.push_str(&format!("  Raised to practical minimum ({})\n", skirt.practical_range))
        }
        LengthAdjustment::ReducedToMaximum => {
            out.push_str(&format!("  Reduced to practical maximum ({})\n", skirt.practical_range))
        }
    }
    out.push_str(&format!("  {:<34} {:>12}\n", "Lands in ring section", skirt.land_count));
    line(&mut out, "Ring section length", skirt.ring_section_length_mm, "mm");
    line(&mut out, "Total piston length", skirt.total_length_mm, "mm");
    line(&mut out, "L/D", skirt.total_length_mm / result.bore_diameter_mm, "");

    let pin = &result.pin;
    section(&mut out, "PISTON PIN");
    line(&mut out, "Length in bush l1", pin.length_in_bush_mm, "mm");
    line(&mut out, "Outside diameter d0", pin.outside_diameter_mm, "mm");
    line(&mut out, "Inside diameter di", pin.inside_diameter_mm, "mm");
    line(&mut out, "Support span l2", pin.support_span_mm, "mm");
    line(&mut out, "Bending moment M", pin.max_bending_moment_nmm, "N·mm");
    line(&mut out, "Section modulus Z", pin.section_modulus_mm3, "mm³");
    line(&mut out, "Bending stress σb", pin.induced_stress_mpa, "MPa");
    line(&mut out, "Allowable stress", pin.allowable_stress_mpa, "MPa");
    line(&mut out, "Utilisation σb/allowable", pin.utilisation, "");
    line(&mut out, "Boss diameter", pin.boss_diameter_mm, "mm");
    out.push_str(&format!("  Pin check: {}\n", pin.verdict));

    if options.include_equations {
        out.push('\n');
        out.push_str(&result.equations.render_text_appendix());
    }

    out
}
