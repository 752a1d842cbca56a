//! # Piston Designer CLI
//!
//! Terminal front end for `piston_core`. Prompts for each engine parameter
//! with the worked-example value as default (press Enter to accept), or
//! reads a JSON input file, then prints the design summary.
//!
//! ```text
//! piston                                  # interactive
//! piston --defaults --json                # worked example, JSON output
//! piston --input engine.json --constants textbook.toml --export piston.txt
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Parser;

use piston_core::report::{render_text_report, ReportOptions};
use piston_core::{calculate, CalcError, CalcResult, DesignConstants, DesignResult, EngineInputs, PistonMaterial};

#[derive(Debug, Parser)]
#[command(name = "piston", version, about = "IC engine piston design calculator")]
struct Cli {
    /// Read engine inputs from a JSON file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Use the worked-example inputs without prompting
    #[arg(long, conflicts_with = "input")]
    defaults: bool,

    /// Design constants TOML file (missing keys keep their defaults)
    #[arg(short, long, value_name = "FILE")]
    constants: Option<PathBuf>,

    /// Piston material, e.g. "cast iron" or "aluminium alloy"
    #[arg(short, long)]
    material: Option<String>,

    /// Write a plain-text report to FILE
    #[arg(short, long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Engineer name for the report header
    #[arg(long)]
    engineer: Option<String>,

    /// Job number for the report header
    #[arg(long)]
    job_id: Option<String>,

    /// Append the list of equations to the report
    #[arg(long)]
    equations: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_f64(prompt, f64::from(default))
        .round()
        .clamp(0.0, f64::from(u32::MAX)) as u32
}

fn prompt_material(default: PistonMaterial) -> CalcResult<PistonMaterial> {
    let choices: Vec<&str> = PistonMaterial::ALL.iter().map(|m| m.display_name()).collect();
    print!("Material ({}) [{}]: ", choices.join(", "), default.display_name());
    if io::stdout().flush().is_err() {
        return Ok(default);
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return Ok(default);
    }

    match input.trim() {
        "" => Ok(default),
        key => key.parse(),
    }
}

fn prompt_inputs(material: Option<PistonMaterial>) -> CalcResult<EngineInputs> {
    let d = EngineInputs::default();

    println!("Engine");
    let bore_diameter_mm = prompt_f64("  Bore diameter D (mm)", d.bore_diameter_mm);
    let stroke_length_mm = prompt_f64("  Stroke length L (mm)", d.stroke_length_mm);
    let max_gas_pressure_mpa = prompt_f64("  Max gas pressure p (N/mm²)", d.max_gas_pressure_mpa);
    let engine_speed_rpm = prompt_f64("  Engine speed N (rpm)", d.engine_speed_rpm);
    let imep_mpa = prompt_f64("  IMEP (N/mm²)", d.imep_mpa);
    let mechanical_efficiency = prompt_f64("  Mechanical efficiency", d.mechanical_efficiency);
    let fuel_consumption_kg_per_bp_hr = prompt_f64("  Fuel consumption (kg/BP/hr)", d.fuel_consumption_kg_per_bp_hr);
    let higher_calorific_value_kj_per_kg = prompt_f64("  Higher calorific value (kJ/kg)", d.higher_calorific_value_kj_per_kg);

    println!("Material");
    let material = match material {
        Some(m) => m,
        None => prompt_material(d.material)?,
    };
    let props = material.properties();
    let sigma = prompt_f64("  Allowable head stress σt (MPa)", props.allowable_bending_stress_head_mpa);
    let k = prompt_f64("  Thermal conductivity k (W/m·°C)", props.thermal_conductivity_w_mc);
    let delta_t = prompt_f64("  Centre-to-edge temperature difference ΔT (°C)", props.head_to_wall_temp_diff_c);

    // Only values the user changed become overrides
    let mut material_overrides = piston_core::MaterialOverrides::default();
    if sigma != props.allowable_bending_stress_head_mpa {
        material_overrides.allowable_bending_stress_head_mpa = Some(sigma);
    }
    if k != props.thermal_conductivity_w_mc {
        material_overrides.thermal_conductivity_w_mc = Some(k);
    }
    if delta_t != props.head_to_wall_temp_diff_c {
        material_overrides.head_to_wall_temp_diff_c = Some(delta_t);
    }

    println!("Rings, skirt and pin");
    let number_of_rings = prompt_u32("  Number of rings (3-7)", d.number_of_rings);
    let ring_wall_pressure_mpa = prompt_f64("  Ring wall pressure p_w (N/mm²)", d.ring_wall_pressure_mpa);
    let ring_allowable_bending_stress_mpa = prompt_f64("  Ring allowable stress (MPa)", d.ring_allowable_bending_stress_mpa);
    let skirt_bearing_pressure_mpa = prompt_f64("  Skirt bearing pressure (N/mm²)", d.skirt_bearing_pressure_mpa);
    let pin_bearing_pressure_mpa = prompt_f64("  Pin bearing pressure (N/mm²)", d.pin_bearing_pressure_mpa);
    let pin_allowable_bending_stress_mpa = prompt_f64("  Pin allowable stress (MPa)", d.pin_allowable_bending_stress_mpa);

    Ok(EngineInputs {
        bore_diameter_mm,
        stroke_length_mm,
        max_gas_pressure_mpa,
        engine_speed_rpm,
        imep_mpa,
        mechanical_efficiency,
        fuel_consumption_kg_per_bp_hr,
        higher_calorific_value_kj_per_kg,
        material,
        material_overrides,
        number_of_rings,
        ring_wall_pressure_mpa,
        ring_allowable_bending_stress_mpa,
        skirt_bearing_pressure_mpa,
        pin_bearing_pressure_mpa,
        pin_allowable_bending_stress_mpa,
    })
}

fn read_file(path: &Path) -> CalcResult<String> {
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

fn load_inputs(cli: &Cli) -> CalcResult<EngineInputs> {
    let material = cli.material.as_deref().map(str::parse::<PistonMaterial>).transpose()?;

    if let Some(path) = &cli.input {
        let mut inputs = EngineInputs::from_json(&read_file(path)?)?;
        if let Some(m) = material {
            inputs.material = m;
        }
        println!("Loaded inputs from {}", path.display());
        return Ok(inputs);
    }

    if cli.defaults {
        let mut inputs = EngineInputs::default();
        if let Some(m) = material {
            inputs.material = m;
        }
        return Ok(inputs);
    }

    prompt_inputs(material)
}

fn load_constants(cli: &Cli) -> CalcResult<DesignConstants> {
    match &cli.constants {
        Some(path) => {
            let constants = DesignConstants::from_toml_str(&read_file(path)?)?;
            println!("Loaded design constants from {}", path.display());
            Ok(constants)
        }
        None => Ok(DesignConstants::default()),
    }
}

fn print_summary(result: &DesignResult) {
    let s = result.summary();

    println!("═══════════════════════════════════════");
    println!("  PISTON DESIGN RESULTS ({})", s.material);
    println!("═══════════════════════════════════════");
    println!();
    println!("Head:");
    println!("  t_H (strength)  = {:.2} mm", s.head_thickness_strength_mm);
    println!("  t_H (heat)      = {:.2} mm", s.head_thickness_heat_mm);
    println!(
        "  t_H adopted     = {:.2} mm (governs: {})",
        s.head_thickness_mm, s.head_governing
    );
    match s.rib_thickness {
        Some(ribs) => println!("  Ribs required, thickness {}", ribs),
        None => println!("  Ribs not required"),
    }
    println!();
    println!("Rings:");
    println!("  t1 = {:.2} mm, t2 = {:.2} mm", s.ring_radial_thickness_mm, s.ring_axial_thickness_mm);
    println!(
        "  t2 candidates: f·t1 = {:.2} mm, D/(10·n_R) = {:.2} mm",
        s.ring_axial_from_radial_mm, s.ring_axial_empirical_mm
    );
    println!("  b1 = {:.2} mm, b2 = {:.2} mm", s.top_land_width_mm, s.land_width_mm);
    println!(
        "  Gap free {:.2} mm, fitted {:.2} mm (range {})",
        s.ring_free_gap_mm, s.ring_fitted_gap_mm, s.ring_fitted_gap_range
    );
    println!("  Groove depth {:.2} mm", s.ring_groove_depth_mm);
    println!();
    println!("Barrel:");
    println!("  t3 = {:.2} mm, t4 = {:.2} mm", s.barrel_max_thickness_mm, s.barrel_open_end_thickness_mm);
    println!();
    println!("Skirt:");
    println!("  P = {:.2} N, R = {:.2} N", s.max_gas_load_n, s.side_thrust_n);
    println!(
        "  Skirt length {:.2} mm (calculated {:.2} mm, practical {})",
        s.skirt_length_mm, s.skirt_calculated_length_mm, s.skirt_practical_range
    );
    println!("  Total length {:.2} mm (L/D = {:.2})", s.total_length_mm, s.length_to_bore_ratio);
    println!();
    println!("Pin:");
    println!(
        "  d0 = {:.2} mm, di = {:.2} mm, l1 = {:.2} mm",
        s.pin_outside_diameter_mm, s.pin_inside_diameter_mm, s.pin_length_in_bush_mm
    );
    println!(
        "  l2 = {:.2} mm, M = {:.2} N·mm, Z = {:.2} mm³",
        s.pin_support_span_mm, s.pin_bending_moment_nmm, s.pin_section_modulus_mm3
    );
    println!(
        "  σb = {:.2} MPa (allowable {:.2} MPa, utilisation {:.2}) {}",
        s.pin_bending_stress_mpa,
        s.pin_allowable_stress_mpa,
        s.pin_utilisation,
        status_icon(result.pin.is_safe())
    );
    println!();
    println!("═══════════════════════════════════════");
    println!("  PIN: {}", s.pin_verdict);
    println!("═══════════════════════════════════════");
}

fn run(cli: &Cli) -> CalcResult<()> {
    let inputs = load_inputs(cli)?;
    let constants = load_constants(cli)?;

    println!();
    println!("Calculating {} piston, bore {:.1} mm...", inputs.material.display_name(), inputs.bore_diameter_mm);
    println!();
    let result = calculate(&inputs, &constants)?;
    print_summary(&result);

    if cli.json {
        println!();
        println!("JSON Output:");
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    if let Some(path) = &cli.export {
        let options = ReportOptions {
            title: cli.title.clone(),
            engineer: cli.engineer.clone(),
            job_id: cli.job_id.clone(),
            generated: Some(Utc::now()),
            include_equations: cli.equations,
        };
        let text = render_text_report(&inputs, &result, &options);
        fs::write(path, &text)
            .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;
        println!();
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn main() {
    let cli = Cli::parse();

    println!("Piston Designer - IC Engine Piston Calculator");
    println!("=============================================");
    println!();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        std::process::exit(1);
    }
}
