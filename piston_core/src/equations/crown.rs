//! # Piston Crown Formulas
//!
//! Thickness of the piston head from the two classical criteria: strength
//! (Grashof's flat-plate formula) and heat dissipation through the crown.
//!
//! ## Notation
//!
//! - `D` = Cylinder bore (mm)
//! - `p` = Maximum gas pressure (N/mm²)
//! - `σt` = Allowable bending stress of the crown material (MPa)
//! - `k` = Thermal conductivity (W/m·°C)
//! - `ΔT` = Temperature difference between crown centre and edge (°C)
//! - `H` = Heat flowing through the crown (W)
//!
//! The power and heat chain is evaluated in SI units; see [`crate::units`].

use crate::units::{
    JPerKg, Kilowatts, KjPerKg, MegaPascals, Meters, Millimeters, Pascals, SqMeters, SqMillimeters,
    Watts,
};

use super::section::circle_area;

/// Crown thickness from strength (Grashof)
///
/// Circular flat plate of diameter D, fixed at its edge, uniform pressure p.
///
/// # Formula
/// t_H = √(3·p·D² / (16·σt))
///
/// # Example
/// ```rust
/// use piston_core::equations::crown::grashof_thickness;
///
/// let t = grashof_thickness(5.0, 100.0, 38.0);
/// assert!((t - 15.707).abs() < 0.001);
/// ```
#[inline]
pub fn grashof_thickness(p: f64, d: f64, sigma_t: f64) -> f64 {
    (3.0 * p * d.powi(2) / (16.0 * sigma_t)).sqrt()
}

/// Indicated power of one cylinder
///
/// # Formula
/// IP = p_m · L · A · n / 60
///
/// with `p_m` in Pa, `L` in m, `A` in m² and `n` power strokes per minute.
pub fn indicated_power(
    imep: MegaPascals,
    stroke: Millimeters,
    bore: Millimeters,
    power_strokes_per_min: f64,
) -> Watts {
    let p_m: Pascals = imep.into();
    let l: Meters = stroke.into();
    let a: SqMeters = SqMillimeters(circle_area(bore.0)).into();
    Watts(p_m.0 * l.0 * a.0 * power_strokes_per_min / 60.0)
}

/// Brake power from indicated power and mechanical efficiency
///
/// # Formula
/// BP = η_m · IP
#[inline]
pub fn brake_power(indicated: Watts, mechanical_efficiency: f64) -> Watts {
    indicated * mechanical_efficiency
}

/// Heat conducted through the crown
///
/// Fuel burned per second is `m_fuel · BP / 3600` with `m_fuel` in
/// kg per brake kW per hour. A fraction `c` of its calorific value is
/// conducted through the crown.
///
/// # Formula
/// H = c · HCV · (m_fuel · BP / 3600)
pub fn crown_heat_flow(
    fraction: f64,
    hcv: KjPerKg,
    fuel_kg_per_bp_hr: f64,
    brake: Watts,
) -> Watts {
    let hcv_j: JPerKg = hcv.into();
    let bp_kw: Kilowatts = brake.into();
    let fuel_kg_per_s = fuel_kg_per_bp_hr * bp_kw.0 / 3600.0;
    Watts(fraction * hcv_j.0 * fuel_kg_per_s)
}

/// Crown thickness from heat dissipation
///
/// # Formula
/// t_H = H / (12.56 · k · ΔT)
///
/// With H in W and k in W/m·°C the result is in meters; it is returned in mm.
/// `conduction_factor` is the 12.56 (≈ 4π) constant.
pub fn heat_dissipation_thickness(
    heat: Watts,
    conduction_factor: f64,
    k: f64,
    delta_t: f64,
) -> Millimeters {
    Meters(heat.0 / (conduction_factor * k * delta_t)).into()
}
