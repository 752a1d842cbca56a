//! # Gas Load and Bending Formulas
//!
//! Forces derived from the peak cylinder pressure, and the bending of the
//! piston pin they cause.

use super::section::circle_area;

/// Maximum gas load on the piston crown (N)
///
/// # Formula
/// P = π·D²·p / 4
#[inline]
pub fn max_gas_load(d: f64, p: f64) -> f64 {
    circle_area(d) * p
}

/// Side thrust on the cylinder wall (N)
///
/// # Formula
/// R = μ·P, with μ = 0.1 by convention
#[inline]
pub fn side_thrust(gas_load: f64, ratio: f64) -> f64 {
    ratio * gas_load
}

/// Maximum bending moment in the piston pin (N·mm)
///
/// The pin is treated as a beam simply supported at the bosses, carrying
/// the gas load spread over the connecting-rod bush.
///
/// ```text
///           P (spread over l1)
///         ↓↓↓↓↓↓↓↓↓
///    ─────┬───────┬─────
///    △    └─ l1 ──┘    △
///   boss ←─── D ────→ boss
/// ```
///
/// # Formula
/// M = P·D / 8
#[inline]
pub fn pin_max_moment(gas_load: f64, d: f64) -> f64 {
    gas_load * d / 8.0
}

/// Bending stress σb = M/Z (MPa when M is N·mm and Z is mm³)
#[inline]
pub fn bending_stress(moment: f64, section_modulus: f64) -> f64 {
    moment / section_modulus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_load() {
        // π·100²·5/4
        assert!((max_gas_load(100.0, 5.0) - 39_269.908).abs() < 1e-3);
    }

    #[test]
    fn test_side_thrust() {
        assert!((side_thrust(39_269.908, 0.1) - 3_926.991).abs() < 1e-3);
    }

    #[test]
    fn test_pin_moment() {
        assert!((pin_max_moment(39_269.908, 100.0) - 490_873.85).abs() < 0.01);
    }

    #[test]
    fn test_bending_stress() {
        assert_eq!(bending_stress(1000.0, 10.0), 100.0);
    }
}
