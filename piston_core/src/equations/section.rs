//! # Cross-Section Property Formulas
//!
//! Geometric properties of the circular sections that appear in piston
//! design: the bore (for gas load and swept area) and the hollow pin.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `Z` = Section modulus (I/c, c = distance to extreme fiber)
//! - `d0` = Outside diameter, `di` = Inside diameter

/// Area of a solid circle
///
/// # Formula
/// A = π·d²/4
///
/// # Example
/// ```rust
/// use piston_core::equations::section::circle_area;
///
/// let a = circle_area(100.0);
/// assert!((a - 7853.98).abs() < 0.01);
/// ```
#[inline]
pub fn circle_area(d: f64) -> f64 {
    std::f64::consts::PI * d.powi(2) / 4.0
}

/// Section modulus of a hollow circular section
///
/// ```text
///      ╭───────╮
///     ╱ ╭─────╮ ╲
///    │  │ di  │  │  d0
///     ╲ ╰─────╯ ╱
///      ╰───────╯
/// ```
///
/// # Formula
/// Z = π·(d0⁴ − di⁴) / (32·d0)
///
/// Callers must ensure `d0 > 0`.
///
/// # Example
/// ```rust
/// use piston_core::equations::section::hollow_circle_section_modulus;
///
/// // Solid section reduces to π·d³/32
/// let z = hollow_circle_section_modulus(20.0, 0.0);
/// assert!((z - std::f64::consts::PI * 8000.0 / 32.0).abs() < 1e-9);
/// ```
#[inline]
pub fn hollow_circle_section_modulus(d0: f64, di: f64) -> f64 {
    std::f64::consts::PI * (d0.powi(4) - di.powi(4)) / (32.0 * d0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        assert!((circle_area(2.0) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_hollow_section_modulus() {
        // d0 = 34.907, di = 0.6·d0 → Z = π·d0³·(1 − 0.6⁴)/32
        let d0 = 34.906_585;
        let z = hollow_circle_section_modulus(d0, 0.6 * d0);
        assert!((z - 3634.47).abs() < 0.01);
    }

    #[test]
    fn test_hollow_is_weaker_than_solid() {
        let solid = hollow_circle_section_modulus(30.0, 0.0);
        let hollow = hollow_circle_section_modulus(30.0, 18.0);
        assert!(hollow < solid);
    }
}
