//! # Piston Design Calculations
//!
//! One module per design stage, chained by [`piston::calculate`] in
//! dependency order: head → rings → barrel → skirt → pin. Each stage follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Stage results (JSON-serializable)
//! - `calculate(input, constants) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`head`] - Crown thickness (strength and heat dissipation), ribs
//! - [`rings`] - Ring cross-section, lands, gaps and groove depth
//! - [`barrel`] - Barrel wall thickness
//! - [`skirt`] - Skirt length and overall piston length
//! - [`pin`] - Gudgeon pin sizing and bending check
//! - [`piston`] - The full pipeline from [`EngineInputs`]
//! - [`summary`] - Flat projection of a [`DesignResult`]

pub mod barrel;
pub mod head;
pub mod pin;
pub mod piston;
pub mod rings;
pub mod skirt;
pub mod summary;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use barrel::{BarrelInput, BarrelResult};
pub use head::{HeadCriterion, HeadInput, HeadResult};
pub use pin::{PinInput, PinResult, PinVerdict};
pub use piston::{calculate, compute, DesignResult, EngineInputs};
pub use rings::{RingInput, RingResult};
pub use skirt::{LengthAdjustment, SkirtInput, SkirtResult};
pub use summary::DesignSummary;

/// Inclusive dimension range in mm, used for recommended and practical ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl DimensionRange {
    pub fn new(min_mm: f64, max_mm: f64) -> Self {
        Self { min_mm, max_mm }
    }

    pub fn contains(&self, value_mm: f64) -> bool {
        value_mm >= self.min_mm && value_mm <= self.max_mm
    }
}

impl std::fmt::Display for DimensionRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} to {:.2} mm", self.min_mm, self.max_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains_bounds() {
        let range = DimensionRange::new(65.0, 80.0);
        assert!(range.contains(65.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(80.01));
        assert_eq!(range.to_string(), "65.00 to 80.00 mm");
    }
}
