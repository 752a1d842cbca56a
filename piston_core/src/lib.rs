//! # piston_core - Piston Design Calculation Engine
//!
//! `piston_core` computes the principal dimensions of an internal-combustion
//! engine piston (head, rings, barrel, skirt and gudgeon pin) from a handful
//! of engine operating parameters and the piston material. All inputs and
//! outputs are JSON-serializable so the engine can sit behind any front end.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types naming the offending field
//! - **Configurable**: Textbook constants live in [`settings::DesignConstants`]
//!
//! ## Quick Start
//!
//! ```rust
//! use piston_core::{compute, EngineInputs};
//!
//! let result = compute(&EngineInputs::default()).unwrap();
//! let summary = result.summary();
//! println!("Head thickness: {:.2} mm", summary.head_thickness_mm);
//! println!("Pin: {}", summary.pin_verdict);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Design stages and the full pipeline
//! - [`equations`] - Formula building blocks and the equation registry
//! - [`materials`] - Material table and per-field overrides
//! - [`settings`] - Design constants (TOML-loadable)
//! - [`report`] - Plain-text export
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute, DesignResult, DesignSummary, EngineInputs};
pub use errors::{CalcError, CalcResult};
pub use materials::{MaterialOverrides, PistonMaterial};
pub use settings::DesignConstants;
