//! # Piston Design Equations
//!
//! The closed-form formulas behind the piston design pipeline, kept in one
//! place so they can be checked against the textbook and documented from
//! the registry.
//!
//! ## Modules
//!
//! - [`crown`] - Head thickness from strength and from heat dissipation
//! - [`loads`] - Gas load, side thrust, pin bending
//! - [`section`] - Circular and hollow circular section properties
//! - [`registry`] - Equation metadata and usage tracking for reports
//!
//! ## Units
//!
//! Lengths in mm, forces in N, pressures and stresses in N/mm² (MPa),
//! moments in N·mm. The crown heat chain works in SI internally.

pub mod crown;
pub mod loads;
pub mod registry;
pub mod section;

pub use crown::{
    brake_power,
    crown_heat_flow,
    grashof_thickness,
    heat_dissipation_thickness,
    indicated_power,
};

pub use loads::{
    bending_stress,
    max_gas_load,
    pin_max_moment,
    side_thrust,
};

pub use section::{
    circle_area,
    hollow_circle_section_modulus,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
