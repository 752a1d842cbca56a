//! # Equation Registry
//!
//! Central registry of every formula used in the piston design pipeline.
//! Each equation carries metadata (formula, variables, reference, source
//! location) so reports and the generated `EQUATIONS.md` can show exactly
//! which mathematics produced a result.
//!
//! ## Usage
//!
//! ```rust
//! use piston_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::GrashofHeadThickness, "Piston head");
//!
//! let meta = Equation::GrashofHeadThickness.metadata();
//! assert!(meta.formula_plain.contains("16"));
//! assert_eq!(tracker.unique_equations().len(), 1);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of an equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Grashof's formula for a clamped circular plate
    Grashof,
    /// Steady one-dimensional conduction through the crown
    HeatConduction,
    /// Empirical proportions from IC-engine machine-design practice
    EmpiricalPractice,
    /// Fundamental mechanics (statics, beam bending)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> &'static str {
        match self {
            CodeReference::Grashof => "Grashof's formula, circular plate fixed at the edge",
            CodeReference::HeatConduction => "Radial heat conduction through the piston crown",
            CodeReference::EmpiricalPractice => "Empirical IC engine piston proportions",
            CodeReference::Mechanics => "Fundamental Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Pipeline stage an equation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    Head,
    Rings,
    Barrel,
    Skirt,
    Pin,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Head => "Piston Head",
            EquationCategory::Rings => "Piston Rings",
            EquationCategory::Barrel => "Piston Barrel",
            EquationCategory::Skirt => "Piston Skirt",
            EquationCategory::Pin => "Piston Pin",
        }
    }

    /// Pipeline order (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Head => 1,
            EquationCategory::Rings => 2,
            EquationCategory::Barrel => 3,
            EquationCategory::Skirt => 4,
            EquationCategory::Pin => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    pub symbol: &'static str,
    pub description: &'static str,
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation used by the piston design pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // Head
    GrashofHeadThickness,
    IndicatedPower,
    BrakePower,
    CrownHeatFlow,
    HeatDissipationThickness,
    AdoptedHeadThickness,
    RibThickness,
    // Rings
    RingRadialThickness,
    RingRadialThicknessBoreScaled,
    RingAxialThickness,
    TopLandWidth,
    RingLandWidth,
    RingGap,
    RingGrooveDepth,
    // Barrel
    BarrelMaxThickness,
    BarrelOpenEndThickness,
    // Skirt
    MaxGasLoad,
    SideThrust,
    SkirtLength,
    SkirtLengthLimits,
    RingSectionLength,
    TotalPistonLength,
    // Pin
    PinLengthInBush,
    PinOutsideDiameter,
    PinOutsideDiameterRoot,
    PinInsideDiameter,
    PinBendingMoment,
    HollowSectionModulus,
    PinBendingStress,
    BossDiameter,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::GrashofHeadThickness => EquationMetadata {
                name: "Head Thickness (Strength)",
                description: "Crown thickness treating the head as a flat circular plate fixed at its edge",
                formula_plain: "t_H = sqrt(3 p D^2 / (16 sigma_t))",
                reference: CodeReference::Grashof,
                variables: vec![
                    Variable::new("p", "Maximum gas pressure", "N/mm^2"),
                    Variable::new("D", "Cylinder bore", "mm"),
                    Variable::new("sigma_t", "Allowable bending stress of crown", "MPa"),
                ],
                assumptions: vec!["Uniform pressure over the crown", "Edge fully restrained by the barrel"],
                category: EquationCategory::Head,
                source_module: "equations/crown.rs",
                source_function: "grashof_thickness",
            },

            Equation::IndicatedPower => EquationMetadata {
                name: "Indicated Power",
                description: "Indicated power of one cylinder from mean effective pressure",
                formula_plain: "IP = p_m L A n / 60",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("p_m", "Indicated mean effective pressure", "Pa"),
                    Variable::new("L", "Stroke", "m"),
                    Variable::new("A", "Piston area pi D^2/4", "m^2"),
                    Variable::new("n", "Power strokes per minute (N/2 four-stroke)", "1/min"),
                ],
                assumptions: vec!["SI units inside the heat chain"],
                category: EquationCategory::Head,
                source_module: "equations/crown.rs",
                source_function: "indicated_power",
            },

            Equation::BrakePower => EquationMetadata {
                name: "Brake Power",
                description: "Brake power per cylinder",
                formula_plain: "BP = eta_m IP",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("eta_m", "Mechanical efficiency", "-"),
                    Variable::new("IP", "Indicated power", "W"),
                ],
                assumptions: vec![],
                category: EquationCategory::Head,
                source_module: "equations/crown.rs",
                source_function: "brake_power",
            },

            Equation::CrownHeatFlow => EquationMetadata {
                name: "Heat Flow Through Crown",
                description: "Share of the fuel heat conducted through the piston head",
                formula_plain: "H = C HCV m BP / 3600",
                reference: CodeReference::HeatConduction,
                variables: vec![
                    Variable::new("C", "Fraction of heat through crown (0.05)", "-"),
                    Variable::new("HCV", "Higher calorific value", "J/kg"),
                    Variable::new("m", "Fuel consumption", "kg/BP/hr"),
                    Variable::new("BP", "Brake power", "kW"),
                ],
                assumptions: vec!["Steady operation at rated load"],
                category: EquationCategory::Head,
                source_module: "equations/crown.rs",
                source_function: "crown_heat_flow",
            },

            Equation::HeatDissipationThickness => EquationMetadata {
                name: "Head Thickness (Heat Dissipation)",
                description: "Crown thickness needed to conduct the heat flow to the cylinder wall",
                formula_plain: "t_H = H / (12.56 k (T_c - T_e))",
                reference: CodeReference::HeatConduction,
                variables: vec![
                    Variable::new("H", "Heat flow through crown", "W"),
                    Variable::new("k", "Thermal conductivity", "W/m C"),
                    Variable::new("T_c - T_e", "Centre to edge temperature difference", "C"),
                ],
                assumptions: vec!["Result in meters, reported in mm"],
                category: EquationCategory::Head,
                source_module: "equations/crown.rs",
                source_function: "heat_dissipation_thickness",
            },

            Equation::AdoptedHeadThickness => EquationMetadata {
                name: "Adopted Head Thickness",
                description: "The larger of the strength and heat-dissipation thicknesses",
                formula_plain: "t_H = max(t_H,strength, t_H,heat)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("t_H", "Head thickness", "mm")],
                assumptions: vec![],
                category: EquationCategory::Head,
                source_module: "calculations/head.rs",
                source_function: "calculate",
            },

            Equation::RibThickness => EquationMetadata {
                name: "Rib Thickness",
                description: "Recommended rib thickness when the head is thicker than the rib threshold",
                formula_plain: "t_R = t_H/3 to t_H/2 (when t_H > 6 mm)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("t_R", "Rib thickness", "mm")],
                assumptions: vec!["Strict comparison: exactly 6 mm needs no ribs"],
                category: EquationCategory::Head,
                source_module: "calculations/head.rs",
                source_function: "rib_recommendation",
            },

            Equation::RingRadialThickness => EquationMetadata {
                name: "Ring Radial Thickness",
                description: "Radial thickness from the ring wall pressure and allowable bending stress",
                formula_plain: "t1 = sqrt(3 p_w D / sigma_t)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![
                    Variable::new("p_w", "Allowable radial wall pressure", "N/mm^2"),
                    Variable::new("D", "Cylinder bore", "mm"),
                    Variable::new("sigma_t", "Allowable bending stress of ring", "MPa"),
                ],
                assumptions: vec!["Textbook form; radial_thickness_rule = RootOfProduct"],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "radial_thickness",
            },

            Equation::RingRadialThicknessBoreScaled => EquationMetadata {
                name: "Ring Radial Thickness (Bore Scaled)",
                description: "Dimensionally consistent radial thickness, scaled by the bore",
                formula_plain: "t1 = D sqrt(3 p_w / sigma_t)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![
                    Variable::new("p_w", "Allowable radial wall pressure", "N/mm^2"),
                    Variable::new("D", "Cylinder bore", "mm"),
                    Variable::new("sigma_t", "Allowable bending stress of ring", "MPa"),
                ],
                assumptions: vec!["radial_thickness_rule = BoreScaled"],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "radial_thickness",
            },

            Equation::RingAxialThickness => EquationMetadata {
                name: "Ring Axial Thickness",
                description: "Axial thickness, the larger of a radial-thickness multiple and the empirical minimum",
                formula_plain: "t2 = max(f t1, D / (10 n_R))",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![
                    Variable::new("f", "Axial multiplier (0.7 to 1.0)", "-"),
                    Variable::new("n_R", "Number of rings", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "calculate",
            },

            Equation::TopLandWidth => EquationMetadata {
                name: "Top Land Width",
                description: "Width of the land above the first ring",
                formula_plain: "b1 = 1.1 t_H (t_H to 1.2 t_H)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("b1", "Top land width", "mm")],
                assumptions: vec![],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "calculate",
            },

            Equation::RingLandWidth => EquationMetadata {
                name: "Ring Land Width",
                description: "Width of the lands between ring grooves",
                formula_plain: "b2 = 0.85 t2 (0.75 t2 to t2)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("b2", "Land width", "mm")],
                assumptions: vec![],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "calculate",
            },

            Equation::RingGap => EquationMetadata {
                name: "Ring Gap",
                description: "Gap between ring ends, free and when fitted in the cylinder",
                formula_plain: "G_free = 3.5 t1, G_fitted = 0.002 D to 0.004 D",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("G", "Ring gap", "mm")],
                assumptions: vec!["Fitted gap adopted at 0.003 D"],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "calculate",
            },

            Equation::RingGrooveDepth => EquationMetadata {
                name: "Ring Groove Depth",
                description: "Radial depth of each ring groove",
                formula_plain: "b = t1 + 0.4",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("b", "Groove depth", "mm")],
                assumptions: vec![],
                category: EquationCategory::Rings,
                source_module: "calculations/rings.rs",
                source_function: "calculate",
            },

            Equation::BarrelMaxThickness => EquationMetadata {
                name: "Barrel Maximum Thickness",
                description: "Wall thickness of the barrel at the top",
                formula_plain: "t3 = 0.03 D + t1 + 4.9",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("t3", "Barrel thickness at top", "mm")],
                assumptions: vec!["Same as 0.03 D + b + 4.5 with groove depth b = t1 + 0.4"],
                category: EquationCategory::Barrel,
                source_module: "calculations/barrel.rs",
                source_function: "calculate",
            },

            Equation::BarrelOpenEndThickness => EquationMetadata {
                name: "Barrel Open-End Thickness",
                description: "Wall thickness at the open end of the barrel",
                formula_plain: "t4 = 0.3 t3 (0.25 t3 to 0.35 t3)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("t4", "Barrel thickness at open end", "mm")],
                assumptions: vec![],
                category: EquationCategory::Barrel,
                source_module: "calculations/barrel.rs",
                source_function: "calculate",
            },

            Equation::MaxGasLoad => EquationMetadata {
                name: "Maximum Gas Load",
                description: "Force of peak cylinder pressure on the crown",
                formula_plain: "P = pi D^2 p / 4",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("P", "Maximum gas load", "N")],
                assumptions: vec![],
                category: EquationCategory::Skirt,
                source_module: "equations/loads.rs",
                source_function: "max_gas_load",
            },

            Equation::SideThrust => EquationMetadata {
                name: "Side Thrust",
                description: "Lateral force of the piston on the cylinder wall",
                formula_plain: "R = 0.1 P",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("R", "Side thrust", "N")],
                assumptions: vec!["Thrust is one tenth of the gas load"],
                category: EquationCategory::Skirt,
                source_module: "equations/loads.rs",
                source_function: "side_thrust",
            },

            Equation::SkirtLength => EquationMetadata {
                name: "Skirt Length",
                description: "Skirt length from the allowable bearing pressure on the cylinder wall",
                formula_plain: "l = R / (p_b D)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("p_b", "Allowable skirt bearing pressure", "N/mm^2"),
                    Variable::new("l", "Skirt length", "mm"),
                ],
                assumptions: vec!["Projected bearing area l D"],
                category: EquationCategory::Skirt,
                source_module: "calculations/skirt.rs",
                source_function: "calculate",
            },

            Equation::SkirtLengthLimits => EquationMetadata {
                name: "Skirt Length Limits",
                description: "Practical skirt length range applied to the calculated length",
                formula_plain: "0.65 D <= l <= 0.8 D",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("l", "Skirt length", "mm")],
                assumptions: vec!["Applied per the configured skirt length policy"],
                category: EquationCategory::Skirt,
                source_module: "calculations/skirt.rs",
                source_function: "adopt_length",
            },

            Equation::RingSectionLength => EquationMetadata {
                name: "Ring Section Length",
                description: "Axial length occupied by the rings and lands",
                formula_plain: "L_R = n_R t2 + (n_R - 1) b2",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("L_R", "Ring section length", "mm")],
                assumptions: vec!["Land count n_R - 1 by default, n_R selectable"],
                category: EquationCategory::Skirt,
                source_module: "calculations/skirt.rs",
                source_function: "calculate",
            },

            Equation::TotalPistonLength => EquationMetadata {
                name: "Total Piston Length",
                description: "Overall piston length",
                formula_plain: "L = l + L_R + b1",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("L", "Piston length", "mm")],
                assumptions: vec![],
                category: EquationCategory::Skirt,
                source_module: "calculations/skirt.rs",
                source_function: "calculate",
            },

            Equation::PinLengthInBush => EquationMetadata {
                name: "Pin Length in Bush",
                description: "Length of the pin bearing in the small-end bush",
                formula_plain: "l1 = 0.45 D",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("l1", "Length in bush", "mm")],
                assumptions: vec![],
                category: EquationCategory::Pin,
                source_module: "calculations/pin.rs",
                source_function: "calculate",
            },

            Equation::PinOutsideDiameter => EquationMetadata {
                name: "Pin Outside Diameter",
                description: "Outside diameter from the bearing pressure in the bush",
                formula_plain: "d0 = P / (p_b1 l1)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("p_b1", "Allowable bearing pressure in bush", "N/mm^2"),
                    Variable::new("d0", "Outside diameter", "mm"),
                ],
                assumptions: vec!["From P = p_b1 d0 l1; pin_diameter_rule = BearingArea"],
                category: EquationCategory::Pin,
                source_module: "calculations/pin.rs",
                source_function: "outside_diameter",
            },

            Equation::PinOutsideDiameterRoot => EquationMetadata {
                name: "Pin Outside Diameter (Square Root)",
                description: "Outside diameter taken as the root of the bearing quotient",
                formula_plain: "d0 = sqrt(P / (p_b1 l1))",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("p_b1", "Allowable bearing pressure in bush", "N/mm^2"),
                    Variable::new("d0", "Outside diameter", "mm"),
                ],
                assumptions: vec!["pin_diameter_rule = RootOfBearingArea"],
                category: EquationCategory::Pin,
                source_module: "calculations/pin.rs",
                source_function: "outside_diameter",
            },

            Equation::PinInsideDiameter => EquationMetadata {
                name: "Pin Inside Diameter",
                description: "Bore of the hollow pin",
                formula_plain: "di = 0.6 d0",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("di", "Inside diameter", "mm")],
                assumptions: vec![],
                category: EquationCategory::Pin,
                source_module: "calculations/pin.rs",
                source_function: "calculate",
            },

            Equation::PinBendingMoment => EquationMetadata {
                name: "Pin Bending Moment",
                description: "Maximum bending moment in the pin at its centre",
                formula_plain: "M = P D / 8",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("M", "Bending moment", "N mm")],
                assumptions: vec!["Simply supported at the bosses, load spread over l1"],
                category: EquationCategory::Pin,
                source_module: "equations/loads.rs",
                source_function: "pin_max_moment",
            },

            Equation::HollowSectionModulus => EquationMetadata {
                name: "Hollow Circular Section Modulus",
                description: "Section modulus of the hollow pin",
                formula_plain: "Z = pi (d0^4 - di^4) / (32 d0)",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("Z", "Section modulus", "mm^3")],
                assumptions: vec![],
                category: EquationCategory::Pin,
                source_module: "equations/section.rs",
                source_function: "hollow_circle_section_modulus",
            },

            Equation::PinBendingStress => EquationMetadata {
                name: "Pin Bending Stress",
                description: "Induced bending stress checked against the allowable value",
                formula_plain: "sigma_b = M / Z <= sigma_b,allow",
                reference: CodeReference::Mechanics,
                variables: vec![Variable::new("sigma_b", "Bending stress", "MPa")],
                assumptions: vec!["Equality counts as safe"],
                category: EquationCategory::Pin,
                source_module: "equations/loads.rs",
                source_function: "bending_stress",
            },

            Equation::BossDiameter => EquationMetadata {
                name: "Mean Boss Diameter",
                description: "Mean diameter of the piston bosses",
                formula_plain: "d_boss = 1.4 d0 (1.4 d0 to 1.5 d0)",
                reference: CodeReference::EmpiricalPractice,
                variables: vec![Variable::new("d_boss", "Mean boss diameter", "mm")],
                assumptions: vec![],
                category: EquationCategory::Pin,
                source_module: "calculations/pin.rs",
                source_function: "calculate",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// All categories in pipeline order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Head, Rings, Barrel, Skirt, Pin];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::GrashofHeadThickness,
    Equation::IndicatedPower,
    Equation::BrakePower,
    Equation::CrownHeatFlow,
    Equation::HeatDissipationThickness,
    Equation::AdoptedHeadThickness,
    Equation::RibThickness,
    Equation::RingRadialThickness,
    Equation::RingRadialThicknessBoreScaled,
    Equation::RingAxialThickness,
    Equation::TopLandWidth,
    Equation::RingLandWidth,
    Equation::RingGap,
    Equation::RingGrooveDepth,
    Equation::BarrelMaxThickness,
    Equation::BarrelOpenEndThickness,
    Equation::MaxGasLoad,
    Equation::SideThrust,
    Equation::SkirtLength,
    Equation::SkirtLengthLimits,
    Equation::RingSectionLength,
    Equation::TotalPistonLength,
    Equation::PinLengthInBush,
    Equation::PinOutsideDiameter,
    Equation::PinOutsideDiameterRoot,
    Equation::PinInsideDiameter,
    Equation::PinBendingMoment,
    Equation::HollowSectionModulus,
    Equation::PinBendingStress,
    Equation::BossDiameter,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where/why it was used (e.g., "Skirt length raised to 0.65 D")
    pub context: String,
}

impl EquationUsage {
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// True if `equation` was recorded at least once
    pub fn contains(&self, equation: Equation) -> bool {
        self.usages.iter().any(|u| u.equation == equation)
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category, in pipeline order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Plain-text "List of Equations" appendix for the text export.
    pub fn render_text_appendix(&self) -> String {
        let mut output = String::from("APPENDIX: LIST OF EQUATIONS\n");
        output.push_str(&"=".repeat(27));
        output.push('\n');

        if self.usages.is_empty() {
            output.push_str("No equations recorded.\n");
            return output;
        }

        for (category, equations) in self.by_category() {
            output.push_str(&format!("\n{}\n", category.display_name()));
            for eq in equations {
                let meta = eq.metadata();
                output.push_str(&format!("  {:<36} {}\n", meta.name, meta.formula_plain));
                output.push_str(&format!("  {:<36} [{}]\n", "", meta.reference.citation()));
                for usage in self.usages.iter().filter(|u| u.equation == eq) {
                    if !usage.context.is_empty() {
                        output.push_str(&format!("  {:<36} - {}\n", "", usage.context));
                    }
                }
            }
        }
        output
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the `EQUATIONS.md` reference for the whole registry.
///
/// ```rust
/// use piston_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Piston Design Equations Reference"));
/// assert!(markdown.contains("## Piston Pin"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Piston Design Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the piston design calculation,
in pipeline order (head, rings, barrel, skirt, pin).

## Units

| Quantity | Unit |
|----------|------|
| Lengths | mm |
| Forces | N |
| Pressures, stresses | N/mm^2 (MPa) |
| Moments | N mm |
| Heat-chain internals | SI (m, Pa, W) |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 30);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        assert!(Equation::PinBendingMoment.metadata().formula_plain.contains("P D / 8"));
        assert!(Equation::GrashofHeadThickness.metadata().formula_plain.contains("16 sigma_t"));
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::MaxGasLoad, "Skirt");
        tracker.record(Equation::SideThrust, "Skirt");
        tracker.record(Equation::MaxGasLoad, "Pin");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::MaxGasLoad, Equation::SideThrust]);
        assert!(tracker.contains(Equation::SideThrust));
        assert!(!tracker.contains(Equation::RibThickness));
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::PinBendingStress, "");
        tracker.record(Equation::GrashofHeadThickness, "");
        tracker.record(Equation::RingGap, "");

        let cats: Vec<_> = tracker.by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(cats, vec![EquationCategory::Head, EquationCategory::Rings, EquationCategory::Pin]);
    }

    #[test]
    fn test_text_appendix() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::SkirtLengthLimits, "Skirt length clamped to 0.8 D");
        let text = tracker.render_text_appendix();
        assert!(text.contains("APPENDIX: LIST OF EQUATIONS"));
        assert!(text.contains("Piston Skirt"));
        assert!(text.contains("clamped to 0.8 D"));

        let empty = EquationTracker::new().render_text_appendix();
        assert!(empty.contains("No equations recorded"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.contains("Auto-generated from source code"));
        for cat in Equation::all_categories() {
            assert!(markdown.contains(&format!("## {}", cat.display_name())));
        }
        assert!(markdown.contains("### Hollow Circular Section Modulus"));
        assert!(markdown.contains("`P = pi D^2 p / 4`"));
        assert!(markdown.contains("**Total Equations:** 30"));
        assert!(markdown.contains("**Categories:** 5"));
    }
}
