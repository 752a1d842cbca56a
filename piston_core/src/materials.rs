//! # Piston Materials
//!
//! Default crown properties for the four common piston materials, and the
//! two-stage resolution used by every calculation: table lookup first, then
//! per-field caller overrides.
//!
//! | Material | σt (MPa) | k (W/m·°C) | ΔT (°C) |
//! |---|---|---|---|
//! | Cast Iron | 38 | 46.6 | 220 |
//! | Nickel Cast Iron | 70 | 46.6 | 220 |
//! | Aluminium Alloy | 70 | 174.75 | 75 |
//! | Forged Steel | 80 | 51.25 | 220 |
//!
//! ## Example
//!
//! ```rust
//! use piston_core::materials::{MaterialOverrides, PistonMaterial};
//!
//! let overrides = MaterialOverrides {
//!     allowable_bending_stress_head_mpa: Some(37.5),
//!     ..Default::default()
//! };
//! let props = overrides.resolve(PistonMaterial::CastIron).unwrap();
//! assert_eq!(props.allowable_bending_stress_head_mpa, 37.5);
//! assert_eq!(props.thermal_conductivity_w_mc, 46.6);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{require_magnitude, CalcError, CalcResult};

/// Piston material selection.
///
/// Parsing is forgiving about case and separators, so `"Cast Iron"`,
/// `"cast-iron"` and `"CastIron"` are all accepted. Any other key is an
/// `InvalidInput` error on the `material` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PistonMaterial {
    CastIron,
    NickelCastIron,
    AluminiumAlloy,
    ForgedSteel,
}

/// Material-derived properties used for the piston head.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Allowable bending (tensile) stress for the crown σt (MPa)
    pub allowable_bending_stress_head_mpa: f64,
    /// Thermal conductivity k (W/m·°C)
    pub thermal_conductivity_w_mc: f64,
    /// Temperature difference between crown centre and edge ΔT (°C)
    pub head_to_wall_temp_diff_c: f64,
}

impl PistonMaterial {
    /// All supported materials, in display order
    pub const ALL: [PistonMaterial; 4] = [
        PistonMaterial::CastIron,
        PistonMaterial::NickelCastIron,
        PistonMaterial::AluminiumAlloy,
        PistonMaterial::ForgedSteel,
    ];

    /// Default properties from the material table
    pub fn properties(&self) -> MaterialProperties {
        let (sigma_t, k, delta_t) = match self {
            PistonMaterial::CastIron => (38.0, 46.6, 220.0),
            PistonMaterial::NickelCastIron => (70.0, 46.6, 220.0),
            PistonMaterial::AluminiumAlloy => (70.0, 174.75, 75.0),
            PistonMaterial::ForgedSteel => (80.0, 51.25, 220.0),
        };
        MaterialProperties {
            allowable_bending_stress_head_mpa: sigma_t,
            thermal_conductivity_w_mc: k,
            head_to_wall_temp_diff_c: delta_t,
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PistonMaterial::CastIron => "Cast Iron",
            PistonMaterial::NickelCastIron => "Nickel Cast Iron",
            PistonMaterial::AluminiumAlloy => "Aluminium Alloy",
            PistonMaterial::ForgedSteel => "Forged Steel",
        }
    }

    /// Stable key used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            PistonMaterial::CastIron => "CastIron",
            PistonMaterial::NickelCastIron => "NickelCastIron",
            PistonMaterial::AluminiumAlloy => "AluminiumAlloy",
            PistonMaterial::ForgedSteel => "ForgedSteel",
        }
    }
}

impl Default for PistonMaterial {
    fn default() -> Self {
        PistonMaterial::CastIron
    }
}

impl fmt::Display for PistonMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PistonMaterial {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "castiron" | "ci" => Ok(PistonMaterial::CastIron),
            "nickelcastiron" => Ok(PistonMaterial::NickelCastIron),
            "aluminiumalloy" | "aluminumalloy" | "aluminium" | "aluminum" => {
                Ok(PistonMaterial::AluminiumAlloy)
            }
            "forgedsteel" | "steel" => Ok(PistonMaterial::ForgedSteel),
            _ => Err(CalcError::invalid_input(
                "material",
                s,
                "Unknown material; expected CastIron, NickelCastIron, AluminiumAlloy or ForgedSteel",
            )),
        }
    }
}

impl TryFrom<String> for PistonMaterial {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PistonMaterial> for String {
    fn from(material: PistonMaterial) -> Self {
        material.key().to_string()
    }
}

/// Optional per-field overrides applied after the table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialOverrides {
    pub allowable_bending_stress_head_mpa: Option<f64>,
    pub thermal_conductivity_w_mc: Option<f64>,
    pub head_to_wall_temp_diff_c: Option<f64>,
}

impl MaterialOverrides {
    /// True when no field is overridden
    pub fn is_empty(&self) -> bool {
        self.allowable_bending_stress_head_mpa.is_none()
            && self.thermal_conductivity_w_mc.is_none()
            && self.head_to_wall_temp_diff_c.is_none()
    }

    /// Look up `material` and apply any overrides, then validate the result.
    ///
    /// All three properties must be positive: σt divides the Grashof term and
    /// `k·ΔT` divides the heat-dissipation thickness.
    pub fn resolve(&self, material: PistonMaterial) -> CalcResult<MaterialProperties> {
        let defaults = material.properties();
        let props = MaterialProperties {
            allowable_bending_stress_head_mpa: self
                .allowable_bending_stress_head_mpa
                .unwrap_or(defaults.allowable_bending_stress_head_mpa),
            thermal_conductivity_w_mc: self
                .thermal_conductivity_w_mc
                .unwrap_or(defaults.thermal_conductivity_w_mc),
            head_to_wall_temp_diff_c: self
                .head_to_wall_temp_diff_c
                .unwrap_or(defaults.head_to_wall_temp_diff_c),
        };

        require_magnitude(
            "allowable_bending_stress_head_mpa",
            props.allowable_bending_stress_head_mpa,
        )?;
        require_magnitude("thermal_conductivity_w_mc", props.thermal_conductivity_w_mc)?;
        require_magnitude("head_to_wall_temp_diff_c", props.head_to_wall_temp_diff_c)?;

        Ok(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_table() {
        let ci = PistonMaterial::CastIron.properties();
        assert_eq!(ci.allowable_bending_stress_head_mpa, 38.0);
        assert_eq!(ci.thermal_conductivity_w_mc, 46.6);
        assert_eq!(ci.head_to_wall_temp_diff_c, 220.0);

        let ni = PistonMaterial::NickelCastIron.properties();
        assert_eq!(ni.allowable_bending_stress_head_mpa, 70.0);
        assert_eq!(ni.thermal_conductivity_w_mc, 46.6);

        let al = PistonMaterial::AluminiumAlloy.properties();
        assert_eq!(al.thermal_conductivity_w_mc, 174.75);
        assert_eq!(al.head_to_wall_temp_diff_c, 75.0);

        let fs = PistonMaterial::ForgedSteel.properties();
        assert_eq!(fs.allowable_bending_stress_head_mpa, 80.0);
        assert_eq!(fs.thermal_conductivity_w_mc, 51.25);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("Cast Iron".parse::<PistonMaterial>().unwrap(), PistonMaterial::CastIron);
        assert_eq!("nickel_cast_iron".parse::<PistonMaterial>().unwrap(), PistonMaterial::NickelCastIron);
        assert_eq!("Aluminum-Alloy".parse::<PistonMaterial>().unwrap(), PistonMaterial::AluminiumAlloy);
        assert_eq!("ForgedSteel".parse::<PistonMaterial>().unwrap(), PistonMaterial::ForgedSteel);
    }

    #[test]
    fn test_unknown_material() {
        let err = "Titanium".parse::<PistonMaterial>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("material"));
    }

    #[test]
    fn test_override_single_field() {
        let overrides = MaterialOverrides {
            thermal_conductivity_w_mc: Some(50.0),
            ..Default::default()
        };
        let props = overrides.resolve(PistonMaterial::ForgedSteel).unwrap();
        assert_eq!(props.allowable_bending_stress_head_mpa, 80.0);
        assert_eq!(props.thermal_conductivity_w_mc, 50.0);
        assert_eq!(props.head_to_wall_temp_diff_c, 220.0);
    }

    #[test]
    fn test_zero_conductivity_rejected() {
        let overrides = MaterialOverrides {
            thermal_conductivity_w_mc: Some(0.0),
            ..Default::default()
        };
        let err = overrides.resolve(PistonMaterial::CastIron).unwrap_err();
        assert_eq!(err.field(), Some("thermal_conductivity_w_mc"));
    }

    #[test]
    fn test_zero_temp_diff_rejected() {
        let overrides = MaterialOverrides {
            head_to_wall_temp_diff_c: Some(0.0),
            ..Default::default()
        };
        assert!(overrides.resolve(PistonMaterial::AluminiumAlloy).is_err());
    }

    #[test]
    fn test_extreme_override_rejected() {
        let overrides = MaterialOverrides {
            allowable_bending_stress_head_mpa: Some(1e-300),
            ..Default::default()
        };
        let err = overrides.resolve(PistonMaterial::CastIron).unwrap_err();
        assert_eq!(err.field(), Some("allowable_bending_stress_head_mpa"));
    }

    #[test]
    fn test_material_serialization() {
        let json = serde_json::to_string(&PistonMaterial::AluminiumAlloy).unwrap();
        assert_eq!(json, "\"AluminiumAlloy\"");
        let parsed: PistonMaterial = serde_json::from_str("\"nickel cast iron\"").unwrap();
        assert_eq!(parsed, PistonMaterial::NickelCastIron);
        assert!(serde_json::from_str::<PistonMaterial>("\"Brass\"").is_err());
    }

    #[test]
    fn test_empty_overrides() {
        assert!(MaterialOverrides::default().is_empty());
        let props = MaterialOverrides::default().resolve(PistonMaterial::CastIron).unwrap();
        assert_eq!(props, PistonMaterial::CastIron.properties());
    }
}
