//! # Error Types
//!
//! Structured error types for piston_core. Every rejected calculation names
//! the field that violated its constraint so that a caller (human, form, or
//! script) can point at the offending input directly.
//!
//! An overstressed piston pin is *not* an error: it is reported as
//! [`PinVerdict::Unsafe`](crate::calculations::pin::PinVerdict) on a normal result.
//!
//! ## Example
//!
//! ```rust
//! use piston_core::errors::{CalcError, CalcResult};
//!
//! fn validate_bore(bore_mm: f64) -> CalcResult<()> {
//!     if bore_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "bore_diameter_mm",
//!             bore_mm.to_string(),
//!             "Bore must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_bore(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for piston_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its physically valid domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A JSON or TOML document could not be parsed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (front ends only; the core never touches files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this error concerns one input
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Reject NaN and infinities, then require `value > 0`.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// Smallest magnitude accepted for a physical input.
pub(crate) const MIN_INPUT_MAGNITUDE: f64 = 1e-6;
/// Largest magnitude accepted for a physical input.
pub(crate) const MAX_INPUT_MAGNITUDE: f64 = 1e6;

/// Require a positive physical input within
/// [`MIN_INPUT_MAGNITUDE`, `MAX_INPUT_MAGNITUDE`], so that every derived
/// quantity stays finite and a failure names the input that caused it.
pub(crate) fn require_magnitude(field: &str, value: f64) -> CalcResult<()> {
    require_positive(field, value)?;
    if !(MIN_INPUT_MAGNITUDE..=MAX_INPUT_MAGNITUDE).contains(&value) {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!(
                "Value must be within [{:e}, {:e}]",
                MIN_INPUT_MAGNITUDE, MAX_INPUT_MAGNITUDE
            ),
        ));
    }
    Ok(())
}

/// Require `min <= value <= max` (finite).
pub(crate) fn require_in_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value must be within [{}, {}]", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("bore_diameter_mm", "-5", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::file_error("read", "x.json", "missing").error_code(), "FILE_ERROR");
        assert_eq!(CalcError::invalid_input("a", "0", "b").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_field_reported() {
        let err = require_positive("stroke_length_mm", 0.0).unwrap_err();
        assert_eq!(err.field(), Some("stroke_length_mm"));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(require_positive("p", f64::NAN).is_err());
        assert!(require_positive("p", f64::INFINITY).is_err());
        assert!(require_in_range("f", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_range_inclusive() {
        assert!(require_in_range("f", 0.7, 0.7, 1.0).is_ok());
        assert!(require_in_range("f", 1.0, 0.7, 1.0).is_ok());
        assert!(require_in_range("f", 1.01, 0.7, 1.0).is_err());
    }

    #[test]
    fn test_magnitude_bounds() {
        assert!(require_magnitude("d", 100.0).is_ok());
        assert!(require_magnitude("d", MIN_INPUT_MAGNITUDE).is_ok());
        assert!(require_magnitude("d", MAX_INPUT_MAGNITUDE).is_ok());
        assert!(require_magnitude("d", 0.0).is_err());
        assert!(require_magnitude("d", f64::INFINITY).is_err());

        let err = require_magnitude("bore_diameter_mm", 1e160).unwrap_err();
        assert_eq!(err.field(), Some("bore_diameter_mm"));
        let err = require_magnitude("pin_bearing_pressure_mpa", 1e-300).unwrap_err();
        assert_eq!(err.field(), Some("pin_bearing_pressure_mpa"));
    }
}
