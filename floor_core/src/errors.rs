//! # Error Types
//!
//! Structured error types for floor_core. The cost model itself never fails;
//! these errors belong to the collector boundary (parsing raw text into
//! numbers and names) and to the optional readiness check a collector runs
//! before asking for a breakdown.
//!
//! ## Example
//!
//! ```rust
//! use floor_core::errors::{EstimateError, EstimateResult};
//!
//! fn check_rate(rate: f64) -> EstimateResult<f64> {
//!     if rate < 0.0 {
//!         return Err(EstimateError::invalid_input(
//!             "hourly_rate",
//!             rate.to_string(),
//!             "Rate cannot be negative",
//!         ));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for floor_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for input collection and readiness checks.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A raw input value could not be parsed or is out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field was left empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The job has nothing to estimate for (no rooms or no employees)
    #[error("Missing job data: no {what} added")]
    MissingData { what: String },
}

impl EstimateError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        EstimateError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MissingData error
    pub fn missing_data(what: impl Into<String>) -> Self {
        EstimateError::MissingData { what: what.into() }
    }

    /// Parse problems can be fixed by asking for the field again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidInput { .. } | EstimateError::MissingField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidInput { .. } => "INVALID_INPUT",
            EstimateError::MissingField { .. } => "MISSING_FIELD",
            EstimateError::MissingData { .. } => "MISSING_DATA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EstimateError::invalid_input("pickup_fee", "abc", "Not a number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(EstimateError::missing_field("name").error_code(), "MISSING_FIELD");
        assert_eq!(EstimateError::missing_data("rooms").error_code(), "MISSING_DATA");
    }

    #[test]
    fn test_recoverable() {
        assert!(EstimateError::invalid_input("days", "x", "bad").is_recoverable());
        assert!(!EstimateError::missing_data("employees").is_recoverable());
    }

    #[test]
    fn test_display() {
        let error = EstimateError::missing_data("rooms");
        assert_eq!(error.to_string(), "Missing job data: no rooms added");
    }
}
