//! Custom error types for City Budgeter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for City Budgeter operations
#[derive(Error, Debug)]
pub enum BudgeterError {
    /// The requested city is not part of the reference table
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A numeric input is outside its allowed domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BudgeterError {
    /// Create an "invalid input" error for a field outside its range
    pub fn out_of_range(field: &str, value: impl std::fmt::Display, range: &str) -> Self {
        Self::InvalidInput(format!("{} must be in {}, got {}", field, range, value))
    }

    /// Create a duplicate error for cities
    pub fn duplicate_city(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "City",
            identifier: identifier.into(),
        }
    }

    /// Check if this is an unknown city error
    pub fn is_unknown_city(&self) -> bool {
        matches!(self, Self::UnknownCity(_))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgeterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgeterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for BudgeterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for BudgeterError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for City Budgeter operations
pub type BudgeterResult<T> = Result<T, BudgeterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgeterError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_city_error() {
        let err = BudgeterError::UnknownCity("Atlantis".into());
        assert_eq!(err.to_string(), "Unknown city: Atlantis");
        assert!(err.is_unknown_city());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_out_of_range_error() {
        let err = BudgeterError::out_of_range("income", 50, "[700, 3000]");
        assert_eq!(
            err.to_string(),
            "Invalid input: income must be in [700, 3000], got 50"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_duplicate_error() {
        let err = BudgeterError::duplicate_city("Berlin");
        assert_eq!(err.to_string(), "City already exists: Berlin");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgeterError = io_err.into();
        assert!(matches!(err, BudgeterError::Io(_)));
    }
}
