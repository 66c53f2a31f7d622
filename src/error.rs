//! Custom error types for tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input validation errors (bad amount, missing category selection)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Chart data errors discovered at render time
    #[error("Data validation error: {0}")]
    Chart(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create a validation error for an amount that failed to parse
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Invalid amount '{}'. Please enter a valid number.",
            input.into()
        ))
    }

    /// Create a validation error for a missing category selection
    pub fn category_required() -> Self {
        Self::Validation("Please select a valid category.".to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a chart data error
    pub fn is_chart(&self) -> bool {
        matches!(self, Self::Chart(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tally operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount() {
        let err = TrackerError::invalid_amount("abc");
        assert!(err.is_validation());
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_category_required() {
        let err = TrackerError::category_required();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Please select a valid category."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
