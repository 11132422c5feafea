//! Error types for placement analysis
//!
//! Provides a unified error type for all placement crates. The analysis stages
//! themselves never fail on data; errors only come from parameter validation
//! and from the I/O collaborators.

use thiserror::Error;

/// Core error type for placement operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a detector, selector or pipeline
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Malformed telemetry or configuration text
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a parameter that must be strictly positive
    pub fn not_positive(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be positive and finite, got {value}"))
    }

    /// Create an error for a parameter that must not be negative
    pub fn negative(name: &str, value: f64) -> Self {
        Self::InvalidParameter(format!("{name} must be non-negative and finite, got {value}"))
    }

    /// Create an error for an interval whose bounds are out of order
    pub fn inverted_interval(start: f64, end: f64) -> Self {
        Self::InvalidInput(format!(
            "Interval start {start} must be finite and lie before end {end}"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}

/// Validate that `value` is finite and strictly greater than zero.
pub fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::not_positive(name, value))
    }
}

/// Validate that `value` is finite and not negative.
pub fn ensure_non_negative(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::negative(name, value))
    }
}
