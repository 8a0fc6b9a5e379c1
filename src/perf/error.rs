//! Benchmark error types.

use thiserror::Error;

/// Errors raised while setting up or interpreting a measurement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchmarkError {
    /// A run parameter is out of range. Raised before any allocation or timing.
    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// Name of the offending parameter.
        field: String,
        /// Error message.
        message: String,
    },

    /// The array-form timer read zero elapsed time, so no ratio exists.
    #[error("array-form timer reported zero elapsed time; speedup is undefined")]
    DegenerateMeasurement,

    /// A pre-built input pair does not match the configured problem size.
    #[error("input length mismatch: expected {expected} elements, got {actual}")]
    InputMismatch {
        /// Configured problem size.
        expected: usize,
        /// Length of the supplied input.
        actual: usize,
    },
}

impl BenchmarkError {
    /// Shorthand for an [`BenchmarkError::InvalidConfiguration`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error stems from bad run parameters.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Result type for benchmark operations.
pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
