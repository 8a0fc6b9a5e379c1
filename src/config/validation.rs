//! Configuration validation system.

use std::collections::HashSet;

use super::types::BenchConfig;

/// Element-iteration product above which a warning is raised.
const LONG_RUN_WORK: i128 = 10_000_000_000;

/// A single validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field path that failed validation.
    pub field: String,
    /// Error message.
    pub message: String,
    /// Severity level.
    pub severity: ValidationSeverity,
}

impl ValidationError {
    /// Create a new error.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    /// Create a new warning.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Severity of validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    /// Error - configuration is invalid.
    Error,
    /// Warning - configuration may have issues.
    Warning,
}

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty (valid) result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if the validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self
            .errors
            .iter()
            .any(|e| e.severity == ValidationSeverity::Error)
    }

    /// Get all validation issues.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get only errors (not warnings).
    #[must_use]
    pub fn errors_only(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Error)
            .collect()
    }

    /// Get only warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<&ValidationError> {
        self.errors
            .iter()
            .filter(|e| e.severity == ValidationSeverity::Warning)
            .collect()
    }
}

/// Trait for configuration validators.
pub trait Validator: std::fmt::Debug + Send + Sync {
    /// Validate a configuration and return any errors.
    fn validate(&self, config: &BenchConfig) -> ValidationResult;
}

/// Built-in validator for run parameters.
#[derive(Debug, Default)]
pub struct BasicValidator;

impl BasicValidator {
    /// Create a new basic validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BasicValidator {
    fn validate(&self, config: &BenchConfig) -> ValidationResult {
        let mut result = ValidationResult::new();
        let bench = &config.benchmark;

        if !bench.is_sweep() && bench.problem_size <= 0 {
            result.add_error(ValidationError::error(
                "benchmark.problem_size",
                format!("Problem size must be positive, got {}", bench.problem_size),
            ));
        }

        if bench.iteration_count <= 0 {
            result.add_error(ValidationError::error(
                "benchmark.iteration_count",
                format!(
                    "Iteration count must be positive, got {}",
                    bench.iteration_count
                ),
            ));
        }

        let mut seen = HashSet::new();
        for (i, &size) in bench.sweep_sizes.iter().enumerate() {
            if size <= 0 {
                result.add_error(ValidationError::error(
                    format!("benchmark.sweep_sizes[{}]", i),
                    format!("Sweep size must be positive, got {}", size),
                ));
            } else if !seen.insert(size) {
                result.add_error(ValidationError::warning(
                    format!("benchmark.sweep_sizes[{}]", i),
                    format!("Duplicate sweep size: {}", size),
                ));
            }
        }

        let largest = bench
            .sweep_sizes
            .iter()
            .copied()
            .max()
            .unwrap_or(bench.problem_size);
        if i128::from(largest) * i128::from(bench.iteration_count) > LONG_RUN_WORK {
            result.add_error(ValidationError::warning(
                "benchmark",
                "Problem size times iteration count is very large; the run may take minutes",
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_validator_valid() {
        let config = BenchConfig::default();
        let result = BasicValidator::new().validate(&config);
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_basic_validator_non_positive() {
        let mut config = BenchConfig::default();
        config.benchmark.problem_size = 0;
        config.benchmark.iteration_count = -1;

        let result = BasicValidator::new().validate(&config);

        assert!(!result.is_valid());
        assert_eq!(result.errors_only().len(), 2);
        assert!(result.errors()[0].message.contains("Problem size"));
        assert_eq!(result.errors()[1].field, "benchmark.iteration_count");
    }

    #[test]
    fn test_basic_validator_sweep_sizes() {
        let mut config = BenchConfig::default();
        config.benchmark.sweep_sizes = vec![16, 16, -2];

        let result = BasicValidator::new().validate(&config);

        assert!(!result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].message.contains("Duplicate"));
        assert_eq!(result.errors_only()[0].field, "benchmark.sweep_sizes[2]");
    }

    #[test]
    fn test_basic_validator_sweep_skips_problem_size() {
        let mut config = BenchConfig::default();
        config.benchmark.problem_size = 0;
        config.benchmark.sweep_sizes = vec![8, 16];

        let result = BasicValidator::new().validate(&config);

        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_basic_validator_long_run_warning() {
        let mut config = BenchConfig::default();
        config.benchmark.iteration_count = 1_000_000;

        let result = BasicValidator::new().validate(&config);

        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }
}
