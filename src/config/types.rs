//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::perf::{BenchmarkConfig, REFERENCE_ITERATION_COUNT, REFERENCE_PROBLEM_SIZE};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    /// Run parameters.
    pub benchmark: BenchmarkSection,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Result output configuration.
    pub output: OutputConfig,
}

/// Benchmark section configuration.
///
/// Counts are kept signed so that negative values in a file reach
/// validation instead of failing as a type error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenchmarkSection {
    /// Elements per operand.
    pub problem_size: i64,

    /// Timed repetitions per representation.
    pub iteration_count: i64,

    /// Seed for the array-form random source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Problem sizes to sweep. Non-empty enables sweep mode.
    pub sweep_sizes: Vec<i64>,
}

impl Default for BenchmarkSection {
    fn default() -> Self {
        Self {
            problem_size: REFERENCE_PROBLEM_SIZE as i64,
            iteration_count: REFERENCE_ITERATION_COUNT as i64,
            seed: None,
            sweep_sizes: Vec::new(),
        }
    }
}

impl BenchmarkSection {
    /// Whether sweep mode is requested.
    pub fn is_sweep(&self) -> bool {
        !self.sweep_sizes.is_empty()
    }

    /// Convert to runner configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a count is not positive.
    pub fn benchmark_config(&self) -> ConfigResult<BenchmarkConfig> {
        Ok(BenchmarkConfig {
            problem_size: positive("benchmark.problem_size", self.problem_size)?,
            iteration_count: self.checked_iteration_count()?,
        })
    }

    /// Iteration count as an unsigned count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if it is not positive.
    pub fn checked_iteration_count(&self) -> ConfigResult<usize> {
        positive("benchmark.iteration_count", self.iteration_count)
    }

    /// Sweep sizes as unsigned counts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any size is not positive.
    pub fn checked_sweep_sizes(&self) -> ConfigResult<Vec<usize>> {
        self.sweep_sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| positive(&format!("benchmark.sweep_sizes[{}]", i), size))
            .collect()
    }
}

fn positive(field: &str, value: i64) -> ConfigResult<usize> {
    if value <= 0 {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("must be a positive integer, got {}", value),
        });
    }
    usize::try_from(value).map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("{} does not fit in this platform's address space", value),
    })
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: LogLevel,

    /// Log format (json, pretty, compact).
    pub format: LogFormat,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level (most verbose).
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level (default).
    #[default]
    Warn,
    /// Error level (least verbose).
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                message: format!("unknown log level '{}'", other),
            }),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (machine-readable).
    Json,
    /// Multi-line human-readable format.
    Pretty,
    /// Compact single-line format (default).
    #[default]
    Compact,
}

/// Result output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format.
    pub format: OutputFormat,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width table (default).
    #[default]
    Table,
    /// Pretty-printed JSON report.
    Json,
}
