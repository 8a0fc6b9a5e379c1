//! Run orchestration: configuration in, rendered output out.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::info;

use crate::config::{BenchConfig, ConfigError, OutputFormat};
use crate::perf::{
    render_sweep_table, render_table, Benchmark, BenchmarkError, JsonReport, Sweep,
};

/// Suite name recorded in JSON reports.
pub const SUITE_NAME: &str = "elementwise-add";

/// Errors surfaced by a full run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The benchmark refused to run.
    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),
}

impl AppError {
    /// Whether the failure is due to bad run parameters.
    pub fn is_invalid_configuration(&self) -> bool {
        match self {
            Self::Config(ConfigError::InvalidValue { .. } | ConfigError::ValidationError(_)) => {
                true
            }
            Self::Config(_) => false,
            Self::Benchmark(e) => e.is_invalid_configuration(),
        }
    }
}

/// Run the configured benchmark or sweep and render the result.
///
/// # Errors
///
/// Returns an error if a run parameter is not positive.
pub fn execute(config: &BenchConfig) -> Result<String, AppError> {
    let bench = &config.benchmark;
    let mut rng = match bench.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    if bench.is_sweep() {
        let sizes = bench.checked_sweep_sizes()?;
        let iteration_count = bench.checked_iteration_count()?;
        info!(?sizes, iteration_count, "Starting sweep");

        let sweep = Sweep::new(sizes, iteration_count).run_with_rng(&mut rng)?;
        return Ok(match config.output.format {
            OutputFormat::Table => render_sweep_table(&sweep),
            OutputFormat::Json => JsonReport::from_sweep(SUITE_NAME, sweep).to_json() + "\n",
        });
    }

    let run_config = bench.benchmark_config()?;
    info!(
        problem_size = run_config.problem_size,
        iteration_count = run_config.iteration_count,
        "Starting benchmark"
    );

    let result = Benchmark::new(run_config).run_with_rng(&mut rng)?;
    Ok(match config.output.format {
        OutputFormat::Table => render_table(&result),
        OutputFormat::Json => JsonReport::from_measurement(SUITE_NAME, result).to_json() + "\n",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(size: i64, iterations: i64) -> BenchConfig {
        let mut config = BenchConfig::default();
        config.benchmark.problem_size = size;
        config.benchmark.iteration_count = iterations;
        config.benchmark.seed = Some(11);
        config
    }

    #[test]
    fn test_execute_table() {
        let out = execute(&small(500, 2)).unwrap();
        assert!(out.starts_with("Implementation"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_execute_json() {
        let mut config = small(500, 2);
        config.output.format = OutputFormat::Json;
        let out = execute(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["suite_name"], SUITE_NAME);
        assert_eq!(value["measurements"][0]["problem_size"], 500);
    }

    #[test]
    fn test_execute_sweep() {
        let mut config = small(1, 2);
        config.benchmark.sweep_sizes = vec![8, 32];
        let out = execute(&config).unwrap();
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn test_execute_rejects_zero() {
        let err = execute(&small(0, 2)).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = execute(&small(10, 0)).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
