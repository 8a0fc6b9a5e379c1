//! Size sweeps: the same measurement repeated across several problem sizes.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::benchmark::{Benchmark, BenchmarkConfig, MeasurementResult};
use super::clock::{Clock, MonotonicClock};
use super::error::{BenchmarkError, BenchmarkResult};

/// Results of a sweep, in the order the sizes were given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Iteration count shared by every size.
    pub iteration_count: usize,
    /// One measurement per size.
    pub results: Vec<MeasurementResult>,
}

/// Runs a [`Benchmark`] for each problem size in turn.
#[derive(Debug)]
pub struct Sweep<C = MonotonicClock> {
    sizes: Vec<usize>,
    iteration_count: usize,
    clock: C,
}

impl Sweep {
    /// Create a sweep on the system monotonic clock.
    pub fn new(sizes: Vec<usize>, iteration_count: usize) -> Self {
        Self {
            sizes,
            iteration_count,
            clock: MonotonicClock,
        }
    }
}

impl<C: Clock> Sweep<C> {
    /// Replace the clock.
    pub fn with_clock<D: Clock>(self, clock: D) -> Sweep<D> {
        Sweep {
            sizes: self.sizes,
            iteration_count: self.iteration_count,
            clock,
        }
    }

    /// Check every size and the iteration count before anything runs.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidConfiguration`] for an empty size
    /// list, a zero size, or a zero iteration count.
    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.sizes.is_empty() {
            return Err(BenchmarkError::invalid(
                "sweep_sizes",
                "at least one size is required",
            ));
        }
        for (i, &size) in self.sizes.iter().enumerate() {
            BenchmarkConfig {
                problem_size: size,
                iteration_count: self.iteration_count,
            }
            .validate()
            .map_err(|e| match e {
                BenchmarkError::InvalidConfiguration { field, message } => {
                    let field = if field == "problem_size" {
                        format!("sweep_sizes[{}]", i)
                    } else {
                        field
                    };
                    BenchmarkError::InvalidConfiguration { field, message }
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Run every size with the thread-local generator.
    ///
    /// # Errors
    ///
    /// See [`Sweep::validate`].
    pub fn run(&self) -> BenchmarkResult<SweepResult> {
        self.run_with_rng(&mut rand::rng())
    }

    /// Run every size, drawing array-form inputs from `rng`.
    ///
    /// # Errors
    ///
    /// See [`Sweep::validate`].
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> BenchmarkResult<SweepResult> {
        self.validate()?;

        let mut results = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            let config = BenchmarkConfig::new(size).with_iterations(self.iteration_count);
            let result = Benchmark::new(config)
                .with_clock(&self.clock)
                .run_with_rng(&mut *rng)?;
            debug!("{}", result.summary());
            results.push(result);
        }

        info!(
            sizes = self.sizes.len(),
            iteration_count = self.iteration_count,
            "Sweep complete"
        );
        Ok(SweepResult {
            iteration_count: self.iteration_count,
            results,
        })
    }
}
