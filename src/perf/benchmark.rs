//! Benchmark runner.
//!
//! Times in-place element-wise addition over the two representations and
//! derives the speedup of the array form over the generic form.

use std::fmt;
use std::hint::black_box;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::clock::{measure, Clock, MonotonicClock};
use super::error::{BenchmarkError, BenchmarkResult};
use super::workload::{ArrayPair, BoxedPair};

/// Iteration count used when only a problem size is given.
pub const DEFAULT_ITERATION_COUNT: usize = 10;
/// Element count of the reference run.
pub const REFERENCE_PROBLEM_SIZE: usize = 6_400_000;
/// Iteration count of the reference run.
pub const REFERENCE_ITERATION_COUNT: usize = 100;

/// Benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkConfig {
    /// Number of elements in each operand.
    pub problem_size: usize,
    /// Number of timed repetitions per representation.
    pub iteration_count: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl BenchmarkConfig {
    /// Create a configuration with the default iteration count.
    pub fn new(problem_size: usize) -> Self {
        Self {
            problem_size,
            iteration_count: DEFAULT_ITERATION_COUNT,
        }
    }

    /// The reference run: 6.4M elements, 100 iterations.
    pub fn reference() -> Self {
        Self {
            problem_size: REFERENCE_PROBLEM_SIZE,
            iteration_count: REFERENCE_ITERATION_COUNT,
        }
    }

    /// Set iteration count.
    pub fn with_iterations(mut self, iteration_count: usize) -> Self {
        self.iteration_count = iteration_count;
        self
    }

    /// Check both parameters are positive.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidConfiguration`] naming the first
    /// zero-valued parameter.
    pub fn validate(&self) -> BenchmarkResult<()> {
        if self.problem_size == 0 {
            return Err(BenchmarkError::invalid(
                "problem_size",
                "must be greater than zero",
            ));
        }
        if self.iteration_count == 0 {
            return Err(BenchmarkError::invalid(
                "iteration_count",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Speedup of the array form over the generic form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speedup {
    /// `generic_form_time / array_form_time`.
    Ratio(f64),
    /// The array-form time read zero, so there is no ratio.
    Undefined,
}

impl Speedup {
    /// Derive the speedup from two average times.
    pub fn from_times(generic_form_time: f64, array_form_time: f64) -> Self {
        if array_form_time > 0.0 {
            Self::Ratio(generic_form_time / array_form_time)
        } else {
            Self::Undefined
        }
    }

    /// The ratio, if defined.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Ratio(r) => Some(*r),
            Self::Undefined => None,
        }
    }

    /// Whether this is the degenerate marker.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(r) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, r),
                None => write!(f, "{}", r),
            },
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeasurementResult {
    /// Element count.
    pub problem_size: usize,
    /// Repetitions per representation.
    pub iteration_count: usize,
    /// Average seconds per iteration, generic form.
    pub generic_form_time: f64,
    /// Average seconds per iteration, array form.
    pub array_form_time: f64,
    /// Generic over array time.
    pub speedup: Speedup,
}

impl MeasurementResult {
    /// Assemble a result from two average times.
    pub fn from_times(
        config: BenchmarkConfig,
        generic_form_time: f64,
        array_form_time: f64,
    ) -> Self {
        Self {
            problem_size: config.problem_size,
            iteration_count: config.iteration_count,
            generic_form_time,
            array_form_time,
            speedup: Speedup::from_times(generic_form_time, array_form_time),
        }
    }

    /// The numeric speedup.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::DegenerateMeasurement`] when the speedup is
    /// undefined.
    pub fn ratio(&self) -> BenchmarkResult<f64> {
        self.speedup
            .value()
            .ok_or(BenchmarkError::DegenerateMeasurement)
    }

    /// Format as a summary string.
    pub fn summary(&self) -> String {
        format!(
            "size={} iterations={}: generic {:.6}s, array {:.6}s, speedup {:.2}",
            self.problem_size,
            self.iteration_count,
            self.generic_form_time,
            self.array_form_time,
            self.speedup
        )
    }
}

/// Benchmark runner.
#[derive(Debug)]
pub struct Benchmark<C = MonotonicClock> {
    /// Configuration.
    config: BenchmarkConfig,
    /// Timestamp source for both phases.
    clock: C,
}

impl Benchmark {
    /// Create a new benchmark on the system monotonic clock.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            clock: MonotonicClock,
        }
    }
}

impl<C: Clock> Benchmark<C> {
    /// Replace the clock.
    pub fn with_clock<D: Clock>(self, clock: D) -> Benchmark<D> {
        Benchmark {
            config: self.config,
            clock,
        }
    }

    /// Run with array-form inputs drawn from the thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidConfiguration`] for a zero size or
    /// iteration count.
    pub fn run(&self) -> BenchmarkResult<MeasurementResult> {
        self.run_with_rng(&mut rand::rng())
    }

    /// Run with array-form inputs drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidConfiguration`] for a zero size or
    /// iteration count.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> BenchmarkResult<MeasurementResult> {
        self.execute(|size| ArrayPair::random(size, rng))
    }

    /// Run with caller-supplied array-form inputs.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidConfiguration`] for a zero size or
    /// iteration count, or [`BenchmarkError::InputMismatch`] if `arrays`
    /// does not hold exactly `problem_size` elements.
    pub fn run_with_arrays(&self, arrays: ArrayPair) -> BenchmarkResult<MeasurementResult> {
        self.config.validate()?;
        if arrays.len() != self.config.problem_size {
            return Err(BenchmarkError::InputMismatch {
                expected: self.config.problem_size,
                actual: arrays.len(),
            });
        }
        self.execute(move |_| arrays)
    }

    fn execute<F>(&self, make_arrays: F) -> BenchmarkResult<MeasurementResult>
    where
        F: FnOnce(usize) -> ArrayPair,
    {
        self.config.validate()?;
        let BenchmarkConfig {
            problem_size,
            iteration_count,
        } = self.config;

        debug!(problem_size, iteration_count, "Timing generic form");
        let mut boxed = BoxedPair::sequential(problem_size);
        let ((), elapsed) = measure(&self.clock, || {
            for _ in 0..iteration_count {
                boxed.add_assign();
                black_box(&mut boxed);
            }
        });
        let generic_form_time = elapsed.as_secs_f64() / iteration_count as f64;
        drop(boxed);

        debug!(problem_size, iteration_count, "Timing array form");
        let mut arrays = make_arrays(problem_size);
        let ((), elapsed) = measure(&self.clock, || {
            for _ in 0..iteration_count {
                arrays.add_assign();
                black_box(&mut arrays);
            }
        });
        let array_form_time = elapsed.as_secs_f64() / iteration_count as f64;

        let result =
            MeasurementResult::from_times(self.config, generic_form_time, array_form_time);
        if result.speedup.is_undefined() {
            warn!(
                problem_size,
                "Array-form timer read zero elapsed time; speedup undefined"
            );
        }
        info!(
            problem_size,
            iteration_count,
            generic_form_time,
            array_form_time,
            speedup = %result.speedup,
            "Measurement complete"
        );
        Ok(result)
    }
}

/// Run one measurement on the system clock with random array-form inputs.
///
/// # Errors
///
/// Returns [`BenchmarkError::InvalidConfiguration`] if either parameter is zero.
pub fn run(problem_size: usize, iteration_count: usize) -> BenchmarkResult<MeasurementResult> {
    Benchmark::new(BenchmarkConfig {
        problem_size,
        iteration_count,
    })
    .run()
}
