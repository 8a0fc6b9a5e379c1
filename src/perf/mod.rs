//! # Element-wise Add Benchmark
//!
//! Times in-place element-wise addition over two representations of the same
//! problem and reports the speedup of one over the other.
//!
//! ## Representations
//!
//! - **Generic form**: `Vec<Box<i64>>`, every element its own allocation,
//!   updated one element at a time
//! - **Array form**: contiguous `ndarray::Array1<i32>`, updated with one
//!   whole-array operation
//!
//! ## Example
//!
//! ```rust,no_run
//! use elementwise_bench::perf::{render_table, Benchmark, BenchmarkConfig};
//!
//! let config = BenchmarkConfig::new(1_000_000).with_iterations(20);
//! let result = Benchmark::new(config).run()?;
//! print!("{}", render_table(&result));
//! # Ok::<(), elementwise_bench::perf::BenchmarkError>(())
//! ```

pub mod benchmark;
pub mod clock;
pub mod error;
pub mod report;
pub mod sweep;
pub mod workload;

pub use benchmark::{
    run, Benchmark, BenchmarkConfig, MeasurementResult, Speedup, DEFAULT_ITERATION_COUNT,
    REFERENCE_ITERATION_COUNT, REFERENCE_PROBLEM_SIZE,
};
pub use clock::{measure, Clock, MonotonicClock};
pub use error::{BenchmarkError, BenchmarkResult};
pub use report::{render_sweep_table, render_table, JsonReport};
pub use sweep::{Sweep, SweepResult};
pub use workload::{ArrayPair, BoxedPair};
