//! # elementwise-bench
//!
//! A micro-benchmark comparing in-place element-wise addition over two
//! representations of the same data:
//!
//! - a growable sequence of individually boxed integers, walked one element
//!   at a time
//! - a contiguous fixed-width numeric array, updated with one whole-array
//!   operation
//!
//! and reporting the speedup of the array over the boxed sequence.
//!
//! ## Layout
//!
//! - [`perf`]: the runner, input workloads, sweeps and report rendering
//! - [`config`]: TOML configuration with validation
//! - [`logging`]: tracing subscriber setup
//! - [`app`]: glue that turns a configuration into rendered output

pub mod app;
pub mod config;
pub mod logging;
pub mod perf;
