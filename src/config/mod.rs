//! # Configuration
//!
//! TOML-based run configuration: benchmark parameters, logging and output.
//! Every section is optional and falls back to the reference run.
//!
//! ## Example Configuration
//!
//! ```toml
//! [benchmark]
//! problem_size = 6400000
//! iteration_count = 100
//! seed = 42
//! sweep_sizes = [1024, 65536, 1048576]
//!
//! [logging]
//! level = "info"
//! format = "compact"
//!
//! [output]
//! format = "json"
//! ```

mod error;
mod loader;
mod types;
mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use types::{
    BenchConfig, BenchmarkSection, LogFormat, LogLevel, LoggingConfig, OutputConfig,
    OutputFormat,
};
pub use validation::{
    BasicValidator, ValidationError, ValidationResult, ValidationSeverity, Validator,
};
