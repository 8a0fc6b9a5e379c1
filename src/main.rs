//! elementwise-bench binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;

use elementwise_bench::app::{self, AppError};
use elementwise_bench::config::{
    BasicValidator, BenchConfig, ConfigLoader, LogLevel, OutputFormat,
};
use elementwise_bench::logging;

/// Compare boxed-sequence and contiguous-array element-wise addition.
///
/// With no arguments, runs the reference configuration:
/// 6,400,000 elements, 100 iterations.
#[derive(Debug, Parser)]
#[command(name = "elementwise-bench", version, about, allow_negative_numbers = true)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Elements per operand.
    #[arg(short = 'n', long)]
    size: Option<i64>,

    /// Timed repetitions per representation.
    #[arg(short, long)]
    iterations: Option<i64>,

    /// Seed for the array-form random source.
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated problem sizes; enables sweep mode.
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<i64>,

    /// Output format.
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

impl Cli {
    /// Overlay command-line values onto the file configuration.
    fn apply(&self, config: &mut BenchConfig) {
        if let Some(size) = self.size {
            config.benchmark.problem_size = size;
        }
        if let Some(iterations) = self.iterations {
            config.benchmark.iteration_count = iterations;
        }
        if self.seed.is_some() {
            config.benchmark.seed = self.seed;
        }
        if !self.sweep.is_empty() {
            config.benchmark.sweep_sizes = self.sweep.clone();
        }
        if let Some(format) = self.format {
            config.output.format = match format {
                Format::Table => OutputFormat::Table,
                Format::Json => OutputFormat::Json,
            };
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

/// Build the configuration a run will use: file, then flags, then validation.
fn effective_config(cli: &Cli) -> Result<BenchConfig, AppError> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new().load(path)?,
        None => BenchConfig::default(),
    };
    cli.apply(&mut config);
    Ok(config)
}

fn run(cli: &Cli) -> Result<String, AppError> {
    let config = effective_config(cli)?;

    logging::init(&config.logging);
    debug!(?config, "Effective configuration");

    ConfigLoader::new()
        .with_validator(BasicValidator::new())
        .validate(&config)?;

    app::execute(&config)
}

/// Print the outcome and map it to the process exit status.
fn report(outcome: Result<String, AppError>) -> ExitCode {
    match outcome {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(
                invalid_configuration = e.is_invalid_configuration(),
                error = %e,
                "Run failed"
            );
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    report(run(&cli))
}
