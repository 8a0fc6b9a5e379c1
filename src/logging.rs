//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the result table or report.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

use crate::config::{LogFormat, LoggingConfig};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Build the filter for `config`, preferring `RUST_LOG`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.to_string()))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    TRACING_INIT.get_or_init(|| {
        let base = fmt::layer().with_writer(std::io::stderr).with_target(false);
        let layer = match config.format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.pretty().boxed(),
            LogFormat::Compact => base.compact().boxed(),
        };

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = Registry::default()
            .with(env_filter(config))
            .with(layer)
            .try_init();
    });
}
