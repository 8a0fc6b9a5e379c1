//! Result rendering.
//!
//! Produces the fixed-width comparison table for a single run, a per-size
//! table for sweeps, and a JSON document for CI integration.

use serde::Serialize;

use super::benchmark::{MeasurementResult, Speedup};
use super::sweep::SweepResult;

/// Row label for the generic-form workload.
pub const GENERIC_FORM_LABEL: &str = "Python";
/// Row label for the array-form workload.
pub const ARRAY_FORM_LABEL: &str = "NumPy";

const NAME_WIDTH: usize = 15;
const COLUMN_WIDTH: usize = 10;
const RULE_WIDTH: usize = 40;
const SWEEP_RULE_WIDTH: usize = 60;

fn speedup_cell(speedup: &Speedup) -> String {
    format!("{:.2}", speedup)
}

/// Render a single measurement as the three-column comparison table.
///
/// The generic-form row is the baseline and always shows `1.00`.
pub fn render_table(result: &MeasurementResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<nw$} | {:<cw$} | {:<cw$}\n",
        "Implementation",
        "Time (s)",
        "Speedup",
        nw = NAME_WIDTH,
        cw = COLUMN_WIDTH
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<nw$} | {:<cw$.6} | {:<cw$}\n",
        GENERIC_FORM_LABEL,
        result.generic_form_time,
        "1.00",
        nw = NAME_WIDTH,
        cw = COLUMN_WIDTH
    ));
    out.push_str(&format!(
        "{:<nw$} | {:<cw$.6} | {:<cw$}\n",
        ARRAY_FORM_LABEL,
        result.array_form_time,
        speedup_cell(&result.speedup),
        nw = NAME_WIDTH,
        cw = COLUMN_WIDTH
    ));
    out
}

/// Render a sweep as one row per problem size.
pub fn render_sweep_table(sweep: &SweepResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>10} | {:>16} | {:>16} | {:>10}\n",
        "Size", "Generic Time (s)", "Array Time (s)", "Speedup"
    ));
    out.push_str(&"-".repeat(SWEEP_RULE_WIDTH));
    out.push('\n');
    for r in &sweep.results {
        out.push_str(&format!(
            "{:>10} | {:>16.6e} | {:>16.6e} | {:>10}\n",
            r.problem_size,
            r.generic_form_time,
            r.array_form_time,
            speedup_cell(&r.speedup)
        ));
    }
    out
}

/// Machine-readable report.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Suite name.
    pub suite_name: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    /// Iteration count shared by every measurement.
    pub iteration_count: usize,
    /// Measurements in run order.
    pub measurements: Vec<MeasurementResult>,
}

impl JsonReport {
    /// Create an empty report stamped with the current time.
    pub fn new(suite_name: &str, iteration_count: usize) -> Self {
        Self {
            suite_name: suite_name.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            iteration_count,
            measurements: Vec::new(),
        }
    }

    /// Report holding one measurement.
    pub fn from_measurement(suite_name: &str, result: MeasurementResult) -> Self {
        let mut report = Self::new(suite_name, result.iteration_count);
        report.add(result);
        report
    }

    /// Report holding every measurement of a sweep.
    pub fn from_sweep(suite_name: &str, sweep: SweepResult) -> Self {
        let mut report = Self::new(suite_name, sweep.iteration_count);
        report.measurements = sweep.results;
        report
    }

    /// Append a measurement.
    pub fn add(&mut self, m: MeasurementResult) {
        self.measurements.push(m);
    }

    /// Serialize the report to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
