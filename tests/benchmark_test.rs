//! Integration tests for the benchmark runner, reporting and configuration.

use elementwise_bench::app::{self, AppError};
use elementwise_bench::config::{BasicValidator, ConfigError, ConfigLoader, OutputFormat};
use elementwise_bench::perf::{
    render_table, run, ArrayPair, Benchmark, BenchmarkConfig, BenchmarkError, BoxedPair, Clock,
    MeasurementResult, Speedup, Sweep,
};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tempfile::tempdir;

/// A clock that never advances.
#[derive(Debug)]
struct StoppedClock(Instant);

impl Clock for StoppedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

#[test]
fn test_end_to_end_small_run() {
    let result = run(1000, 5).unwrap();

    assert!(result.generic_form_time >= 0.0);
    assert!(result.array_form_time >= 0.0);
    match result.speedup {
        Speedup::Ratio(r) => assert!(r.is_finite() && r >= 0.0),
        Speedup::Undefined => assert_eq!(result.array_form_time, 0.0),
    }
}

#[test]
fn test_zero_parameters_fail_fast() {
    for (size, iterations) in [(0, 5), (1000, 0), (0, 0)] {
        let err = run(size, iterations).unwrap_err();
        assert!(
            matches!(err, BenchmarkError::InvalidConfiguration { .. }),
            "run({}, {}) returned {:?}",
            size,
            iterations,
            err
        );
    }
}

#[test]
fn test_generic_inputs_identical_across_calls() {
    let first = BoxedPair::sequential(1000);
    let second = BoxedPair::sequential(1000);
    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);
    assert!(first.lhs.iter().enumerate().all(|(i, v)| **v == i as i64));
}

#[test]
fn test_stopped_clock_reports_undefined() {
    let result = Benchmark::new(BenchmarkConfig::new(100).with_iterations(2))
        .with_clock(StoppedClock(Instant::now()))
        .run_with_rng(&mut StdRng::seed_from_u64(0))
        .unwrap();

    assert_eq!(result.speedup, Speedup::Undefined);
    assert_eq!(result.ratio(), Err(BenchmarkError::DegenerateMeasurement));
    assert!(render_table(&result).contains("undefined"));
}

#[test]
fn test_supplied_arrays() {
    let arrays = ArrayPair::from_arrays(Array1::from_elem(50, 3), Array1::from_elem(50, 4)).unwrap();
    let result = Benchmark::new(BenchmarkConfig::new(50).with_iterations(3))
        .run_with_arrays(arrays)
        .unwrap();
    assert_eq!(result.problem_size, 50);
    assert_eq!(result.iteration_count, 3);
}

#[test]
fn test_reference_table_rows() {
    let result = MeasurementResult {
        problem_size: 6_400_000,
        iteration_count: 100,
        generic_form_time: 0.123456,
        array_form_time: 0.001234,
        speedup: Speedup::Ratio(100.05),
    };
    let table = render_table(&result);
    let rows: Vec<&str> = table.lines().collect();

    assert_eq!(rows[3], "NumPy           | 0.001234   | 100.05    ");
    assert_eq!(rows[2].split('|').nth(2).unwrap().trim(), "1.00");
}

#[test]
fn test_sweep_with_stopped_clock() {
    let sweep = Sweep::new(vec![10, 20], 1)
        .with_clock(StoppedClock(Instant::now()))
        .run()
        .unwrap();
    assert_eq!(sweep.results.len(), 2);
    assert!(sweep.results.iter().all(|r| r.speedup.is_undefined()));
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    std::fs::write(
        &path,
        r#"
        [benchmark]
        problem_size = 256
        iteration_count = 2
        seed = 7

        [output]
        format = "json"
    "#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_validator(BasicValidator::new())
        .load(&path)
        .unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);

    let out = app::execute(&config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["iteration_count"], 2);
    assert_eq!(value["measurements"][0]["problem_size"], 256);
}

#[test]
fn test_config_file_rejects_negative_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    std::fs::write(&path, "[benchmark]\nproblem_size = -10\n").unwrap();

    let err = ConfigLoader::new()
        .with_validator(BasicValidator::new())
        .load(&path)
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(AppError::from(err).is_invalid_configuration());
}
