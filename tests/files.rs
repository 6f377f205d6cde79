//! File round trips for configuration, baselines and results.

use approx::assert_relative_eq;
use std::fs;
use tempfile::tempdir;
use tonyear::config::{BaselineSource, RunConfig};
use serde_json::Value;
use tonyear::output::{read_json, read_result, read_trajectory, write_curve_json, write_json};
use tonyear::{compute, generate_irf, AccountingMethod, RunError};

#[test]
fn test_result_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.json");

    let baseline = generate_irf("ipcc_2000").unwrap().into_trajectory();
    let result = compute("ipcc", &baseline, 100, 25, 0.01).unwrap();
    write_json(&result, &path).unwrap();
    let loaded = read_result(&path).unwrap();

    assert_eq!(loaded.parameters, result.parameters);
    assert_eq!(loaded.baseline.len(), result.baseline.len());
    assert_eq!(loaded.scenario.len(), result.scenario.len());
    for (a, b) in loaded.baseline.iter().zip(&result.baseline) {
        assert_relative_eq!(*a, *b, max_relative = 1e-15);
    }
    assert_relative_eq!(
        loaded.baseline_atm_impact,
        result.baseline_atm_impact,
        max_relative = 1e-15
    );
    assert_relative_eq!(loaded.benefit, result.benefit, max_relative = 1e-15);
    assert_relative_eq!(
        loaded.num_for_equivalence.unwrap(),
        result.num_for_equivalence.unwrap(),
        max_relative = 1e-15
    );
}

#[test]
fn test_config_file_with_baseline_file() {
    let dir = tempdir().unwrap();
    let baseline_path = dir.path().join("baseline.json");
    let config_path = dir.path().join("run.toml");

    fs::write(&baseline_path, "[1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]").unwrap();
    fs::write(
        &config_path,
        "method = \"mc\"\ntime_horizon = 6\ndelay = 2\n",
    )
    .unwrap();

    let config = RunConfig::load(&config_path).unwrap().merge(RunConfig {
        baseline: Some(BaselineSource::Values {
            values: read_trajectory(&baseline_path).unwrap(),
        }),
        ..Default::default()
    });
    let result = config.run().unwrap();

    assert_eq!(result.parameters.method(), AccountingMethod::MouraCosta);
    assert_eq!(result.benefit, 2.0);
    assert_eq!(result.num_for_equivalence, Some(3.0));
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    let err = RunConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, RunError::Io { .. }));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.toml");
    fs::write(&path, "time_horizon = \"long\"\n").unwrap();
    let err = RunConfig::load(&path).unwrap_err();
    assert!(matches!(err, RunError::Config { .. }));
}

#[test]
fn test_invalid_baseline_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("baseline.json");
    fs::write(&path, "{\"values\": 3}").unwrap();
    assert!(matches!(
        read_trajectory(&path),
        Err(RunError::Json { .. })
    ));
}

#[test]
fn test_curve_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("joos_2013.json");

    let curve = generate_irf("joos_2013").unwrap();
    write_curve_json(&curve, &path).unwrap();
    let document: Value = read_json(&path).unwrap();

    assert_eq!(document["curve"], "joos_2013");
    let values = document["values"].as_array().unwrap();
    assert_eq!(values.len(), 1001);
    assert_relative_eq!(values[0].as_f64().unwrap(), curve.values()[0], max_relative = 1e-15);
}
