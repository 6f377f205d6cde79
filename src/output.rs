//! JSON files for results, curves and baselines.
//!
//! Files are plain serde_json documents with no versioning.

use crate::errors::{RunError, RunResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tonyear_core::{AccountingResult, ImpulseResponseCurve, Trajectory};
use tracing::info;

/// Write any serializable value as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> RunResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| RunError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, format!("{}\n", json)).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Wrote JSON output");
    Ok(())
}

/// Read any value written by [`write_json`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> RunResult<T> {
    let contents = fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| RunError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an impulse-response curve with its parameter set name.
pub fn write_curve_json(curve: &ImpulseResponseCurve, path: &Path) -> RunResult<()> {
    write_json(curve, path)
}

/// Read an accounting result previously written by [`write_json`].
pub fn read_result(path: &Path) -> RunResult<AccountingResult> {
    read_json(path)
}

/// Read a baseline stored as a JSON array of numbers.
pub fn read_trajectory(path: &Path) -> RunResult<Trajectory> {
    read_json(path)
}
