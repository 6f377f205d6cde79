//! Run configuration
//!
//! A run is described by a TOML document:
//!
//! ```toml
//! method = "lashof"
//! time_horizon = 100
//! delay = 40
//! discount_rate = 0.02
//!
//! [baseline]
//! curve = "joos_2013"
//! ```
//!
//! The baseline is either a named impulse-response curve or an explicit list of `values`.
//! Every setting is optional in the file so that command-line flags can fill the gaps.

use crate::errors::{RunError, RunResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tonyear_core::{compute, generate_irf, AccountingResult, FloatValue, Trajectory};
use tracing::info;

/// Where the baseline trajectory comes from
///
/// In TOML this is a `[baseline]` table holding exactly one of `curve` or `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BaselineTable", into = "BaselineTable")]
pub enum BaselineSource {
    /// Impulse-response curve generated from a published parameter set
    Curve { curve: String },
    /// Explicit trajectory, one value per year starting at year 0
    Values { values: Vec<FloatValue> },
}

/// Serialized form of [`BaselineSource`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BaselineTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    curve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<Vec<FloatValue>>,
}

impl TryFrom<BaselineTable> for BaselineSource {
    type Error = String;

    fn try_from(table: BaselineTable) -> Result<Self, Self::Error> {
        match (table.curve, table.values) {
            (Some(curve), None) => Ok(BaselineSource::Curve { curve }),
            (None, Some(values)) => Ok(BaselineSource::Values { values }),
            (Some(_), Some(_)) => {
                Err("baseline must set either `curve` or `values`, not both".to_string())
            }
            (None, None) => Err("baseline must set one of `curve` or `values`".to_string()),
        }
    }
}

impl From<BaselineSource> for BaselineTable {
    fn from(source: BaselineSource) -> Self {
        match source {
            BaselineSource::Curve { curve } => BaselineTable {
                curve: Some(curve),
                values: None,
            },
            BaselineSource::Values { values } => BaselineTable {
                curve: None,
                values: Some(values),
            },
        }
    }
}

impl BaselineSource {
    pub fn resolve(&self) -> RunResult<Trajectory> {
        match self {
            BaselineSource::Curve { curve } => Ok(generate_irf(curve)?.into_trajectory()),
            BaselineSource::Values { values } => Ok(values.clone()),
        }
    }
}

/// Settings of a single accounting run.
///
/// Signed integers are kept for the horizon and delay so that out-of-range values reach the
/// engine's validation and are reported with the offending parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub method: Option<String>,
    pub time_horizon: Option<i64>,
    pub delay: Option<i64>,
    /// Defaults to no discounting
    pub discount_rate: Option<FloatValue>,
    pub baseline: Option<BaselineSource>,
}

impl RunConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &Path) -> RunResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| RunError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| RunError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Combine with `overrides`, whose settings take precedence.
    pub fn merge(self, overrides: RunConfig) -> RunConfig {
        RunConfig {
            method: overrides.method.or(self.method),
            time_horizon: overrides.time_horizon.or(self.time_horizon),
            delay: overrides.delay.or(self.delay),
            discount_rate: overrides.discount_rate.or(self.discount_rate),
            baseline: overrides.baseline.or(self.baseline),
        }
    }

    /// Resolve the baseline and run the configured accounting method.
    pub fn run(&self) -> RunResult<AccountingResult> {
        let method = self
            .method
            .as_deref()
            .ok_or(RunError::MissingSetting("method"))?;
        let time_horizon = self
            .time_horizon
            .ok_or(RunError::MissingSetting("time_horizon"))?;
        let delay = self.delay.ok_or(RunError::MissingSetting("delay"))?;
        let discount_rate = self.discount_rate.unwrap_or(0.0);
        let baseline = self
            .baseline
            .as_ref()
            .ok_or(RunError::MissingSetting("baseline"))?
            .resolve()?;

        info!(
            method,
            time_horizon,
            delay,
            discount_rate,
            baseline_len = baseline.len(),
            "Running ton-year accounting"
        );
        Ok(compute(method, &baseline, time_horizon, delay, discount_rate)?)
    }
}
