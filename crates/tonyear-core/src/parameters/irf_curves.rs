//! Impulse-response parameter sets
//!
//! Each set describes the airborne fraction of a CO2 pulse as a constant term plus a sum of
//! decaying exponentials:
//!
//! $$IRF(t) = a_0 + \sum_{i=1}^{n-1} a_i \times e^{-t/\tau_i}$$
//!
//! The constant term $a_0$ is the fraction that stays in the atmosphere indefinitely. Its
//! timescale is recorded as zero and is never evaluated through the exponential.
//!
//! # References
//!
//! - `joos_2013`: Joos et al. (2013), Table 5
//! - `ipcc_2007`: IPCC AR4 WG1 (2007), page 213
//! - `ipcc_2000`: IPCC Special Report (2000), chapter 2, footnote 4

use crate::errors::{TonYearError, TonYearResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable table of impulse-response weights and decay timescales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Name used to select the set
    pub name: &'static str,
    /// Fraction of the pulse attributed to each term (dimensionless).
    /// The first entry is the permanent fraction.
    pub weights: &'static [FloatValue],
    /// e-folding time of each term
    /// unit: yr
    pub decay_times: &'static [FloatValue],
}

/// Joos et al. (2013) multi-model mean response.
pub const JOOS_2013: ParameterSet = ParameterSet {
    name: "joos_2013",
    weights: &[0.2173, 0.2240, 0.2824, 0.2763],
    decay_times: &[0.0, 394.4, 36.54, 4.304],
};

/// IPCC AR4 (2007) Bern2.5CC response.
pub const IPCC_2007: ParameterSet = ParameterSet {
    name: "ipcc_2007",
    weights: &[0.217, 0.259, 0.338, 0.186],
    decay_times: &[0.0, 172.9, 18.51, 1.186],
};

/// IPCC Special Report (2000) response.
pub const IPCC_2000: ParameterSet = ParameterSet {
    name: "ipcc_2000",
    weights: &[0.175602, 0.137467, 0.18576, 0.242302, 0.258868],
    decay_times: &[0.0, 421.093, 70.5965, 21.42165, 3.41537],
};

impl ParameterSet {
    /// Fraction of a unit pulse remaining in the atmosphere after `t` years.
    pub fn airborne_fraction(&self, t: FloatValue) -> FloatValue {
        let permanent = self.weights[0];
        let decaying: FloatValue = self.weights[1..]
            .iter()
            .zip(&self.decay_times[1..])
            .map(|(a, tau)| a * (-t / tau).exp())
            .sum();
        permanent + decaying
    }

    /// Sum of all weights, i.e. the airborne fraction at the time of emission.
    pub fn total_weight(&self) -> FloatValue {
        self.weights.iter().sum()
    }
}

/// Selector for one of the published impulse-response parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrfCurve {
    #[serde(rename = "joos_2013")]
    Joos2013,
    #[serde(rename = "ipcc_2007")]
    Ipcc2007,
    #[serde(rename = "ipcc_2000")]
    Ipcc2000,
}

impl IrfCurve {
    pub const ALL: [IrfCurve; 3] = [IrfCurve::Joos2013, IrfCurve::Ipcc2007, IrfCurve::Ipcc2000];

    pub fn parameters(&self) -> &'static ParameterSet {
        match self {
            IrfCurve::Joos2013 => &JOOS_2013,
            IrfCurve::Ipcc2007 => &IPCC_2007,
            IrfCurve::Ipcc2000 => &IPCC_2000,
        }
    }

    pub fn name(&self) -> &'static str {
        self.parameters().name
    }
}

impl fmt::Display for IrfCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IrfCurve {
    type Err = TonYearError;

    /// Names must match exactly, there is no case folding.
    fn from_str(s: &str) -> TonYearResult<Self> {
        IrfCurve::ALL
            .into_iter()
            .find(|curve| curve.name() == s)
            .ok_or_else(|| {
                let options: Vec<String> =
                    IrfCurve::ALL.iter().map(|c| format!("'{}'", c)).collect();
                TonYearError::invalid_argument(
                    "curve",
                    format!(
                        "No IRF parameters by the name '{}'. Options include: {}",
                        s,
                        options.join(", ")
                    ),
                )
            })
    }
}
