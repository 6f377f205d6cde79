//! The three ton-year accounting conventions.

use crate::discount::discount;
use crate::errors::{TonYearError, TonYearResult};
use crate::utils::integrate::{trapezoid, trapezoid_from};
use crate::{FloatValue, Trajectory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ton-year accounting method.
///
/// Each method builds its own scenario trajectory from the (truncated, undiscounted)
/// baseline and integrates it into a benefit in ton-years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountingMethod {
    /// Moura-Costa: exposure avoided while one unit is held out of the atmosphere.
    #[serde(rename = "mc")]
    MouraCosta,
    /// IPCC: the baseline shifted later by the delay, compared with the undelayed baseline.
    #[serde(rename = "ipcc")]
    Ipcc,
    /// Lashof: the part of the delayed baseline that falls beyond the time horizon.
    #[serde(rename = "lashof")]
    Lashof,
}

/// Outcome of evaluating one method
pub(crate) struct MethodOutcome {
    /// Discounted scenario trajectory
    pub scenario: Trajectory,
    /// Benefit of the delay (ton-years)
    pub benefit: FloatValue,
}

impl AccountingMethod {
    pub const ALL: [AccountingMethod; 3] = [
        AccountingMethod::MouraCosta,
        AccountingMethod::Ipcc,
        AccountingMethod::Lashof,
    ];

    /// Short identifier used in configuration and serialized results
    pub fn id(&self) -> &'static str {
        match self {
            AccountingMethod::MouraCosta => "mc",
            AccountingMethod::Ipcc => "ipcc",
            AccountingMethod::Lashof => "lashof",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            AccountingMethod::MouraCosta => "Moura-Costa",
            AccountingMethod::Ipcc => "IPCC",
            AccountingMethod::Lashof => "Lashof",
        }
    }

    /// Length of the scenario this method builds, or `None` if it does not fit in `usize`.
    pub(crate) fn scenario_len(&self, time_horizon: usize, delay: usize) -> Option<usize> {
        let horizon_len = time_horizon.checked_add(1)?;
        match self {
            AccountingMethod::MouraCosta => Some(delay.checked_add(1)?.max(horizon_len)),
            AccountingMethod::Ipcc => Some(horizon_len),
            AccountingMethod::Lashof => delay.checked_add(horizon_len),
        }
    }

    /// Build the discounted scenario and its benefit.
    ///
    /// `baseline` must already be truncated to `time_horizon + 1` points and must not be
    /// discounted. `baseline_atm_impact` is the integral of the discounted baseline.
    pub(crate) fn evaluate(
        &self,
        baseline: &[FloatValue],
        baseline_atm_impact: FloatValue,
        time_horizon: usize,
        delay: usize,
        discount_rate: FloatValue,
    ) -> MethodOutcome {
        match self {
            AccountingMethod::MouraCosta => moura_costa(time_horizon, delay, discount_rate),
            AccountingMethod::Ipcc => ipcc(
                baseline,
                baseline_atm_impact,
                time_horizon,
                delay,
                discount_rate,
            ),
            AccountingMethod::Lashof => lashof(baseline, time_horizon, delay, discount_rate),
        }
    }
}

/// One unit held out of the atmosphere for years `0..=delay`, then released.
///
/// The benefit only integrates the held interval. When the delay reaches past the horizon the
/// scenario is simply the held interval with no trailing zeros.
fn moura_costa(time_horizon: usize, delay: usize, discount_rate: FloatValue) -> MethodOutcome {
    let held = delay + 1;
    let mut scenario = vec![-1.0; held];
    scenario.resize(held + time_horizon.saturating_sub(delay), 0.0);

    let scenario = discount(discount_rate, &scenario);
    let benefit = -trapezoid(&scenario[..held]);
    MethodOutcome { scenario, benefit }
}

/// Baseline shifted later by `delay` years and cut at the horizon.
///
/// Only the part of the shifted baseline that lands inside the horizon is built, so the
/// scenario stays `time_horizon + 1` long however large the delay.
fn ipcc(
    baseline: &[FloatValue],
    baseline_atm_impact: FloatValue,
    time_horizon: usize,
    delay: usize,
    discount_rate: FloatValue,
) -> MethodOutcome {
    let len = time_horizon + 1;
    let lead = delay.min(len);
    let mut scenario = vec![0.0; lead];
    scenario.extend_from_slice(&baseline[..len - lead]);

    let scenario = discount(discount_rate, &scenario);
    let benefit = baseline_atm_impact - trapezoid_from(&scenario, delay);
    MethodOutcome { scenario, benefit }
}

/// Baseline shifted later by `delay` years, kept in full.
///
/// The benefit integrates from the horizon onwards, or from the delay when the delay pushes
/// past the horizon.
fn lashof(
    baseline: &[FloatValue],
    time_horizon: usize,
    delay: usize,
    discount_rate: FloatValue,
) -> MethodOutcome {
    let scenario = discount(discount_rate, &delayed(baseline, delay));

    let start = if time_horizon < delay {
        delay
    } else {
        time_horizon
    };
    let benefit = trapezoid_from(&scenario, start);
    MethodOutcome { scenario, benefit }
}

/// `delay` zeros followed by the baseline
fn delayed(baseline: &[FloatValue], delay: usize) -> Trajectory {
    let mut shifted = vec![0.0; delay];
    shifted.extend_from_slice(baseline);
    shifted
}

impl fmt::Display for AccountingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AccountingMethod {
    type Err = TonYearError;

    fn from_str(s: &str) -> TonYearResult<Self> {
        AccountingMethod::ALL
            .into_iter()
            .find(|method| method.id() == s)
            .ok_or_else(|| {
                TonYearError::invalid_argument(
                    "method",
                    format!(
                        "No ton-year accounting method called '{}'. Options include: \
                         Moura-Costa ('mc'), Lashof ('lashof'), and IPCC ('ipcc').",
                        s
                    ),
                )
            })
    }
}
