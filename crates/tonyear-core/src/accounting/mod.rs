//! Ton-year accounting engine
//!
//! Combines a baseline atmospheric trajectory with a storage period (delay) and expresses the
//! benefit of that delay in ton-years, and as the number of delayed units that are equivalent
//! to one unit of baseline emission.
//!
//! # Algorithm
//!
//! 1. Truncate the baseline to years `0..=time_horizon`
//! 2. Discount it and integrate with the trapezoidal rule to get the baseline atmospheric impact
//! 3. Let the [`AccountingMethod`] build and discount its scenario and integrate the benefit
//! 4. $N = \text{impact} / \text{benefit}$
//!
//! A zero benefit leaves $N$ undefined. It is reported as `None` rather than an error so the
//! rest of the result stays available.

mod method;
mod parameters;

pub use method::AccountingMethod;
pub use parameters::{AccountingParameters, MAX_SCENARIO_LEN};

use crate::discount::discount;
use crate::errors::TonYearResult;
use crate::utils::integrate::trapezoid;
use crate::{FloatValue, Trajectory};
use parameters::{validate_baseline_len, validate_delay, validate_time_horizon};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Output of a ton-year accounting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountingResult {
    pub parameters: AccountingParameters,
    /// Discounted baseline over years `0..=time_horizon`
    pub baseline: Trajectory,
    /// Discounted scenario built by the method
    pub scenario: Trajectory,
    /// Integral of the discounted baseline
    /// unit: ton-years
    pub baseline_atm_impact: FloatValue,
    /// Benefit of the delay under the chosen method
    /// unit: ton-years
    pub benefit: FloatValue,
    /// `baseline_atm_impact / benefit`, or `None` when the benefit is zero
    pub num_for_equivalence: Option<FloatValue>,
}

impl AccountingResult {
    /// Labelled trajectories for plotting
    pub fn series(&self) -> [(&'static str, &[FloatValue]); 2] {
        [
            ("baseline", self.baseline.as_slice()),
            ("scenario", self.scenario.as_slice()),
        ]
    }
}

/// Run a ton-year accounting method selected by name.
///
/// Checks, in order, that `delay` is non-negative, `time_horizon` is positive, the baseline
/// covers years `0..=time_horizon`, `method` is one of `mc`, `ipcc` or `lashof`, and the
/// discount rate is finite and above -1. The `mc` and `lashof` scenarios grow with the delay
/// and must fit within [`MAX_SCENARIO_LEN`] values. Nothing is computed unless every check
/// passes.
///
/// # Example
/// ```
/// use tonyear_core::compute;
///
/// let baseline = vec![1.0; 101];
/// let result = compute("mc", &baseline, 100, 10, 0.0).unwrap();
/// assert_eq!(result.benefit, 10.0);
/// assert_eq!(result.num_for_equivalence, Some(10.0));
/// ```
pub fn compute(
    method: &str,
    baseline: &[FloatValue],
    time_horizon: i64,
    delay: i64,
    discount_rate: FloatValue,
) -> TonYearResult<AccountingResult> {
    validate_delay(delay)?;
    validate_baseline_len(baseline.len(), validate_time_horizon(time_horizon)?)?;
    let method: AccountingMethod = method.parse()?;

    let parameters = AccountingParameters::new(method, time_horizon, delay, discount_rate)?;
    Ok(run(parameters, baseline))
}

/// Run a ton-year accounting method with already validated parameters.
///
/// Fails if `baseline` does not cover years `0..=time_horizon`.
pub fn compute_with(
    parameters: &AccountingParameters,
    baseline: &[FloatValue],
) -> TonYearResult<AccountingResult> {
    validate_baseline_len(baseline.len(), parameters.time_horizon())?;
    Ok(run(*parameters, baseline))
}

fn run(parameters: AccountingParameters, baseline: &[FloatValue]) -> AccountingResult {
    let method = parameters.method();
    let time_horizon = parameters.time_horizon();
    let delay = parameters.delay();
    let discount_rate = parameters.discount_rate();

    let baseline = &baseline[..=time_horizon];
    let baseline_discounted = discount(discount_rate, baseline);
    let baseline_atm_impact = trapezoid(&baseline_discounted);

    let outcome = method.evaluate(
        baseline,
        baseline_atm_impact,
        time_horizon,
        delay,
        discount_rate,
    );

    let num_for_equivalence = if outcome.benefit == 0.0 {
        warn!(
            method = %method,
            time_horizon,
            delay,
            "Benefit is zero; number needed for equivalence is undefined"
        );
        None
    } else {
        Some(baseline_atm_impact / outcome.benefit)
    };

    debug!(
        method = %method,
        time_horizon,
        delay,
        discount_rate,
        baseline_atm_impact,
        benefit = outcome.benefit,
        "Computed ton-year benefit"
    );

    AccountingResult {
        parameters,
        baseline: baseline_discounted,
        scenario: outcome.scenario,
        baseline_atm_impact,
        benefit: outcome.benefit,
        num_for_equivalence,
    }
}
