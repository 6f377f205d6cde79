//! Validated inputs of an accounting run.

use super::method::AccountingMethod;
use crate::errors::{TonYearError, TonYearResult};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Longest scenario a run may build (about 16.8 million years of yearly values).
///
/// The Moura-Costa and Lashof scenarios grow with the delay, so the delay is bounded by this
/// limit for those methods. The IPCC scenario never exceeds the horizon and is not affected.
pub const MAX_SCENARIO_LEN: usize = 1 << 24;

/// Inputs of a ton-year accounting run.
///
/// Values can only be created through [`AccountingParameters::new`], including when
/// deserialized, so every value describes a runnable configuration. Whether a particular
/// baseline is long enough is checked separately by [`compute_with`](super::compute_with).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAccountingParameters", into = "RawAccountingParameters")]
pub struct AccountingParameters {
    method: AccountingMethod,
    time_horizon: usize,
    delay: usize,
    discount_rate: FloatValue,
}

/// Unchecked form used on the serde boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawAccountingParameters {
    method: AccountingMethod,
    time_horizon: i64,
    delay: i64,
    discount_rate: FloatValue,
}

impl AccountingParameters {
    pub fn new(
        method: AccountingMethod,
        time_horizon: i64,
        delay: i64,
        discount_rate: FloatValue,
    ) -> TonYearResult<Self> {
        let delay = validate_delay(delay)?;
        let time_horizon = validate_time_horizon(time_horizon)?;
        let discount_rate = validate_discount_rate(discount_rate)?;
        validate_scenario_len(method, time_horizon, delay)?;
        Ok(Self {
            method,
            time_horizon,
            delay,
            discount_rate,
        })
    }

    pub fn method(&self) -> AccountingMethod {
        self.method
    }

    /// Number of years analysed after the start of the baseline
    /// unit: yr
    pub fn time_horizon(&self) -> usize {
        self.time_horizon
    }

    /// Storage period, or delay applied to the emission
    /// unit: yr
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Per-year discount rate (0.03 is 3 %)
    pub fn discount_rate(&self) -> FloatValue {
        self.discount_rate
    }
}

impl TryFrom<RawAccountingParameters> for AccountingParameters {
    type Error = TonYearError;

    fn try_from(raw: RawAccountingParameters) -> TonYearResult<Self> {
        AccountingParameters::new(raw.method, raw.time_horizon, raw.delay, raw.discount_rate)
    }
}

impl From<AccountingParameters> for RawAccountingParameters {
    fn from(params: AccountingParameters) -> Self {
        // Both values were validated from an i64
        RawAccountingParameters {
            method: params.method,
            time_horizon: params.time_horizon as i64,
            delay: params.delay as i64,
            discount_rate: params.discount_rate,
        }
    }
}

pub(crate) fn validate_delay(delay: i64) -> TonYearResult<usize> {
    usize::try_from(delay)
        .map_err(|_| TonYearError::invalid_argument("delay", "Delay cannot be negative."))
}

pub(crate) fn validate_time_horizon(time_horizon: i64) -> TonYearResult<usize> {
    match usize::try_from(time_horizon) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(TonYearError::invalid_argument(
            "time_horizon",
            "Time horizon must be greater than zero.",
        )),
    }
}

/// The baseline has to cover every year in `0..=time_horizon`.
pub(crate) fn validate_baseline_len(baseline_len: usize, time_horizon: usize) -> TonYearResult<()> {
    if baseline_len <= time_horizon {
        return Err(TonYearError::invalid_argument(
            "baseline",
            format!(
                "Method cannot analyze over a time horizon of {} years with a baseline of {} \
                 values; values for years 0 to {} are required.",
                time_horizon, baseline_len, time_horizon
            ),
        ));
    }
    Ok(())
}

/// Rates at or below -100 % would flip the sign of (or divide by zero in) the discount factor.
pub(crate) fn validate_discount_rate(discount_rate: FloatValue) -> TonYearResult<FloatValue> {
    if !discount_rate.is_finite() || discount_rate <= -1.0 {
        return Err(TonYearError::invalid_argument(
            "discount_rate",
            format!(
                "Discount rate must be a finite number greater than -1, got {}.",
                discount_rate
            ),
        ));
    }
    Ok(discount_rate)
}

pub(crate) fn validate_scenario_len(
    method: AccountingMethod,
    time_horizon: usize,
    delay: usize,
) -> TonYearResult<()> {
    match method.scenario_len(time_horizon, delay) {
        Some(len) if len <= MAX_SCENARIO_LEN => Ok(()),
        _ => Err(TonYearError::invalid_argument(
            "delay",
            format!(
                "A delay of {} years with a {} year horizon exceeds the {} method's limit of {} \
                 scenario values.",
                delay,
                time_horizon,
                method.label(),
                MAX_SCENARIO_LEN
            ),
        )),
    }
}
