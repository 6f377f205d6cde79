//! Atmospheric impulse-response curves
//!
//! Generates the fraction of a unit CO2 pulse still resident in the atmosphere for each
//! integer year from 0 to 1000. Downstream users index the curve by year, so the range is
//! fixed rather than configurable.
//!
//! None of the accounting methods call this directly. It is exposed for callers that want an
//! explicit decay curve, most commonly as the baseline trajectory of an accounting run.

use crate::errors::TonYearResult;
use crate::parameters::IrfCurve;
use crate::{FloatValue, Trajectory};
use serde::Serialize;

/// Number of points in a generated curve (years 0 to 1000 inclusive)
pub const IRF_LENGTH: usize = 1001;

/// Airborne fraction of a unit pulse for years `0..IRF_LENGTH`.
///
/// Only produced by [`ImpulseResponseCurve::generate`], so it always holds `IRF_LENGTH` values.
/// It can be written out but not read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpulseResponseCurve {
    curve: IrfCurve,
    values: Vec<FloatValue>,
}

impl ImpulseResponseCurve {
    /// Evaluate the parameter set of `curve` at every integer year.
    pub fn generate(curve: IrfCurve) -> Self {
        let params = curve.parameters();
        let values = (0..IRF_LENGTH)
            .map(|t| params.airborne_fraction(t as FloatValue))
            .collect();
        Self { curve, values }
    }

    pub fn curve(&self) -> IrfCurve {
        self.curve
    }

    pub fn values(&self) -> &[FloatValue] {
        &self.values
    }

    /// Airborne fraction at `year`, or `None` past year 1000
    pub fn at(&self, year: usize) -> Option<FloatValue> {
        self.values.get(year).copied()
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.values
    }
}

impl IrfCurve {
    pub fn generate(&self) -> ImpulseResponseCurve {
        ImpulseResponseCurve::generate(*self)
    }
}

/// Generate the impulse-response curve for a named parameter set.
///
/// Valid names are `joos_2013`, `ipcc_2007` and `ipcc_2000`. Any other name is an
/// [`InvalidArgument`](crate::errors::TonYearError::InvalidArgument) error.
pub fn generate_irf(curve_name: &str) -> TonYearResult<ImpulseResponseCurve> {
    let curve: IrfCurve = curve_name.parse()?;
    Ok(ImpulseResponseCurve::generate(curve))
}
