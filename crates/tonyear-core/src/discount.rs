//! Geometric discounting of trajectories.

use crate::{FloatValue, Trajectory};

/// Discount a trajectory at a constant per-year rate.
///
/// $$ y'_i = \frac{y_i}{(1 + r)^i} $$
///
/// A rate of zero leaves the trajectory unchanged. The sign of `rate` is not checked here;
/// callers that need a non-negative rate validate it themselves.
pub fn discount(rate: FloatValue, trajectory: &[FloatValue]) -> Trajectory {
    let factor = 1.0 + rate;
    trajectory
        .iter()
        .enumerate()
        .map(|(i, x)| x / factor.powf(i as FloatValue))
        .collect()
}
