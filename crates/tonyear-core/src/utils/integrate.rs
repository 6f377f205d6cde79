//! Numerical integration utilities.

use crate::FloatValue;

/// Integrate evenly spaced samples using the trapezoidal rule.
///
/// Samples are assumed to be one unit (year) apart:
///
/// $$ \int y \, dt \approx \sum_{i=0}^{n-2} \frac{y_i + y_{i+1}}{2} $$
///
/// A sequence with fewer than two samples spans no interval and integrates to zero.
///
/// # Example
/// ```
/// use tonyear_core::utils::integrate::trapezoid;
///
/// assert_eq!(trapezoid(&[1.0, 1.0, 1.0]), 2.0);
/// assert_eq!(trapezoid(&[0.0, 2.0]), 1.0);
/// assert_eq!(trapezoid(&[5.0]), 0.0);
/// ```
pub fn trapezoid(values: &[FloatValue]) -> FloatValue {
    values.windows(2).map(|w| (w[0] + w[1]) / 2.0).sum()
}

/// Integrate the samples from `start` to the end of the sequence.
///
/// A `start` at or past the end yields an empty slice and therefore zero.
pub fn trapezoid_from(values: &[FloatValue], start: usize) -> FloatValue {
    values.get(start..).map_or(0.0, trapezoid)
}
