//! Interpolation over sparse pillar data.
//!
//! Discount curves store a handful of calibrated pillar points; every query
//! in between goes through one of these interpolators. Two schemes are
//! provided, matching the two curve interpolation modes:
//!
//! - [`LogLinearInterpolator`]: linear in the log of the values, the
//!   default for discount factors, since it keeps interpolated values
//!   positive and yields piecewise-constant forward rates
//! - [`LinearInterpolator`]: plain linear interpolation, used for zero
//!   rates and spread term structures
//!
//! Both guarantee that a query at a knot returns the stored value exactly,
//! not an interpolated approximation.

mod linear;
mod log_linear;

pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns true if extrapolation beyond the knot range is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the smallest knot.
    fn min_x(&self) -> f64;

    /// Returns the largest knot.
    fn max_x(&self) -> f64;

    /// Checks whether x lies within the knot range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Validates interpolation inputs shared by all schemes.
///
/// Knots must be strictly increasing, at least two, and the same length as
/// the values.
pub(crate) fn validate_knots(xs: &[f64], ys: &[f64]) -> MathResult<()> {
    use crate::error::MathError;

    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

/// Finds the segment index i such that xs[i] <= x < xs[i+1].
///
/// Clamped to the last segment for x at or beyond the final knot.
pub(crate) fn segment_index(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => i.saturating_sub(1).min(xs.len() - 2),
    }
}
