//! The core curve trait.
//!
//! All curve types implement [`Curve`], which provides discount factors,
//! zero rates and forward rates. Times are year fractions measured from an
//! implicit valuation point at t = 0; conversion from calendar dates is the
//! caller's concern.

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};

/// A term structure of discount factors.
///
/// The single required method is [`discount_factor`](Curve::discount_factor);
/// rates are derived from it. Curves are immutable once built, and
/// `Send + Sync` so they can be shared across threads behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use strata_curves::{Compounding, Curve, DiscountCurve, InterpolationMethod, Pillar};
///
/// let curve = DiscountCurve::from_pillars(
///     vec![
///         Pillar::new(1.0, 0.97),
///         Pillar::new(5.0, 0.82),
///     ],
///     InterpolationMethod::LogLinearDiscount,
/// ).unwrap();
///
/// let df = curve.discount_factor(3.0).unwrap();
/// let zero = curve.zero_rate(3.0, Compounding::Continuous).unwrap();
/// assert!(df > 0.82 && df < 0.97);
/// assert!(zero > 0.0);
/// ```
pub trait Curve: Send + Sync {
    /// Returns the discount factor for time `t` (years from valuation).
    ///
    /// `DF(0)` is exactly 1.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTenor`] if `t` is negative or not finite.
    fn discount_factor(&self, t: f64) -> CurveResult<f64>;

    /// Returns the last pillar time. Queries beyond it extrapolate at a flat
    /// instantaneous forward rate.
    fn max_time(&self) -> f64;

    /// Returns the zero rate at time `t` under the given compounding.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTenor`] if `t <= 0`, where no zero rate
    /// is defined.
    fn zero_rate(&self, t: f64, compounding: Compounding) -> CurveResult<f64> {
        if t <= 0.0 {
            return Err(CurveError::invalid_tenor(t));
        }
        let df = self.discount_factor(t)?;
        Ok(compounding.zero_rate(df, t))
    }

    /// Returns the forward rate over `[t1, t2]` under the given compounding.
    ///
    /// The forward is the rate that equates `DF(t2)` with `DF(t1)` discounted
    /// over the interval: for simple compounding
    /// `F = (DF(t1) / DF(t2) - 1) / (t2 - t1)`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateInterval`] if `t2 <= t1`, and
    /// [`CurveError::InvalidTenor`] if `t1` is negative.
    fn forward_rate(&self, t1: f64, t2: f64, compounding: Compounding) -> CurveResult<f64> {
        if t2 <= t1 {
            return Err(CurveError::degenerate_interval(t1, t2));
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        // The forward is the zero rate of the interval discount factor.
        Ok(compounding.zero_rate(df2 / df1, t2 - t1))
    }

    /// Returns the instantaneous forward rate at time `t`.
    ///
    /// `f(t) = -d ln DF(t) / dt`, approximated with a one-day step.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidTenor`] if `t` is negative or not finite.
    fn instantaneous_forward(&self, t: f64) -> CurveResult<f64> {
        let h = 1.0 / 365.0;
        let df = self.discount_factor(t)?;
        let df_plus = self.discount_factor(t + h)?;
        Ok(-(df_plus.ln() - df.ln()) / h)
    }
}
