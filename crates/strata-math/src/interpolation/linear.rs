//! Linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{segment_index, validate_knots, Interpolator};

/// Linear interpolation between data points.
///
/// Used for zero rate curves and spread term structures, where negative
/// values are legitimate and positivity of the interpolant is not required.
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let tenors = vec![1.0, 2.0, 5.0];
/// let rates = vec![0.030, 0.034, 0.040];
///
/// let interp = LinearInterpolator::new(tenors, rates).unwrap();
/// let r = interp.interpolate(3.5).unwrap();
/// assert!(r > 0.034 && r < 0.040);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are supplied, lengths differ,
    /// or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys)?;
        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables flat extrapolation beyond the knot range.
    ///
    /// Queries left of the first knot return the first value; queries right
    /// of the last knot return the last value.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.allow_extrapolation && !self.in_range(x) {
            return Err(MathError::ExtrapolationNotAllowed {
                x,
                min: self.min_x(),
                max: self.max_x(),
            });
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if x <= self.xs[0] {
            return Ok(self.ys[0]);
        }
        if x >= self.max_x() {
            return Ok(*self.ys.last().unwrap_or(&f64::NAN));
        }

        let i = segment_index(&self.xs, x);
        // Exact knot hit returns the stored value untouched.
        if (self.xs[i] - x).abs() < f64::EPSILON {
            return Ok(self.ys[i]);
        }

        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(self.ys[i] + w * (self.ys[i + 1] - self.ys[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        if x < self.xs[0] || x > self.max_x() {
            return Ok(0.0); // flat extrapolation
        }

        let i = segment_index(&self.xs, x);
        Ok((self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]))
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
