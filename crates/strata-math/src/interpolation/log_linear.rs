//! Log-linear interpolation.

use crate::error::{MathError, MathResult};
use crate::interpolation::{segment_index, validate_knots, Interpolator};

/// Log-linear interpolation between data points.
///
/// Interpolates the natural logarithm of the values, then exponentiates.
/// The standard scheme for discount factor pillars:
///
/// - interpolated values are guaranteed positive
/// - forward rates are piecewise constant between pillars
///
/// ```text
/// y(x) = exp(lerp(x, ln y0, ln y1))
/// ```
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{Interpolator, LogLinearInterpolator};
///
/// let times = vec![0.0, 1.0, 2.0, 3.0];
/// let dfs = vec![1.0, 0.97, 0.94, 0.91];
///
/// let interp = LogLinearInterpolator::new(times, dfs).unwrap();
/// assert!(interp.interpolate(1.5).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are supplied, lengths differ,
    /// the x values are not strictly increasing, or any y value is
    /// non-positive.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "y[{i}] = {y} is not positive; log-linear requires positive values"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self {
            xs,
            ys,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the knot range.
    ///
    /// Extrapolation continues the boundary segment's log-slope, i.e. it
    /// holds the boundary forward rate flat when the values are discount
    /// factors.
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

    fn segment(&self, x: f64) -> (usize, f64) {
        let i = segment_index(&self.xs, x);
        let w = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        (i, w)
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        // Exact knot hits return the stored value, not exp(ln(y)).
        let i = segment_index(&self.xs, x);
        if (self.xs[i] - x).abs() < f64::EPSILON {
            return Ok(self.ys[i]);
        }
        if (self.xs[i + 1] - x).abs() < f64::EPSILON {
            return Ok(self.ys[i + 1]);
        }

        let (i, w) = self.segment(x);
        let log_y = self.log_ys[i] + w * (self.log_ys[i + 1] - self.log_ys[i]);
        Ok(log_y.exp())
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let (i, w) = self.segment(x);
        let log_slope = (self.log_ys[i + 1] - self.log_ys[i]) / (self.xs[i + 1] - self.xs[i]);
        let y = (self.log_ys[i] + w * (self.log_ys[i + 1] - self.log_ys[i])).exp();
        Ok(y * log_slope)
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
