//! Pillar-backed discount curve.

use serde::{Deserialize, Serialize};
use strata_math::interpolation::{Interpolator, LinearInterpolator, LogLinearInterpolator};

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;
use crate::quotes::validate_tenor_grid;
use crate::traits::Curve;

/// A calibrated curve point: time in years and its discount factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    /// Time in years from valuation. Strictly positive; the (0, 1) anchor
    /// is implicit.
    pub time: f64,
    /// Discount factor at `time`.
    pub discount_factor: f64,
}

impl Pillar {
    /// Creates a new pillar.
    #[must_use]
    pub fn new(time: f64, discount_factor: f64) -> Self {
        Self {
            time,
            discount_factor,
        }
    }
}

#[derive(Debug, Clone)]
enum Scheme {
    /// Log-linear in the discount factor, anchored at (0, 1).
    LogLinear(LogLinearInterpolator),
    /// Linear in the continuous zero rate. `None` with a single pillar,
    /// where the zero rate is constant.
    LinearZero(Option<LinearInterpolator>),
}

/// An immutable discount curve backed by calibrated pillars.
///
/// Boundary behavior:
///
/// - `DF(0)` is exactly 1 and a query at a pillar time returns the stored
///   discount factor exactly;
/// - between 0 and the first pillar, interpolation runs against the implicit
///   (0, 1) anchor;
/// - beyond the last pillar, the curve extrapolates at a flat instantaneous
///   forward rate taken from the final segment.
///
/// Curves are cheap to share read-only across threads via `Arc`.
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    pillars: Vec<Pillar>,
    method: InterpolationMethod,
    scheme: Scheme,
    terminal_forward: f64,
}

impl DiscountCurve {
    /// Builds a curve from pillars in strictly ascending time order.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPillars`] for an empty input,
    /// [`CurveError::InvalidTenor`] / [`CurveError::NonAscendingTenors`] for
    /// a bad time grid, and [`CurveError::InvalidValue`] for non-positive or
    /// non-finite discount factors.
    pub fn from_pillars(
        pillars: Vec<Pillar>,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        if pillars.is_empty() {
            return Err(CurveError::insufficient_pillars(1, 0));
        }
        validate_tenor_grid(pillars.iter().map(|p| p.time))?;
        for p in &pillars {
            if p.discount_factor <= 0.0 || !p.discount_factor.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "discount factor {} at time {} must be positive and finite",
                    p.discount_factor, p.time
                )));
            }
        }

        let scheme = match method {
            InterpolationMethod::LogLinearDiscount => {
                let mut times = Vec::with_capacity(pillars.len() + 1);
                let mut dfs = Vec::with_capacity(pillars.len() + 1);
                times.push(0.0);
                dfs.push(1.0);
                for p in &pillars {
                    times.push(p.time);
                    dfs.push(p.discount_factor);
                }
                let interp = LogLinearInterpolator::new(times, dfs)
                    .map_err(|e| CurveError::invalid_value(e.to_string()))?;
                Scheme::LogLinear(interp)
            }
            InterpolationMethod::LinearZero => {
                if pillars.len() >= 2 {
                    let times: Vec<f64> = pillars.iter().map(|p| p.time).collect();
                    let zeros: Vec<f64> = pillars
                        .iter()
                        .map(|p| -p.discount_factor.ln() / p.time)
                        .collect();
                    let interp = LinearInterpolator::new(times, zeros)
                        .map_err(|e| CurveError::invalid_value(e.to_string()))?;
                    Scheme::LinearZero(Some(interp))
                } else {
                    Scheme::LinearZero(None)
                }
            }
        };

        let n = pillars.len();
        let last = pillars[n - 1];
        let terminal_forward = if n >= 2 {
            let prev = pillars[n - 2];
            (prev.discount_factor.ln() - last.discount_factor.ln()) / (last.time - prev.time)
        } else {
            -last.discount_factor.ln() / last.time
        };

        Ok(Self {
            pillars,
            method,
            scheme,
            terminal_forward,
        })
    }

    /// Builds a curve from `(tenor, zero rate)` points quoted under the
    /// given compounding.
    ///
    /// # Errors
    ///
    /// Same validation as [`DiscountCurve::from_pillars`]; a rate implying a
    /// non-positive discount factor is rejected.
    pub fn from_zero_rates(
        points: &[(f64, f64)],
        compounding: Compounding,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        let pillars = points
            .iter()
            .map(|&(t, rate)| Pillar::new(t, compounding.discount_factor(rate, t)))
            .collect();
        Self::from_pillars(pillars, method)
    }

    /// Returns the calibrated pillars in ascending time order, excluding the
    /// implicit (0, 1) anchor.
    #[must_use]
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Returns the interpolation scheme the curve was built with.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.method
    }

    /// Returns the stored discount factor if `t` hits a pillar exactly.
    fn pillar_hit(&self, t: f64) -> Option<f64> {
        self.pillars
            .binary_search_by(|p| {
                p.time
                    .partial_cmp(&t)
                    .unwrap_or(std::cmp::Ordering::Less)
            })
            .ok()
            .map(|i| self.pillars[i].discount_factor)
    }
}

impl Curve for DiscountCurve {
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        if t < 0.0 || !t.is_finite() {
            return Err(CurveError::invalid_tenor(t));
        }
        if t == 0.0 {
            return Ok(1.0);
        }
        if let Some(df) = self.pillar_hit(t) {
            return Ok(df);
        }

        let last = self.pillars[self.pillars.len() - 1];
        if t > last.time {
            return Ok(last.discount_factor * (-self.terminal_forward * (t - last.time)).exp());
        }

        match &self.scheme {
            Scheme::LogLinear(interp) => interp
                .interpolate(t)
                .map_err(|e| CurveError::invalid_value(e.to_string())),
            Scheme::LinearZero(interp) => {
                let first = self.pillars[0];
                if t < first.time {
                    // Linear in the discount factor against the (0, 1) anchor.
                    return Ok(1.0 + (first.discount_factor - 1.0) * (t / first.time));
                }
                let zero = match interp {
                    Some(interp) => interp
                        .interpolate(t)
                        .map_err(|e| CurveError::invalid_value(e.to_string()))?,
                    None => -first.discount_factor.ln() / first.time,
                };
                Ok((-zero * t).exp())
            }
        }
    }

    fn max_time(&self) -> f64 {
        self.pillars[self.pillars.len() - 1].time
    }
}
