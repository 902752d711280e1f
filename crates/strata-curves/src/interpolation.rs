//! Curve interpolation mode selection.

use serde::{Deserialize, Serialize};

/// Interpolation scheme applied between curve pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMethod {
    /// Log-linear interpolation on discount factors.
    ///
    /// The default. Interpolated discount factors stay positive and the
    /// instantaneous forward rate is piecewise constant between pillars.
    #[default]
    LogLinearDiscount,
    /// Linear interpolation on continuously-compounded zero rates.
    LinearZero,
}
