//! Rate compounding conventions.

use serde::{Deserialize, Serialize};

/// Compounding convention for quoting zero rates.
///
/// Converts between rates and discount factors. The convention only affects
/// how a rate is *quoted*; the underlying discount factor is convention-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Compounding {
    /// Simple (money market) compounding: `DF = 1 / (1 + r * t)`.
    Simple,
    /// Annual compounding: `DF = (1 + r)^(-t)`.
    Annual,
    /// Continuous compounding: `DF = exp(-r * t)`.
    #[default]
    Continuous,
}

impl Compounding {
    /// Returns the discount factor implied by `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(self, rate: f64, t: f64) -> f64 {
        match self {
            Self::Simple => 1.0 / (1.0 + rate * t),
            Self::Annual => (1.0 + rate).powf(-t),
            Self::Continuous => (-rate * t).exp(),
        }
    }

    /// Returns the zero rate implied by a discount factor over `t` years.
    ///
    /// Returns 0.0 for `t <= 0`, where no rate is defined.
    #[must_use]
    pub fn zero_rate(self, df: f64, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        match self {
            Self::Simple => (1.0 / df - 1.0) / t,
            Self::Annual => df.powf(-1.0 / t) - 1.0,
            Self::Continuous => -df.ln() / t,
        }
    }
}
