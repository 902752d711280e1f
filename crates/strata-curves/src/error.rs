//! Error types for curve construction, bootstrapping and pricing.

use thiserror::Error;

/// Errors that can occur during curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A time or tenor is negative or not finite.
    #[error("Invalid tenor {t}: times must be non-negative and finite")]
    InvalidTenor {
        /// The offending time in years.
        t: f64,
    },

    /// A forward interval whose end does not exceed its start.
    #[error("Degenerate interval [{t1}, {t2}]: end must exceed start")]
    DegenerateInterval {
        /// Interval start in years.
        t1: f64,
        /// Interval end in years.
        t2: f64,
    },

    /// The pricing residual has the same sign at both bracket endpoints.
    #[error(
        "No sign change on [{lo}, {hi}] for pillar {tenor}: f(lo) = {f_lo}, f(hi) = {f_hi}"
    )]
    RootNotBracketed {
        /// Pillar tenor being solved, in years.
        tenor: f64,
        /// Lower bracket endpoint (discount factor).
        lo: f64,
        /// Upper bracket endpoint (discount factor).
        hi: f64,
        /// Residual at the lower endpoint.
        f_lo: f64,
        /// Residual at the upper endpoint.
        f_hi: f64,
    },

    /// The root-finder exhausted its iteration budget.
    #[error(
        "Pillar {tenor} did not converge after {iterations} iterations (residual {residual:e})"
    )]
    Convergence {
        /// Pillar tenor being solved, in years.
        tenor: f64,
        /// Iterations consumed.
        iterations: u32,
        /// Final pricing residual.
        residual: f64,
    },

    /// A solved discount factor exceeds the previous pillar's.
    #[error(
        "Discount factor ordering violated at pillar {tenor}: {df} > previous {df_prev}"
    )]
    NonMonotonicCurve {
        /// Pillar tenor at which the violation occurred.
        tenor: f64,
        /// The solved discount factor.
        df: f64,
        /// The previous pillar's discount factor.
        df_prev: f64,
    },

    /// A non-positive or non-finite FX spot rate.
    #[error("Invalid FX spot rate {rate}: must be positive and finite")]
    InvalidFxRate {
        /// The offending spot rate.
        rate: f64,
    },

    /// A quote set with no quotes.
    #[error("Quote set is empty")]
    EmptyQuotes,

    /// Tenors that are not strictly ascending.
    #[error("Tenors must be strictly ascending: {t} follows {prev}")]
    NonAscendingTenors {
        /// The preceding tenor.
        prev: f64,
        /// The offending tenor.
        t: f64,
    },

    /// Too few pillars to build a curve.
    #[error("At least {required} pillar(s) required, got {actual}")]
    InsufficientPillars {
        /// Minimum pillar count.
        required: usize,
        /// Pillars supplied.
        actual: usize,
    },

    /// A value that fails validation (non-finite, non-positive where required,
    /// malformed input).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of the failure.
        reason: String,
    },
}

impl CurveError {
    /// Creates an `InvalidTenor` error.
    pub fn invalid_tenor(t: f64) -> Self {
        Self::InvalidTenor { t }
    }

    /// Creates a `DegenerateInterval` error.
    pub fn degenerate_interval(t1: f64, t2: f64) -> Self {
        Self::DegenerateInterval { t1, t2 }
    }

    /// Creates an `InvalidValue` error.
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates an `InsufficientPillars` error.
    pub fn insufficient_pillars(required: usize, actual: usize) -> Self {
        Self::InsufficientPillars { required, actual }
    }
}

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::invalid_tenor(-0.5);
        assert!(err.to_string().contains("-0.5"));

        let err = CurveError::NonMonotonicCurve {
            tenor: 5.0,
            df: 0.99,
            df_prev: 0.97,
        };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("0.99"));
    }

    #[test]
    fn test_degenerate_interval_display() {
        let err = CurveError::degenerate_interval(2.0, 1.0);
        assert!(err.to_string().contains("[2, 1]"));
    }
}
