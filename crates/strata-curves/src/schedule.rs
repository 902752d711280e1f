//! Accrual schedule generation.
//!
//! Swap legs accrue over equally-spaced periods from valuation to maturity.
//! Year fractions are taken directly from the period times; day count and
//! business-day adjustment are out of scope (the quote source supplies
//! calendar-adjusted year fractions).

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Payment frequency of a swap leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// One payment per year.
    Annual,
    /// Two payments per year.
    SemiAnnual,
    /// Four payments per year.
    Quarterly,
    /// Twelve payments per year.
    Monthly,
}

impl Frequency {
    /// Returns the regular period length in years.
    #[must_use]
    pub fn period_years(self) -> f64 {
        match self {
            Self::Annual => 1.0,
            Self::SemiAnnual => 0.5,
            Self::Quarterly => 0.25,
            Self::Monthly => 1.0 / 12.0,
        }
    }

    /// Returns the number of payments per year.
    #[must_use]
    pub fn periods_per_year(self) -> u32 {
        match self {
            Self::Annual => 1,
            Self::SemiAnnual => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
        }
    }
}

/// An accrual period `[start, end]` in year fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    /// Accrual start in years.
    pub start: f64,
    /// Accrual end (payment time) in years.
    pub end: f64,
}

impl Period {
    /// Returns the accrual year fraction.
    #[must_use]
    pub fn year_fraction(&self) -> f64 {
        self.end - self.start
    }
}

/// Generates equally-spaced accrual periods from 0 to `tenor`.
///
/// The final period is truncated at maturity when the tenor is not a whole
/// multiple of the frequency.
///
/// # Errors
///
/// Returns [`CurveError::InvalidTenor`] if `tenor` is not positive and
/// finite.
pub fn accrual_periods(tenor: f64, frequency: Frequency) -> CurveResult<Vec<Period>> {
    if tenor <= 0.0 || !tenor.is_finite() {
        return Err(CurveError::invalid_tenor(tenor));
    }

    let step = frequency.period_years();
    let mut periods = Vec::with_capacity((tenor / step).ceil() as usize);
    let mut start = 0.0;

    // Tolerance absorbs accumulated fp noise so a whole-multiple tenor does
    // not produce a vanishing final stub.
    while start < tenor - 1e-10 {
        let end = (start + step).min(tenor);
        periods.push(Period { start, end });
        start = end;
    }

    Ok(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_whole_year_quarterly() {
        let periods = accrual_periods(1.0, Frequency::Quarterly).unwrap();

        assert_eq!(periods.len(), 4);
        assert_relative_eq!(periods[0].start, 0.0);
        assert_relative_eq!(periods[3].end, 1.0);
        for p in &periods {
            assert_relative_eq!(p.year_fraction(), 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_final_stub_truncated() {
        let periods = accrual_periods(1.3, Frequency::SemiAnnual).unwrap();

        assert_eq!(periods.len(), 3);
        assert_relative_eq!(periods[2].start, 1.0);
        assert_relative_eq!(periods[2].end, 1.3);
        assert_relative_eq!(periods[2].year_fraction(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_periods_are_contiguous() {
        let periods = accrual_periods(10.0, Frequency::Monthly).unwrap();

        assert_eq!(periods.len(), 120);
        for pair in periods.windows(2) {
            assert_relative_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_tenor_shorter_than_period() {
        let periods = accrual_periods(0.4, Frequency::Annual).unwrap();

        assert_eq!(periods.len(), 1);
        assert_relative_eq!(periods[0].end, 0.4);
    }

    #[test]
    fn test_invalid_tenor() {
        assert!(accrual_periods(0.0, Frequency::Annual).is_err());
        assert!(accrual_periods(-1.0, Frequency::Annual).is_err());
        assert!(accrual_periods(f64::NAN, Frequency::Annual).is_err());
    }
}
