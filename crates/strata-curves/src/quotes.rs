//! Market quote records and validated quote collections.
//!
//! Quotes arrive from an external source as (tenor, rate) pairs with tenors
//! already converted to year fractions. Validation happens once at
//! ingestion; the bootstrap engines can then assume a clean, strictly
//! ascending tenor grid.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A par swap quote: tenor in years and the quoted fixed rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Maturity in years from valuation.
    pub tenor: f64,
    /// Quoted par fixed rate (decimal, e.g. 0.03 for 3%).
    pub rate: f64,
}

impl Quote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(tenor: f64, rate: f64) -> Self {
        Self { tenor, rate }
    }
}

/// A validated, ascending collection of par quotes.
///
/// Construction rejects empty sets, non-positive or non-finite tenors,
/// non-finite rates, and tenors that are not strictly ascending. All paths
/// into a `QuoteSet` validate, including JSON ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSet(Vec<Quote>);

impl QuoteSet {
    /// Creates a quote set from quotes in ascending tenor order.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyQuotes`] for an empty input,
    /// [`CurveError::InvalidTenor`] for a non-positive tenor,
    /// [`CurveError::NonAscendingTenors`] for out-of-order or duplicate
    /// tenors, and [`CurveError::InvalidValue`] for non-finite rates.
    pub fn new(quotes: Vec<Quote>) -> CurveResult<Self> {
        if quotes.is_empty() {
            return Err(CurveError::EmptyQuotes);
        }
        validate_tenor_grid(quotes.iter().map(|q| q.tenor))?;
        for q in &quotes {
            if !q.rate.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "non-finite rate {} at tenor {}",
                    q.rate, q.tenor
                )));
            }
        }
        Ok(Self(quotes))
    }

    /// Parses a quote set from a JSON array of `{"tenor": .., "rate": ..}`
    /// records, then validates it.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidValue`] for malformed JSON, plus the
    /// validation errors of [`QuoteSet::new`].
    pub fn from_json_slice(bytes: &[u8]) -> CurveResult<Self> {
        let quotes: Vec<Quote> = serde_json::from_slice(bytes)
            .map_err(|e| CurveError::invalid_value(format!("malformed quote JSON: {e}")))?;
        Self::new(quotes)
    }

    /// Returns the quotes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Quote] {
        &self.0
    }

    /// Iterates over the quotes in ascending tenor order.
    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.0.iter()
    }

    /// Returns the number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no quotes. Always false for a
    /// constructed set; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the longest tenor.
    #[must_use]
    pub fn last_tenor(&self) -> f64 {
        // Non-empty by construction.
        self.0.last().map_or(0.0, |q| q.tenor)
    }
}

impl<'a> IntoIterator for &'a QuoteSet {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A point on a spread term structure.
///
/// Spreads are continuously compounded: composing a spread `s` at time `t`
/// multiplies the base discount factor by `exp(-s * t)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadPoint {
    /// Tenor in years.
    pub tenor: f64,
    /// Spread in decimal (0.0050 for 50 bps).
    pub spread: f64,
}

impl SpreadPoint {
    /// Creates a new spread point.
    #[must_use]
    pub fn new(tenor: f64, spread: f64) -> Self {
        Self { tenor, spread }
    }

    /// Creates a spread point from a basis point quote.
    #[must_use]
    pub fn from_bps(tenor: f64, bps: f64) -> Self {
        Self {
            tenor,
            spread: bps * 1e-4,
        }
    }
}

/// A funding spread over a base curve: either flat or a term structure.
///
/// Every construction path validates, so a term structure always holds a
/// non-empty, strictly ascending, finite point grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadTerm {
    kind: SpreadKind,
}

#[derive(Debug, Clone, PartialEq)]
enum SpreadKind {
    Flat(f64),
    Points(Vec<SpreadPoint>),
}

impl SpreadTerm {
    /// Creates a flat spread applied at every tenor.
    #[must_use]
    pub fn flat(spread: f64) -> Self {
        Self {
            kind: SpreadKind::Flat(spread),
        }
    }

    /// Creates a flat spread from a basis point quote.
    #[must_use]
    pub fn flat_bps(bps: f64) -> Self {
        Self::flat(bps * 1e-4)
    }

    /// Creates a validated term structure from spread points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::EmptyQuotes`] for an empty input,
    /// [`CurveError::InvalidTenor`] / [`CurveError::NonAscendingTenors`] for
    /// a bad tenor grid, and [`CurveError::InvalidValue`] for non-finite
    /// spreads.
    pub fn points(points: Vec<SpreadPoint>) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyQuotes);
        }
        validate_tenor_grid(points.iter().map(|p| p.tenor))?;
        for p in &points {
            if !p.spread.is_finite() {
                return Err(CurveError::invalid_value(format!(
                    "non-finite spread {} at tenor {}",
                    p.spread, p.tenor
                )));
            }
        }
        Ok(Self {
            kind: SpreadKind::Points(points),
        })
    }

    /// Returns the spread at time `t`.
    ///
    /// A term structure anchors a zero spread at the valuation date and
    /// ramps linearly up to the first quoted point; between points it
    /// interpolates linearly, and beyond the last tenor it holds the last
    /// value flat.
    #[must_use]
    pub fn spread_at(&self, t: f64) -> f64 {
        match &self.kind {
            SpreadKind::Flat(s) => *s,
            SpreadKind::Points(points) => {
                // Non-empty by construction.
                let first = points[0];
                if t < first.tenor {
                    return first.spread * (t.max(0.0) / first.tenor);
                }
                for pair in points.windows(2) {
                    if t <= pair[1].tenor {
                        let w = (t - pair[0].tenor) / (pair[1].tenor - pair[0].tenor);
                        return pair[0].spread + w * (pair[1].spread - pair[0].spread);
                    }
                }
                points[points.len() - 1].spread
            }
        }
    }

    /// Returns the tenors at which the term structure is quoted.
    #[must_use]
    pub fn tenors(&self) -> Vec<f64> {
        match &self.kind {
            SpreadKind::Flat(_) => Vec::new(),
            SpreadKind::Points(points) => points.iter().map(|p| p.tenor).collect(),
        }
    }
}

/// A cross-currency swap quote: domestic fixed versus foreign floating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CcsQuote {
    /// Maturity in years from valuation.
    pub tenor: f64,
    /// Quoted fixed rate on the domestic leg (decimal).
    pub domestic_fixed_rate: f64,
}

impl CcsQuote {
    /// Creates a new cross-currency quote.
    #[must_use]
    pub fn new(tenor: f64, domestic_fixed_rate: f64) -> Self {
        Self {
            tenor,
            domestic_fixed_rate,
        }
    }
}

/// Validates a tenor grid: every tenor positive and finite, strictly
/// ascending.
pub(crate) fn validate_tenor_grid(tenors: impl Iterator<Item = f64>) -> CurveResult<()> {
    let mut prev: Option<f64> = None;
    for t in tenors {
        if t <= 0.0 || !t.is_finite() {
            return Err(CurveError::invalid_tenor(t));
        }
        if let Some(p) = prev {
            if t <= p {
                return Err(CurveError::NonAscendingTenors { prev: p, t });
            }
        }
        prev = Some(t);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quote_set_validates() {
        let quotes = vec![Quote::new(1.0, 0.03), Quote::new(5.0, 0.04)];
        assert!(QuoteSet::new(quotes).is_ok());
    }

    #[test]
    fn test_quote_set_rejects_empty() {
        assert!(matches!(
            QuoteSet::new(Vec::new()),
            Err(CurveError::EmptyQuotes)
        ));
    }

    #[test]
    fn test_quote_set_rejects_duplicates() {
        let quotes = vec![Quote::new(1.0, 0.03), Quote::new(1.0, 0.035)];
        assert!(matches!(
            QuoteSet::new(quotes),
            Err(CurveError::NonAscendingTenors { .. })
        ));
    }

    #[test]
    fn test_quote_set_rejects_non_positive_tenor() {
        let quotes = vec![Quote::new(0.0, 0.03)];
        assert!(matches!(
            QuoteSet::new(quotes),
            Err(CurveError::InvalidTenor { .. })
        ));
    }

    #[test]
    fn test_quote_set_from_json() {
        let json = br#"[
            {"tenor": 1.0, "rate": 0.03},
            {"tenor": 5.0, "rate": 0.04},
            {"tenor": 10.0, "rate": 0.05}
        ]"#;

        let quotes = QuoteSet::from_json_slice(json).unwrap();

        assert_eq!(quotes.len(), 3);
        assert_relative_eq!(quotes.last_tenor(), 10.0);
        assert_relative_eq!(quotes.as_slice()[1].rate, 0.04);
    }

    #[test]
    fn test_quote_set_from_malformed_json() {
        let result = QuoteSet::from_json_slice(b"not json");
        assert!(matches!(result, Err(CurveError::InvalidValue { .. })));
    }

    #[test]
    fn test_flat_spread() {
        let spread = SpreadTerm::flat_bps(50.0);
        assert_relative_eq!(spread.spread_at(0.5), 0.0050, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(30.0), 0.0050, epsilon = 1e-15);
    }

    #[test]
    fn test_term_spread_interpolates() {
        let spread = SpreadTerm::points(vec![
            SpreadPoint::from_bps(1.0, 20.0),
            SpreadPoint::from_bps(5.0, 60.0),
        ])
        .unwrap();

        // Ramp from zero before the first point, linear in between, flat
        // after the last.
        assert_relative_eq!(spread.spread_at(0.25), 0.0005, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(1.0), 0.0020, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(3.0), 0.0040, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(10.0), 0.0060, epsilon = 1e-15);
    }

    #[test]
    fn test_term_spread_anchors_zero_at_valuation() {
        let spread = SpreadTerm::points(vec![SpreadPoint::from_bps(2.0, 40.0)]).unwrap();

        assert_relative_eq!(spread.spread_at(0.0), 0.0, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(0.5), 0.0010, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(2.0), 0.0040, epsilon = 1e-15);
        assert_relative_eq!(spread.spread_at(4.0), 0.0040, epsilon = 1e-15);
    }

    #[test]
    fn test_term_spread_rejects_empty() {
        assert!(matches!(
            SpreadTerm::points(Vec::new()),
            Err(CurveError::EmptyQuotes)
        ));
    }

    #[test]
    fn test_term_spread_rejects_unsorted() {
        let result = SpreadTerm::points(vec![
            SpreadPoint::from_bps(5.0, 60.0),
            SpreadPoint::from_bps(1.0, 20.0),
        ]);
        assert!(matches!(
            result,
            Err(CurveError::NonAscendingTenors { .. })
        ));
    }
}
