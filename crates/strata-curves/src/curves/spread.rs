//! Spread composition over a base curve.
//!
//! A funding spread adjusts a risk-free base curve multiplicatively:
//! `DF_out(t) = DF_base(t) * exp(-s(t) * t)` where `s(t)` comes from a
//! [`SpreadTerm`]. Composition is pure sampling, no root-finding.

use crate::curves::discount::{DiscountCurve, Pillar};
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;
use crate::quotes::{validate_tenor_grid, SpreadTerm};
use crate::traits::Curve;

/// Composes a spread over a base curve.
///
/// The output pillar grid is the union of the base curve's pillar times and
/// the spread's quoted tenors, so both the base shape and the spread shape
/// are preserved exactly at their own knots.
///
/// # Errors
///
/// Propagates base curve query failures and curve construction errors.
///
/// # Example
///
/// ```rust
/// use strata_curves::{compose, Curve, DiscountCurve, InterpolationMethod, Pillar, SpreadTerm};
///
/// let base = DiscountCurve::from_pillars(
///     vec![Pillar::new(1.0, 0.96), Pillar::new(5.0, 0.82)],
///     InterpolationMethod::LogLinearDiscount,
/// ).unwrap();
///
/// let funding = compose(&base, &SpreadTerm::flat_bps(50.0),
///     InterpolationMethod::LogLinearDiscount).unwrap();
///
/// assert!(funding.discount_factor(5.0).unwrap() < base.discount_factor(5.0).unwrap());
/// ```
pub fn compose(
    base: &DiscountCurve,
    spread: &SpreadTerm,
    method: InterpolationMethod,
) -> CurveResult<DiscountCurve> {
    let mut grid: Vec<f64> = base.pillars().iter().map(|p| p.time).collect();
    grid.extend(spread.tenors());
    grid.sort_by(f64::total_cmp);
    grid.dedup_by(|a, b| (*a - *b).abs() < 1e-12);
    compose_on_grid(base, spread, &grid, method)
}

/// Composes a spread over a base curve, sampling on a caller-supplied grid.
///
/// # Errors
///
/// Returns [`CurveError::InsufficientPillars`] for an empty grid and the
/// tenor-grid validation errors for a malformed one; propagates base curve
/// query failures.
pub fn compose_on_grid(
    base: &dyn Curve,
    spread: &SpreadTerm,
    grid: &[f64],
    method: InterpolationMethod,
) -> CurveResult<DiscountCurve> {
    if grid.is_empty() {
        return Err(CurveError::insufficient_pillars(1, 0));
    }
    validate_tenor_grid(grid.iter().copied())?;

    let mut pillars = Vec::with_capacity(grid.len());
    for &t in grid {
        let df = base.discount_factor(t)? * (-spread.spread_at(t) * t).exp();
        pillars.push(Pillar::new(t, df));
    }
    DiscountCurve::from_pillars(pillars, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounding::Compounding;
    use crate::quotes::SpreadPoint;
    use approx::assert_relative_eq;

    fn base_curve(rate: f64) -> DiscountCurve {
        let pillars = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|&t| Pillar::new(t, (-rate * t).exp()))
            .collect();
        DiscountCurve::from_pillars(pillars, InterpolationMethod::LogLinearDiscount).unwrap()
    }

    #[test]
    fn test_zero_spread_is_identity() {
        let base = base_curve(0.04);
        let composed = compose(
            &base,
            &SpreadTerm::flat(0.0),
            InterpolationMethod::LogLinearDiscount,
        )
        .unwrap();

        for t in [0.5, 1.0, 3.3, 5.0, 8.0, 10.0, 14.0] {
            assert_relative_eq!(
                composed.discount_factor(t).unwrap(),
                base.discount_factor(t).unwrap(),
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_flat_spread_shifts_zero_rate() {
        // 50 bps of continuous spread over a flat 4% curve sits within a few
        // bps of a 4.5% annual zero.
        let base = base_curve(Compounding::Continuous.zero_rate(1.0 / 1.04, 1.0));
        let composed = compose(
            &base,
            &SpreadTerm::flat_bps(50.0),
            InterpolationMethod::LogLinearDiscount,
        )
        .unwrap();

        let zero_5y = composed.zero_rate(5.0, Compounding::Annual).unwrap();
        assert!(
            (zero_5y - 0.045).abs() < 0.0005,
            "5Y zero {zero_5y} not near 4.5%"
        );
    }

    #[test]
    fn test_composed_df_formula() {
        let base = base_curve(0.04);
        let spread = SpreadTerm::flat(0.0050);
        let composed =
            compose(&base, &spread, InterpolationMethod::LogLinearDiscount).unwrap();

        for t in [1.0, 2.0, 5.0, 10.0] {
            assert_relative_eq!(
                composed.discount_factor(t).unwrap(),
                base.discount_factor(t).unwrap() * (-0.0050 * t).exp(),
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_term_spread_grid_union() {
        let base = base_curve(0.04);
        let spread = SpreadTerm::points(vec![
            SpreadPoint::from_bps(3.0, 30.0),
            SpreadPoint::from_bps(7.0, 70.0),
        ])
        .unwrap();

        let composed =
            compose(&base, &spread, InterpolationMethod::LogLinearDiscount).unwrap();

        // Union of base pillar times {1, 2, 5, 10} and spread tenors {3, 7}.
        let times: Vec<f64> = composed.pillars().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0, 5.0, 7.0, 10.0]);

        // Spread knots are honored exactly.
        assert_relative_eq!(
            composed.discount_factor(3.0).unwrap(),
            base.discount_factor(3.0).unwrap() * (-0.0030_f64 * 3.0).exp(),
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_base_pillar_below_first_spread_tenor() {
        // Base pillars at 1 and 2 sit below the first spread tenor of 3.
        // The spread there ramps from zero at the valuation date, so those
        // pillars carry a fraction of the first quoted spread, not all of it.
        let base = base_curve(0.04);
        let spread = SpreadTerm::points(vec![
            SpreadPoint::from_bps(3.0, 30.0),
            SpreadPoint::from_bps(7.0, 70.0),
        ])
        .unwrap();

        let composed =
            compose(&base, &spread, InterpolationMethod::LogLinearDiscount).unwrap();

        for t in [1.0, 2.0] {
            let ramped = 0.0030 * (t / 3.0);
            assert_relative_eq!(
                composed.discount_factor(t).unwrap(),
                base.discount_factor(t).unwrap() * (-ramped * t).exp(),
                epsilon = 1e-14
            );
        }
    }

    #[test]
    fn test_empty_grid_rejected() {
        let base = base_curve(0.04);
        let result = compose_on_grid(
            &base,
            &SpreadTerm::flat(0.001),
            &[],
            InterpolationMethod::LogLinearDiscount,
        );
        assert!(matches!(
            result,
            Err(CurveError::InsufficientPillars { .. })
        ));
    }
}
