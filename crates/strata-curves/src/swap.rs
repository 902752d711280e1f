//! Fixed-versus-floating swap pricing.
//!
//! The pricer is decoupled in the multicurve sense: floating cashflows are
//! projected off one curve and all cashflows are discounted off another.
//! Passing the same curve twice recovers single-curve pricing. This same
//! function is the objective inside the bootstrap engines.

use serde::{Deserialize, Serialize};

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};
use crate::schedule::{accrual_periods, Frequency};
use crate::traits::Curve;

/// Which side of the swap the holder pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Pay fixed, receive floating.
    PayFixed,
    /// Receive fixed, pay floating.
    ReceiveFixed,
}

/// Economic terms of a fixed-versus-floating interest rate swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapDefinition {
    /// Notional amount.
    pub notional: f64,
    /// Maturity in years from valuation.
    pub tenor: f64,
    /// Fixed leg rate (decimal).
    pub fixed_rate: f64,
    /// Direction from the holder's perspective.
    pub direction: Direction,
    /// Fixed leg payment frequency.
    pub fixed_frequency: Frequency,
    /// Floating leg reset and payment frequency.
    pub float_frequency: Frequency,
}

impl SwapDefinition {
    /// Creates a swap with the conventional annual-fixed versus
    /// quarterly-floating leg frequencies.
    #[must_use]
    pub fn new(notional: f64, tenor: f64, fixed_rate: f64, direction: Direction) -> Self {
        Self {
            notional,
            tenor,
            fixed_rate,
            direction,
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::Quarterly,
        }
    }
}

/// The result of pricing a swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapPrice {
    /// Net present value from the holder's perspective.
    pub npv: f64,
    /// The fixed rate that would set the NPV to zero.
    pub fair_rate: f64,
    /// Present value of the fixed leg (positive, before direction sign).
    pub fixed_leg_pv: f64,
    /// Present value of the floating leg (positive, before direction sign).
    pub floating_leg_pv: f64,
}

/// Prices a swap against a projection curve and a discount curve.
///
/// Floating cashflows use the simply-compounded forward over each reset
/// period read off `projection`; every cashflow on both legs is discounted
/// on `discount`. The fair rate is the floating leg PV over the fixed
/// annuity, in closed form.
///
/// # Errors
///
/// Returns [`crate::CurveError::InvalidTenor`] for a non-positive tenor,
/// [`crate::CurveError::InvalidValue`] for a non-positive or non-finite
/// notional, and propagates curve query failures.
///
/// # Example
///
/// ```rust
/// use strata_curves::{
///     price_swap, Direction, DiscountCurve, InterpolationMethod, Pillar, SwapDefinition,
/// };
///
/// let curve = DiscountCurve::from_pillars(
///     vec![Pillar::new(1.0, 0.97), Pillar::new(5.0, 0.82)],
///     InterpolationMethod::LogLinearDiscount,
/// ).unwrap();
///
/// let swap = SwapDefinition::new(1_000_000.0, 5.0, 0.04, Direction::PayFixed);
/// let price = price_swap(&swap, &curve, &curve).unwrap();
///
/// assert!(price.fair_rate > 0.0);
/// ```
pub fn price_swap(
    swap: &SwapDefinition,
    projection: &dyn Curve,
    discount: &dyn Curve,
) -> CurveResult<SwapPrice> {
    // The fair rate divides by the notional, so zero is as bad as negative.
    if !swap.notional.is_finite() || swap.notional <= 0.0 {
        return Err(CurveError::invalid_value(format!(
            "non-positive notional {}",
            swap.notional
        )));
    }

    let mut fixed_leg_pv = 0.0;
    let mut annuity = 0.0;
    for period in accrual_periods(swap.tenor, swap.fixed_frequency)? {
        let tau = period.year_fraction();
        let df = discount.discount_factor(period.end)?;
        annuity += tau * df;
        fixed_leg_pv += swap.notional * swap.fixed_rate * tau * df;
    }

    let mut floating_leg_pv = 0.0;
    for period in accrual_periods(swap.tenor, swap.float_frequency)? {
        let tau = period.year_fraction();
        let fwd = projection.forward_rate(period.start, period.end, Compounding::Simple)?;
        floating_leg_pv += swap.notional * fwd * tau * discount.discount_factor(period.end)?;
    }

    let fair_rate = floating_leg_pv / (swap.notional * annuity);
    let npv = match swap.direction {
        Direction::PayFixed => floating_leg_pv - fixed_leg_pv,
        Direction::ReceiveFixed => fixed_leg_pv - floating_leg_pv,
    };

    Ok(SwapPrice {
        npv,
        fair_rate,
        fixed_leg_pv,
        floating_leg_pv,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{DiscountCurve, Pillar};
    use crate::interpolation::InterpolationMethod;
    use approx::assert_relative_eq;

    fn flat_curve(rate: f64) -> DiscountCurve {
        let pillars = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|&t| Pillar::new(t, (-rate * t).exp()))
            .collect();
        DiscountCurve::from_pillars(pillars, InterpolationMethod::LogLinearDiscount).unwrap()
    }

    #[test]
    fn test_fair_rate_swap_has_zero_npv() {
        let curve = flat_curve(0.04);
        let template = SwapDefinition::new(1.0, 5.0, 0.04, Direction::PayFixed);
        let fair = price_swap(&template, &curve, &curve).unwrap().fair_rate;

        let at_fair = SwapDefinition {
            fixed_rate: fair,
            ..template
        };
        let price = price_swap(&at_fair, &curve, &curve).unwrap();

        assert_relative_eq!(price.npv, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_floating_leg_telescopes() {
        // With projection == discounting, the floating leg PV collapses to
        // N * (DF(0) - DF(T)) regardless of reset frequency.
        let curve = flat_curve(0.05);
        let notional = 1_000_000.0;

        for freq in [Frequency::Monthly, Frequency::Quarterly, Frequency::SemiAnnual] {
            let swap = SwapDefinition {
                float_frequency: freq,
                ..SwapDefinition::new(notional, 10.0, 0.05, Direction::PayFixed)
            };
            let price = price_swap(&swap, &curve, &curve).unwrap();
            let expected = notional * (1.0 - curve.discount_factor(10.0).unwrap());

            assert_relative_eq!(price.floating_leg_pv, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_direction_flips_npv_sign() {
        let curve = flat_curve(0.04);
        let payer = SwapDefinition::new(1.0, 5.0, 0.03, Direction::PayFixed);
        let receiver = SwapDefinition {
            direction: Direction::ReceiveFixed,
            ..payer
        };

        let pay = price_swap(&payer, &curve, &curve).unwrap();
        let rec = price_swap(&receiver, &curve, &curve).unwrap();

        // Below-market fixed rate favors the payer.
        assert!(pay.npv > 0.0);
        assert_relative_eq!(pay.npv, -rec.npv, epsilon = 1e-12);
    }

    #[test]
    fn test_leg_pvs_consistent_with_npv() {
        let curve = flat_curve(0.04);
        let swap = SwapDefinition::new(100.0, 5.0, 0.035, Direction::PayFixed);
        let price = price_swap(&swap, &curve, &curve).unwrap();

        assert_relative_eq!(
            price.npv,
            price.floating_leg_pv - price.fixed_leg_pv,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_projection_discount_decoupling() {
        // A cheaper discount curve lowers both leg PVs but leaves forwards
        // (and hence the projected cashflows) untouched.
        let projection = flat_curve(0.04);
        let funding = flat_curve(0.05);

        let swap = SwapDefinition::new(1.0, 5.0, 0.04, Direction::PayFixed);
        let single = price_swap(&swap, &projection, &projection).unwrap();
        let multi = price_swap(&swap, &projection, &funding).unwrap();

        assert!(multi.floating_leg_pv < single.floating_leg_pv);
        assert!(multi.fixed_leg_pv < single.fixed_leg_pv);
    }

    #[test]
    fn test_invalid_tenor() {
        let curve = flat_curve(0.04);
        let swap = SwapDefinition::new(1.0, 0.0, 0.04, Direction::PayFixed);
        assert!(price_swap(&swap, &curve, &curve).is_err());
    }

    #[test]
    fn test_non_positive_notional_rejected() {
        let curve = flat_curve(0.04);

        for notional in [0.0, -1_000_000.0, f64::NAN] {
            let swap = SwapDefinition::new(notional, 5.0, 0.04, Direction::PayFixed);
            assert!(matches!(
                price_swap(&swap, &curve, &curve),
                Err(CurveError::InvalidValue { .. })
            ));
        }
    }
}
