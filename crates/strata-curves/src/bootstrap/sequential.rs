//! Sequential pillar-by-pillar bootstrap.
//!
//! Quotes are processed in ascending tenor order. For each quote the engine
//! forms the par fixed-versus-floating swap, then solves for the discount
//! factor at the quote's tenor that reprices it to zero. Earlier pillars are
//! already final when a later pillar is solved, so each pillar is a single
//! bracketed 1-D root-find.
//!
//! Projection always reads off the curve under construction; discounting is
//! selectable via [`Discounting`], which is what separates a plain
//! single-curve bootstrap from a funding-discounted one.

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use log::debug;
use strata_math::error::MathError;
use strata_math::solvers::{brent, SolverConfig};

use crate::curves::{DiscountCurve, Pillar};
use crate::error::{CurveError, CurveResult};
use crate::interpolation::InterpolationMethod;
use crate::quotes::{Quote, QuoteSet};
use crate::schedule::Frequency;
use crate::swap::{price_swap, Direction, SwapDefinition};
use crate::traits::Curve;

/// Where the bootstrap discounts cashflows.
#[derive(Clone)]
pub enum Discounting {
    /// Discount on the curve under construction.
    SelfDiscounting,
    /// Discount on an external curve (e.g. a funding curve). Projection
    /// stays on the curve under construction.
    External(Arc<dyn Curve>),
}

impl fmt::Debug for Discounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfDiscounting => f.write_str("SelfDiscounting"),
            Self::External(_) => f.write_str("External(..)"),
        }
    }
}

/// Configuration for the bootstrap engines.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Interpolation scheme of the output curve (and of every candidate
    /// curve evaluated during solving).
    pub interpolation: InterpolationMethod,
    /// Root-finder tolerance and iteration budget.
    pub solver: SolverConfig,
    /// Fixed leg frequency of the calibrating swaps.
    pub fixed_frequency: Frequency,
    /// Floating leg frequency of the calibrating swaps.
    pub float_frequency: Frequency,
    /// Reject a solved discount factor above the previous pillar's.
    ///
    /// On by default; DF ordering is the no-arbitrage condition for
    /// positive-rate curves. Disable when bootstrapping markets with
    /// genuinely negative rates, where discount factors may rise.
    pub enforce_monotonicity: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::LogLinearDiscount,
            solver: SolverConfig::default(),
            fixed_frequency: Frequency::Annual,
            float_frequency: Frequency::Quarterly,
            enforce_monotonicity: true,
        }
    }
}

/// Sequential bootstrap engine for par swap quotes.
///
/// # Example
///
/// ```rust
/// use strata_curves::{
///     Bootstrapper, Compounding, Curve, Discounting, Quote, QuoteSet,
/// };
///
/// let quotes = QuoteSet::new(vec![
///     Quote::new(1.0, 0.03),
///     Quote::new(5.0, 0.04),
///     Quote::new(10.0, 0.05),
/// ]).unwrap();
///
/// let curve = Bootstrapper::new(Discounting::SelfDiscounting)
///     .bootstrap(&quotes)
///     .unwrap();
///
/// let zero_1y = curve.zero_rate(1.0, Compounding::Annual).unwrap();
/// assert!((zero_1y - 0.03).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct Bootstrapper {
    config: BootstrapConfig,
    discounting: Discounting,
}

impl Bootstrapper {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(discounting: Discounting) -> Self {
        Self {
            config: BootstrapConfig::default(),
            discounting,
        }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Bootstraps a discount curve from the quote set.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::RootNotBracketed`] when a quote's pricing
    /// residual has no sign change over the derived bracket,
    /// [`CurveError::Convergence`] when the solver exhausts its iteration
    /// budget, and [`CurveError::NonMonotonicCurve`] when a solved discount
    /// factor exceeds the previous pillar's (quote set implies arbitrage).
    pub fn bootstrap(&self, quotes: &QuoteSet) -> CurveResult<DiscountCurve> {
        let mut pillars: Vec<Pillar> = Vec::with_capacity(quotes.len());
        for quote in quotes {
            let pillar = self.solve_pillar(&pillars, quote)?;
            pillars.push(pillar);
        }
        DiscountCurve::from_pillars(pillars, self.config.interpolation)
    }

    /// Solves one pillar against the already-solved prefix.
    fn solve_pillar(&self, solved: &[Pillar], quote: &Quote) -> CurveResult<Pillar> {
        let (t_prev, df_prev) = solved
            .last()
            .map_or((0.0, 1.0), |p| (p.time, p.discount_factor));
        let (lo, hi) = pillar_bracket(df_prev, t_prev, quote.tenor, quote.rate);

        let failure: RefCell<Option<CurveError>> = RefCell::new(None);
        let objective = |df: f64| match self.residual(solved, quote, df) {
            Ok(npv) => npv,
            Err(e) => {
                failure.borrow_mut().get_or_insert(e);
                0.0
            }
        };

        let f_lo = objective(lo);
        let f_hi = objective(hi);
        if let Some(e) = failure.borrow_mut().take() {
            return Err(e);
        }
        if f_lo * f_hi > 0.0 {
            return Err(CurveError::RootNotBracketed {
                tenor: quote.tenor,
                lo,
                hi,
                f_lo,
                f_hi,
            });
        }

        let result = brent(&objective, lo, hi, &self.config.solver)
            .map_err(|e| map_solver_error(quote.tenor, e))?;
        if let Some(e) = failure.borrow_mut().take() {
            return Err(e);
        }

        let df = result.root;
        if self.config.enforce_monotonicity && df > df_prev + 1e-12 {
            return Err(CurveError::NonMonotonicCurve {
                tenor: quote.tenor,
                df,
                df_prev,
            });
        }

        debug!(
            "solved pillar t={} df={:.12} in {} iterations (residual {:e})",
            quote.tenor, df, result.iterations, result.residual
        );
        Ok(Pillar::new(quote.tenor, df))
    }

    /// Par swap NPV with a tentative pillar appended at the quote's tenor.
    fn residual(&self, solved: &[Pillar], quote: &Quote, df: f64) -> CurveResult<f64> {
        let mut pillars = Vec::with_capacity(solved.len() + 1);
        pillars.extend_from_slice(solved);
        pillars.push(Pillar::new(quote.tenor, df));
        let candidate = DiscountCurve::from_pillars(pillars, self.config.interpolation)?;

        let swap = SwapDefinition {
            notional: 1.0,
            tenor: quote.tenor,
            fixed_rate: quote.rate,
            direction: Direction::ReceiveFixed,
            fixed_frequency: self.config.fixed_frequency,
            float_frequency: self.config.float_frequency,
        };
        let price = match &self.discounting {
            Discounting::SelfDiscounting => price_swap(&swap, &candidate, &candidate)?,
            Discounting::External(curve) => price_swap(&swap, &candidate, curve.as_ref())?,
        };
        Ok(price.npv)
    }
}

/// Derives the solver bracket for a pillar from the previous pillar's
/// discount factor and the quoted rate.
///
/// The lower bound discounts at three times the rate plus a 10% cushion
/// over the *full* tenor, not just the segment since the previous pillar: a
/// steep quote after a flat stretch concentrates all its discounting into
/// the final segment, where the implied forward far exceeds the quoted
/// rate. The upper bound sits slightly *above* the previous pillar so an
/// ordering-violating root is still found and can then be rejected with a
/// `NonMonotonicCurve` diagnosis rather than a bare bracket failure.
pub(crate) fn pillar_bracket(df_prev: f64, t_prev: f64, tenor: f64, rate: f64) -> (f64, f64) {
    let r = rate.abs();
    let lo = df_prev * (-(r + 0.10) * 3.0 * tenor).exp();
    let hi = df_prev * ((r + 0.02) * (tenor - t_prev)).exp();
    (lo, hi)
}

/// Maps a solver failure to the tenor-carrying curve error.
pub(crate) fn map_solver_error(tenor: f64, err: MathError) -> CurveError {
    match err {
        MathError::ConvergenceFailed {
            iterations,
            residual,
        } => CurveError::Convergence {
            tenor,
            iterations,
            residual,
        },
        MathError::InvalidBracket { a, b, fa, fb } => CurveError::RootNotBracketed {
            tenor,
            lo: a,
            hi: b,
            f_lo: fa,
            f_hi: fb,
        },
        other => CurveError::invalid_value(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounding::Compounding;
    use approx::assert_relative_eq;

    fn quotes(pairs: &[(f64, f64)]) -> QuoteSet {
        QuoteSet::new(pairs.iter().map(|&(t, r)| Quote::new(t, r)).collect()).unwrap()
    }

    #[test]
    fn test_single_quote_exact_zero() {
        // The floating leg telescopes, so the 1Y pillar solves to exactly
        // 1 / (1 + r) and the annual zero equals the quote.
        let curve = Bootstrapper::new(Discounting::SelfDiscounting)
            .bootstrap(&quotes(&[(1.0, 0.03)]))
            .unwrap();

        assert_relative_eq!(
            curve.discount_factor(1.0).unwrap(),
            1.0 / 1.03,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.zero_rate(1.0, Compounding::Annual).unwrap(),
            0.03,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_upward_curve_monotone_dfs() {
        let curve = Bootstrapper::new(Discounting::SelfDiscounting)
            .bootstrap(&quotes(&[(1.0, 0.03), (5.0, 0.04), (10.0, 0.05)]))
            .unwrap();

        let mut prev = 1.0;
        for p in curve.pillars() {
            assert!(
                p.discount_factor < prev,
                "DF must fall: {} at t={}",
                p.discount_factor,
                p.time
            );
            prev = p.discount_factor;
        }
    }

    #[test]
    fn test_calibrating_swaps_reprice() {
        let pairs = [(1.0, 0.03), (2.0, 0.034), (5.0, 0.04), (10.0, 0.05)];
        let curve = Bootstrapper::new(Discounting::SelfDiscounting)
            .bootstrap(&quotes(&pairs))
            .unwrap();

        for (tenor, rate) in pairs {
            let swap = SwapDefinition {
                notional: 1.0,
                tenor,
                fixed_rate: rate,
                direction: Direction::ReceiveFixed,
                fixed_frequency: Frequency::Annual,
                float_frequency: Frequency::Quarterly,
            };
            let price = price_swap(&swap, &curve, &curve).unwrap();
            assert!(
                price.npv.abs() < 1e-10,
                "swap {tenor}Y reprices to {}",
                price.npv
            );
        }
    }

    #[test]
    fn test_arbitrage_quotes_rejected() {
        // A deeply negative 5Y rate forces DF(5) above DF(1); the engine
        // finds the root and rejects the ordering violation.
        let result = Bootstrapper::new(Discounting::SelfDiscounting)
            .bootstrap(&quotes(&[(1.0, 0.05), (5.0, -0.02)]));

        assert!(matches!(
            result,
            Err(CurveError::NonMonotonicCurve { tenor, .. }) if tenor == 5.0
        ));
    }

    #[test]
    fn test_negative_rates_allowed_when_unenforced() {
        let config = BootstrapConfig {
            enforce_monotonicity: false,
            ..BootstrapConfig::default()
        };
        let curve = Bootstrapper::new(Discounting::SelfDiscounting)
            .with_config(config)
            .bootstrap(&quotes(&[(1.0, -0.005), (5.0, -0.002)]))
            .unwrap();

        // Negative rates imply DF > 1 at the short end.
        assert!(curve.discount_factor(1.0).unwrap() > 1.0);
    }

    #[test]
    fn test_unpriceable_quote_not_bracketed() {
        // A rate below -1/tau has no discount factor solution at all.
        let result = Bootstrapper::new(Discounting::SelfDiscounting)
            .bootstrap(&quotes(&[(1.0, -1.5)]));

        assert!(matches!(
            result,
            Err(CurveError::RootNotBracketed { .. })
        ));
    }

    #[test]
    fn test_external_discounting_changes_projection_curve() {
        let market = quotes(&[(1.0, 0.03), (5.0, 0.04)]);

        let self_curve = Bootstrapper::new(Discounting::SelfDiscounting)
            .bootstrap(&market)
            .unwrap();

        // Discount on a cheaper funding curve: projected forwards must rise
        // to keep the par swaps at zero, so the forward curve's DFs fall.
        let funding = crate::curves::compose(
            &self_curve,
            &crate::quotes::SpreadTerm::flat_bps(80.0),
            InterpolationMethod::LogLinearDiscount,
        )
        .unwrap();
        let projected = Bootstrapper::new(Discounting::External(Arc::new(funding)))
            .bootstrap(&market)
            .unwrap();

        let df_self = self_curve.discount_factor(5.0).unwrap();
        let df_proj = projected.discount_factor(5.0).unwrap();
        assert!(
            (df_self - df_proj).abs() > 1e-8,
            "external discounting should move the projection curve"
        );
    }

    #[test]
    fn test_bracket_straddles_previous_df() {
        let (lo, hi) = pillar_bracket(0.95, 1.0, 2.0, 0.04);
        assert!(lo < 0.95);
        assert!(hi > 0.95);
        assert!(lo > 0.0);
    }
}
