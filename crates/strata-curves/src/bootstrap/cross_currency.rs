//! Cross-currency discount curve bootstrap.
//!
//! Inverts covered interest parity quote by quote: a cross-currency swap
//! exchanging domestic fixed for foreign floating is worth zero at
//! inception, so the foreign leg's PV (in foreign currency) must equal the
//! domestic leg's PV divided by the spot FX rate. With the domestic discount
//! curve and the foreign projection curve given, the only unknown per tenor
//! is the foreign *discount* factor, solved with the same bracketed
//! root-find as the single-currency engine.
//!
//! Both legs exchange notional at maturity; the foreign notional is the
//! domestic notional converted at spot.

use std::cell::RefCell;
use std::sync::Arc;

use log::debug;
use strata_math::solvers::brent;

use crate::bootstrap::sequential::{map_solver_error, pillar_bracket, BootstrapConfig};
use crate::compounding::Compounding;
use crate::curves::{DiscountCurve, Pillar};
use crate::error::{CurveError, CurveResult};
use crate::quotes::{validate_tenor_grid, CcsQuote};
use crate::schedule::accrual_periods;
use crate::traits::Curve;

/// Cross-currency bootstrap engine.
///
/// Builds the foreign discount curve implied by cross-currency swap quotes,
/// a given domestic discount curve, a given foreign projection curve, and
/// the FX spot rate (domestic units per one foreign unit).
pub struct CcsBootstrap {
    domestic_discount: Arc<dyn Curve>,
    foreign_projection: Arc<dyn Curve>,
    spot_fx: f64,
    config: BootstrapConfig,
}

impl CcsBootstrap {
    /// Creates the engine.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidFxRate`] if `spot_fx` is not positive
    /// and finite. The check runs here, before any root-finding.
    pub fn new(
        domestic_discount: Arc<dyn Curve>,
        foreign_projection: Arc<dyn Curve>,
        spot_fx: f64,
        config: BootstrapConfig,
    ) -> CurveResult<Self> {
        if spot_fx <= 0.0 || !spot_fx.is_finite() {
            return Err(CurveError::InvalidFxRate { rate: spot_fx });
        }
        Ok(Self {
            domestic_discount,
            foreign_projection,
            spot_fx,
            config,
        })
    }

    /// Bootstraps the foreign discount curve from the quotes.
    ///
    /// # Errors
    ///
    /// Returns the quote-grid validation errors, plus the per-pillar failure
    /// taxonomy of the sequential engine: [`CurveError::RootNotBracketed`],
    /// [`CurveError::Convergence`] and [`CurveError::NonMonotonicCurve`].
    pub fn bootstrap(&self, quotes: &[CcsQuote]) -> CurveResult<DiscountCurve> {
        if quotes.is_empty() {
            return Err(CurveError::EmptyQuotes);
        }
        validate_tenor_grid(quotes.iter().map(|q| q.tenor))?;

        let mut pillars: Vec<Pillar> = Vec::with_capacity(quotes.len());
        for quote in quotes {
            let pillar = self.solve_pillar(&pillars, quote)?;
            pillars.push(pillar);
        }
        DiscountCurve::from_pillars(pillars, self.config.interpolation)
    }

    fn solve_pillar(&self, solved: &[Pillar], quote: &CcsQuote) -> CurveResult<Pillar> {
        // Parity target in foreign currency, fixed for this pillar.
        let target = self.domestic_leg_pv(quote)? / self.spot_fx;

        let (t_prev, df_prev) = solved
            .last()
            .map_or((0.0, 1.0), |p| (p.time, p.discount_factor));
        // The foreign curve's level is driven by the foreign market, not the
        // domestic fixed rate; seed the bracket from whichever is larger.
        let foreign_zero = self
            .foreign_projection
            .zero_rate(quote.tenor, Compounding::Continuous)?;
        let rate_hint = quote.domestic_fixed_rate.abs().max(foreign_zero.abs());
        let (lo, hi) = pillar_bracket(df_prev, t_prev, quote.tenor, rate_hint);

        let failure: RefCell<Option<CurveError>> = RefCell::new(None);
        let objective = |df: f64| match self.foreign_leg_pv(solved, quote.tenor, df) {
            Ok(pv) => pv - target,
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
            "solved foreign pillar t={} df={:.12} in {} iterations",
            quote.tenor, df, result.iterations
        );
        Ok(Pillar::new(quote.tenor, df))
    }

    /// Domestic fixed leg PV on unit notional, terminal notional included.
    fn domestic_leg_pv(&self, quote: &CcsQuote) -> CurveResult<f64> {
        let mut pv = 0.0;
        for period in accrual_periods(quote.tenor, self.config.fixed_frequency)? {
            pv += quote.domestic_fixed_rate
                * period.year_fraction()
                * self.domestic_discount.discount_factor(period.end)?;
        }
        pv += self.domestic_discount.discount_factor(quote.tenor)?;
        Ok(pv)
    }

    /// Foreign floating leg PV with a tentative pillar appended, terminal
    /// notional included. Notional is 1 / spot in foreign units; forwards
    /// come off the foreign projection curve, discounting off the candidate.
    fn foreign_leg_pv(&self, solved: &[Pillar], tenor: f64, df: f64) -> CurveResult<f64> {
        let mut pillars = Vec::with_capacity(solved.len() + 1);
        pillars.extend_from_slice(solved);
        pillars.push(Pillar::new(tenor, df));
        let candidate = DiscountCurve::from_pillars(pillars, self.config.interpolation)?;

        let notional = 1.0 / self.spot_fx;
        let mut pv = 0.0;
        for period in accrual_periods(tenor, self.config.float_frequency)? {
            let fwd = self.foreign_projection.forward_rate(
                period.start,
                period.end,
                Compounding::Simple,
            )?;
            pv += notional
                * fwd
                * period.year_fraction()
                * candidate.discount_factor(period.end)?;
        }
        pv += notional * candidate.discount_factor(tenor)?;
        Ok(pv)
    }
}
