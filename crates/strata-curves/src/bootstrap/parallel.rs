//! Parallel construction of independent curves.
//!
//! Pillar solving within one curve is strictly sequential, but distinct
//! curves share nothing and can be built concurrently. Typical use: the
//! per-currency projection curves of a multi-currency system, rebuilt
//! together on a market data refresh.

use rayon::prelude::*;

use crate::bootstrap::sequential::{BootstrapConfig, Bootstrapper, Discounting};
use crate::curves::DiscountCurve;
use crate::error::CurveResult;
use crate::quotes::QuoteSet;

/// One curve to build: its quotes and its discounting mode.
#[derive(Debug, Clone)]
pub struct BootstrapRequest {
    /// Par quotes for the curve.
    pub quotes: QuoteSet,
    /// Discounting mode for the engine.
    pub discounting: Discounting,
}

/// Bootstraps independent curves in parallel.
///
/// Results come back in request order; each request fails or succeeds on
/// its own.
#[must_use]
pub fn bootstrap_all(
    requests: &[BootstrapRequest],
    config: &BootstrapConfig,
) -> Vec<CurveResult<DiscountCurve>> {
    requests
        .par_iter()
        .map(|request| {
            Bootstrapper::new(request.discounting.clone())
                .with_config(config.clone())
                .bootstrap(&request.quotes)
        })
        .collect()
}
