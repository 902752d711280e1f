//! Discount curve bootstrapping, spread composition and swap pricing.
//!
//! The crate builds interest-rate term structures from market quotes:
//!
//! - [`DiscountCurve`]: an immutable, pillar-backed curve behind the
//!   [`Curve`] trait
//! - [`compose`]: layers a funding spread over a base curve
//! - [`Bootstrapper`]: sequential par-swap bootstrap, self- or
//!   externally-discounted
//! - [`price_swap`]: multicurve swap pricing with decoupled projection and
//!   discounting
//! - [`CcsBootstrap`]: foreign discount curve from cross-currency quotes
//!   via covered interest parity
//!
//! All times are year fractions from an implicit valuation point at t = 0;
//! calendar and day count conversion belong to the quote source.
//!
//! # Example
//!
//! ```rust
//! use strata_curves::prelude::*;
//!
//! let quotes = QuoteSet::new(vec![
//!     Quote::new(1.0, 0.03),
//!     Quote::new(5.0, 0.04),
//!     Quote::new(10.0, 0.05),
//! ])?;
//!
//! let ois = Bootstrapper::new(Discounting::SelfDiscounting).bootstrap(&quotes)?;
//! let funding = compose(&ois, &SpreadTerm::flat_bps(50.0),
//!     InterpolationMethod::LogLinearDiscount)?;
//!
//! assert!(funding.discount_factor(5.0)? < ois.discount_factor(5.0)?);
//! # Ok::<(), strata_curves::CurveError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod bootstrap;
pub mod compounding;
pub mod curves;
pub mod error;
pub mod interpolation;
pub mod quotes;
pub mod schedule;
pub mod swap;
pub mod traits;

pub use bootstrap::{BootstrapConfig, Bootstrapper, CcsBootstrap, Discounting};
pub use compounding::Compounding;
pub use curves::{compose, compose_on_grid, DiscountCurve, Pillar};
pub use error::{CurveError, CurveResult};
pub use interpolation::InterpolationMethod;
pub use quotes::{CcsQuote, Quote, QuoteSet, SpreadPoint, SpreadTerm};
pub use schedule::{accrual_periods, Frequency, Period};
pub use swap::{price_swap, Direction, SwapDefinition, SwapPrice};
pub use traits::Curve;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::bootstrap::parallel::{bootstrap_all, BootstrapRequest};
    pub use crate::bootstrap::{BootstrapConfig, Bootstrapper, CcsBootstrap, Discounting};
    pub use crate::compounding::Compounding;
    pub use crate::curves::{compose, compose_on_grid, DiscountCurve, Pillar};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::interpolation::InterpolationMethod;
    pub use crate::quotes::{CcsQuote, Quote, QuoteSet, SpreadPoint, SpreadTerm};
    pub use crate::schedule::Frequency;
    pub use crate::swap::{price_swap, Direction, SwapDefinition, SwapPrice};
    pub use crate::traits::Curve;
}
