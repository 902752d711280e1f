//! Curve bootstrap engines.
//!
//! [`Bootstrapper`] builds a discount curve pillar by pillar from par swap
//! quotes; [`CcsBootstrap`] inverts covered interest parity to build a
//! foreign discount curve from cross-currency swap quotes. Each pillar is a
//! single bracketed 1-D root-find; there is no global optimization.

mod cross_currency;
pub mod parallel;
mod sequential;

pub use cross_currency::CcsBootstrap;
pub use sequential::{BootstrapConfig, Bootstrapper, Discounting};
