//! Curve implementations.

mod discount;
mod spread;

pub use discount::{DiscountCurve, Pillar};
pub use spread::{compose, compose_on_grid};
