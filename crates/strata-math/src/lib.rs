//! # Strata Math
//!
//! Numerical utilities for the Strata curve bootstrapping library.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketed root-finding (bisection, Brent) used by the
//!   pillar-by-pillar curve bootstrap
//! - **Interpolation**: Linear and log-linear interpolation over sparse
//!   pillar data
//!
//! Everything here is pure computation over `f64`: no dates, no market
//! conventions, no I/O. The domain layer lives in `strata-curves`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{SolverConfig, SolverResult};
