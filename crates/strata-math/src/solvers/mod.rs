//! Bracketed root-finding algorithms.
//!
//! The curve bootstrap solves one nonlinear equation per pillar: find the
//! discount factor that reprices a par instrument to zero. Both solvers here
//! require a bracket `[a, b]` with `f(a) * f(b) <= 0`, which the bootstrap
//! derives from the previous pillar and the quoted rate. Bracketing is what
//! makes the procedure robust to arbitrary instrument cashflow structures,
//! with no closed-form inversion needed.
//!
//! - [`brent`]: superlinear, the default for pillar solving
//! - [`bisection`]: linear but unconditionally reliable; kept as a reference
//!   method and for pathological objectives

mod bisection;
mod brent;

pub use bisection::bisection;
pub use brent::brent;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence (on the residual and the bracket width).
    pub tolerance: f64,
    /// Maximum number of iterations; exceeding it is a reported error.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

/// Result of a root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at the root).
    pub residual: f64,
}
