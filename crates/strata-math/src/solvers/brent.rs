//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Brent's root-finding algorithm.
///
/// Combines bisection with the secant method and inverse quadratic
/// interpolation: superlinear convergence on smooth objectives while
/// retaining the bracketing guarantee of bisection. This is the default
/// solver for per-pillar discount factor solving.
///
/// Requires: `f(a) * f(b) <= 0`.
///
/// # Errors
///
/// Returns [`MathError::InvalidBracket`] if the endpoints have the same
/// sign, or [`MathError::ConvergenceFailed`] if the iteration budget is
/// exhausted before the tolerance is met.
///
/// # Example
///
/// ```rust
/// use strata_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // b holds the current best estimate, a the counterpoint, c the previous b.
    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = b - a;

    for iteration in 0..config.max_iterations {
        // Keep the root between b and c with |f(b)| <= |f(c)|.
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.tolerance;
        let half = 0.5 * (c - b);

        if half.abs() <= tol || fb.abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Attempt interpolation: secant when two distinct points are
            // available, inverse quadratic with three.
            let s = fb / fa;
            let (mut p, mut q) = if (a - c).abs() < f64::EPSILON {
                (2.0 * half * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * half * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            // Accept only if the step stays inside the bracket and shrinks
            // faster than bisection would; otherwise bisect.
            let min1 = 3.0 * half * q - (tol * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = half;
                e = d;
            }
        } else {
            d = half;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol {
            b += d;
        } else {
            b += if half > 0.0 { tol } else { -tol };
        }
        fb = f(b);
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        fb.abs(),
    ))
}
