use num_complex::Complex64;
use rand::Rng;

use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::math::random_unit_square;
use crate::poly::polynomial::Polynomial;

/// Tuning knobs for the Newton-Raphson search.
///
/// An iterate is accepted when any of three tests passes: the absolute step drops below
/// `tolerance`, the step stops shrinking while below `stall_tolerance` (relative), or
/// `|f(z)|` is within `residual_tolerance` of the rounding bound `sum(|a_k| |z|^k)`.
/// The last one is what settles repeated roots, where Newton steps stay at the noise
/// floor of the evaluation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NewtonOpts {
    /// Hard cap on iterations for one root.
    pub max_iterations: u32,
    /// Jump to a fresh random start every this many iterations.
    pub restart_interval: u32,
    /// Absolute step size below which the iterate is accepted.
    pub tolerance: f64,
    /// Relative step size below which a non-shrinking step is accepted.
    pub stall_tolerance: f64,
    /// Relative residual below which the iterate is accepted.
    pub residual_tolerance: f64,
    /// `|f'(z)|` below this restarts the search unless `f(z)` has vanished too.
    pub derivative_epsilon: f64,
}

impl Default for NewtonOpts {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            restart_interval: 500,
            tolerance: 1e-20,
            stall_tolerance: 1e-12,
            residual_tolerance: 1e-14,
            derivative_epsilon: 1e-15,
        }
    }
}

impl NewtonOpts {
    /// Reject non-positive tolerances and a zero restart interval.
    pub fn validate(&self) -> GlowResult<()> {
        if self.restart_interval == 0 {
            return Err(GlowError::validation(
                "newton restart_interval must be >= 1",
            ));
        }
        for (name, v) in [
            ("tolerance", self.tolerance),
            ("stall_tolerance", self.stall_tolerance),
            ("residual_tolerance", self.residual_tolerance),
            ("derivative_epsilon", self.derivative_epsilon),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(GlowError::validation(format!(
                    "newton {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Find up to `degree` roots of `poly` by Newton iteration with deflation.
///
/// Each root is searched on the current (deflated) polynomial from a random start drawn
/// from `rng`. A zero constant term is divided out exactly as a root at the origin. A
/// search that hits the iteration cap ends the process early, so fewer roots than the
/// degree may be returned; no error is ever raised.
pub fn find_roots<R: Rng + ?Sized>(
    poly: &Polynomial,
    opts: &NewtonOpts,
    rng: &mut R,
) -> Vec<Complex64> {
    let mut roots = Vec::with_capacity(poly.degree());
    let mut current = poly.clone();
    let zero = Complex64::new(0.0, 0.0);
    while current.degree() > 1 {
        if current.coefficients()[0] == zero {
            roots.push(zero);
            current = current.deflate(zero);
            continue;
        }
        let Some(root) = newton_search(&current, opts, rng) else {
            return roots;
        };
        roots.push(root);
        current = current.deflate(root);
    }
    if current.degree() == 1
        && let Some(root) = linear_root(current.coefficients())
    {
        roots.push(root);
    }
    roots
}

/// Raw-slice form of [`find_roots`]: solves the polynomial `coeffs[0..=degree]`.
///
/// Inputs that do not describe a polynomial of that degree (short slice, zero leading
/// coefficient) yield no roots.
pub fn find_roots_coeffs<R: Rng + ?Sized>(
    coeffs: &[Complex64],
    degree: usize,
    opts: &NewtonOpts,
    rng: &mut R,
) -> Vec<Complex64> {
    if degree == 0 || coeffs.len() <= degree {
        return Vec::new();
    }
    match Polynomial::new(coeffs[..=degree].to_vec()) {
        Ok(poly) => find_roots(&poly, opts, rng),
        Err(_) => Vec::new(),
    }
}

fn linear_root(coeffs: &[Complex64]) -> Option<Complex64> {
    let zero = Complex64::new(0.0, 0.0);
    if coeffs[1] == zero {
        return None;
    }
    Some(-coeffs[0] / coeffs[1])
}

fn newton_search<R: Rng + ?Sized>(
    poly: &Polynomial,
    opts: &NewtonOpts,
    rng: &mut R,
) -> Option<Complex64> {
    let restart_interval = opts.restart_interval.max(1);
    let mut root = random_unit_square(rng);
    let mut prev_step = f64::INFINITY;

    for iter in 0..opts.max_iterations {
        let old = root;
        let (f, df) = poly.eval_with_derivative(root);
        let settled = f.norm() <= opts.residual_tolerance * poly.magnitude_bound(root.norm());
        if df.norm() < opts.derivative_epsilon {
            // A flat spot is only a root if `f` vanishes there too.
            if settled || f.norm() < opts.tolerance {
                return Some(root);
            }
            root = random_unit_square(rng);
            prev_step = f64::INFINITY;
            continue;
        }

        root -= f / df;
        if !root.is_finite() {
            root = random_unit_square(rng);
            prev_step = f64::INFINITY;
            continue;
        }
        if settled {
            return Some(root);
        }

        let step = (root - old).norm();
        if step < opts.tolerance {
            return Some(root);
        }
        if step <= opts.stall_tolerance * root.norm().max(1.0) && step >= prev_step {
            return Some(root);
        }
        prev_step = step;

        if iter > 0 && iter % restart_interval == 0 {
            root = random_unit_square(rng);
            prev_step = f64::INFINITY;
        }
    }

    None
}

#[cfg(test)]
#[path = "../../tests/unit/roots/newton.rs"]
mod tests;
