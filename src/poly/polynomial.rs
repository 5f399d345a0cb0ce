use num_complex::Complex64;

use crate::foundation::error::{GlowError, GlowResult};

/// Polynomial with complex coefficients, constant term first.
///
/// Invariant: at least one coefficient and a non-zero leading coefficient, so
/// `degree() == coefficients().len() - 1`. Values are immutable; [`Polynomial::deflate`]
/// returns a fresh, strictly smaller polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Complex64>,
}

impl Polynomial {
    /// Build a polynomial from constant-first coefficients.
    ///
    /// Trailing zeros are not stripped: a zero leading coefficient is rejected.
    pub fn new(coeffs: Vec<Complex64>) -> GlowResult<Self> {
        let Some(leading) = coeffs.last() else {
            return Err(GlowError::validation(
                "polynomial needs at least one coefficient",
            ));
        };
        if *leading == Complex64::new(0.0, 0.0) {
            return Err(GlowError::validation(
                "polynomial leading coefficient must be non-zero",
            ));
        }
        Ok(Self { coeffs })
    }

    /// Build a polynomial from constant-first integer coefficients.
    pub fn from_integers(coeffs: &[i64]) -> GlowResult<Self> {
        Self::new(
            coeffs
                .iter()
                .map(|&c| Complex64::new(c as f64, 0.0))
                .collect(),
        )
    }

    pub(crate) fn from_raw(coeffs: Vec<Complex64>) -> Self {
        debug_assert!(coeffs.last().is_some_and(|c| c.norm() != 0.0));
        Self { coeffs }
    }

    /// Highest exponent with a non-zero coefficient.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Constant-first coefficients.
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Coefficient of the highest-degree term.
    pub fn leading(&self) -> Complex64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Evaluate `f(z)` and `f'(z)` in one descending Horner pass.
    pub fn eval_with_derivative(&self, z: Complex64) -> (Complex64, Complex64) {
        horner_with_derivative(&self.coeffs, z)
    }

    /// `sum(|a_k| * r^k)`, the scale of rounding error when evaluating at `|z| == r`.
    pub fn magnitude_bound(&self, r: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * r + c.norm())
    }

    /// Divide out `(x - r)` by synthetic division. The remainder is discarded.
    ///
    /// A degree-0 polynomial has nothing to divide and is returned unchanged.
    pub fn deflate(&self, r: Complex64) -> Self {
        let degree = self.degree();
        if degree == 0 {
            return self.clone();
        }
        let mut reduced = vec![Complex64::new(0.0, 0.0); degree];
        reduced[degree - 1] = self.coeffs[degree];
        for i in (0..degree - 1).rev() {
            reduced[i] = self.coeffs[i + 1] + r * reduced[i + 1];
        }
        Self::from_raw(reduced)
    }
}

pub(crate) fn horner_with_derivative(coeffs: &[Complex64], z: Complex64) -> (Complex64, Complex64) {
    let degree = coeffs.len() - 1;
    let mut f = coeffs[degree];
    let mut df = Complex64::new(0.0, 0.0);
    for &c in coeffs[..degree].iter().rev() {
        df = df * z + f;
        f = f * z + c;
    }
    (f, df)
}

#[cfg(test)]
#[path = "../../tests/unit/poly/polynomial.rs"]
mod tests;
