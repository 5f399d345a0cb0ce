//! Duplicate-free enumeration of integer polynomials by height.
//!
//! A height-`h` polynomial is described by a bit pattern of `h - 1` bits, read from the
//! most significant bit down: a set bit adds one unit of magnitude to the current
//! coefficient slot, a clear bit moves on to the next slot. Slot 0 is the constant term
//! and the last slot touched is the leading term, so every emitted polynomial satisfies
//! `degree + sum(|a_k|) == h - 1`.
//!
//! Only odd patterns are visited (the last bit lands on the leading slot, which therefore
//! never ends up zero). Each decoded magnitude vector is then expanded over every sign
//! choice of its non-zero, non-leading coefficients. The leading coefficient stays
//! positive: `p` and `-p` share their roots, so only one of each pair is produced.

use std::ops::RangeInclusive;

use num_complex::Complex64;

use crate::foundation::error::{GlowError, GlowResult};
use crate::poly::polynomial::Polynomial;

/// Smallest height accepted by the enumerator.
pub const MIN_HEIGHT: u32 = 2;

/// Largest height accepted by the enumerator (patterns are stored in a `u64`).
pub const MAX_HEIGHT: u32 = 63;

/// One polynomial plus the metadata carried through root finding.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkItem {
    /// The polynomial to solve.
    pub polynomial: Polynomial,
    /// Height the polynomial was generated at.
    pub height: u32,
    /// Degree of `polynomial`.
    pub degree: usize,
    /// Absolute value of the leading coefficient.
    pub leading_magnitude: u32,
}

/// Validate a height range against [`MIN_HEIGHT`] and [`MAX_HEIGHT`].
pub fn validate_heights(heights: &RangeInclusive<u32>) -> GlowResult<()> {
    let (start, end) = (*heights.start(), *heights.end());
    if start > end {
        return Err(GlowError::validation(format!(
            "height range {start}..={end} is empty"
        )));
    }
    if start < MIN_HEIGHT {
        return Err(GlowError::validation(format!(
            "height must be at least {MIN_HEIGHT} (got {start})"
        )));
    }
    if end > MAX_HEIGHT {
        return Err(GlowError::validation(format!(
            "height must be at most {MAX_HEIGHT} (got {end})"
        )));
    }
    Ok(())
}

/// Lazy, restartable stream of [`WorkItem`]s over a range of heights.
///
/// Heights are visited in ascending order; within a height, patterns are visited from the
/// largest odd pattern down to 1. Cloning the enumerator restarts from its current
/// position, so a fresh clone of a new enumerator replays the whole sequence.
#[derive(Clone, Debug)]
pub struct PolynomialEnumerator {
    height: u32,
    end: u32,
    next_pattern: Option<u64>,
    shape: Option<Shape>,
    next_signs: u64,
}

impl PolynomialEnumerator {
    /// Enumerate heights `2..=max_height`.
    pub fn new(max_height: u32) -> GlowResult<Self> {
        Self::with_heights(MIN_HEIGHT..=max_height)
    }

    /// Enumerate an explicit slice of heights.
    pub fn with_heights(heights: RangeInclusive<u32>) -> GlowResult<Self> {
        validate_heights(&heights)?;
        let (start, end) = heights.into_inner();
        Ok(Self {
            height: start,
            end,
            next_pattern: Some(first_pattern(start)),
            shape: None,
            next_signs: 0,
        })
    }

    fn advance_pattern(&mut self) -> Option<(u64, u32)> {
        while self.height <= self.end {
            if let Some(pattern) = self.next_pattern {
                self.next_pattern = pattern.checked_sub(2);
                return Some((pattern, self.height));
            }
            self.height += 1;
            if self.height <= self.end {
                self.next_pattern = Some(first_pattern(self.height));
            }
        }
        None
    }
}

impl Iterator for PolynomialEnumerator {
    type Item = WorkItem;

    fn next(&mut self) -> Option<WorkItem> {
        loop {
            if let Some(shape) = self.shape.as_ref() {
                if self.next_signs < shape.sign_combinations() {
                    let item = shape.build(self.next_signs);
                    self.next_signs += 1;
                    return Some(item);
                }
                self.shape = None;
            }

            let (pattern, height) = self.advance_pattern()?;
            if let Some(shape) = Shape::decode(pattern, height) {
                self.shape = Some(shape);
                self.next_signs = 0;
            }
        }
    }
}

fn first_pattern(height: u32) -> u64 {
    (1u64 << (height - 1)) - 1
}

/// Decoded coefficient magnitudes of one pattern.
#[derive(Clone, Debug)]
struct Shape {
    height: u32,
    mags: Vec<u32>,
    non_zero: u32,
}

impl Shape {
    /// Returns `None` for patterns that decode to a constant.
    fn decode(pattern: u64, height: u32) -> Option<Self> {
        let bits = height - 1;
        let mut mags = vec![0u32; height as usize];
        let mut slot = 0usize;
        for j in (0..bits).rev() {
            if (pattern >> j) & 1 == 1 {
                mags[slot] += 1;
            } else {
                slot += 1;
            }
        }
        if slot == 0 {
            return None;
        }
        mags.truncate(slot + 1);
        let non_zero = mags.iter().filter(|&&m| m != 0).count() as u32;
        Some(Self {
            height,
            mags,
            non_zero,
        })
    }

    fn sign_combinations(&self) -> u64 {
        1u64 << (self.non_zero - 1)
    }

    fn build(&self, signs: u64) -> WorkItem {
        let degree = self.mags.len() - 1;
        let mut coeffs = Vec::with_capacity(self.mags.len());
        let mut sign_bit = 0u32;
        for (j, &m) in self.mags.iter().enumerate() {
            let mut v = f64::from(m);
            if m != 0 && j != degree {
                if (signs >> sign_bit) & 1 == 1 {
                    v = -v;
                }
                sign_bit += 1;
            }
            coeffs.push(Complex64::new(v, 0.0));
        }
        WorkItem {
            polynomial: Polynomial::from_raw(coeffs),
            height: self.height,
            degree,
            leading_magnitude: self.mags[degree],
        }
    }
}

/// Number of polynomials emitted at height `h`, computed without enumerating them.
///
/// Saturates at `u128::MAX`.
pub fn count_for_height(height: u32) -> u128 {
    if height < MIN_HEIGHT {
        return 0;
    }
    let total = (height - 1) as usize;

    // ways[s][m]: weighted count of spreading magnitude `m` over `s` non-leading slots,
    // where a non-zero slot weighs 2 (its two signs) and a zero slot weighs 1.
    let mut ways = vec![vec![0u128; total + 1]; total + 1];
    ways[0][0] = 1;
    for s in 1..=total {
        let mut prefix = 0u128;
        for m in 0..=total {
            ways[s][m] = ways[s - 1][m].saturating_add(prefix.saturating_mul(2));
            prefix = prefix.saturating_add(ways[s - 1][m]);
        }
    }

    let mut count = 0u128;
    for degree in 1..total {
        let budget = total - degree;
        for leading in 1..=budget {
            count = count.saturating_add(ways[degree][budget - leading]);
        }
    }
    count
}

#[cfg(test)]
#[path = "../../tests/unit/poly/enumerate.rs"]
mod tests;
