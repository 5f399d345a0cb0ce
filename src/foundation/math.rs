use num_complex::Complex64;
use rand::Rng;

/// Uniform sample from the square `[-1, 1) x [-1, 1)i`.
pub(crate) fn random_unit_square<R: Rng + ?Sized>(rng: &mut R) -> Complex64 {
    Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
}

/// SplitMix64 finalizer applied to `base + (stream + 1) * golden_gamma`.
pub(crate) fn mix_seed(base: u64, stream: u64) -> u64 {
    let mut z = base.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
