use std::ops::RangeInclusive;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::foundation::math::mix_seed;
use crate::poly::enumerate::PolynomialEnumerator;
use crate::roots::newton::find_roots;
use crate::schedule::generate::{GenerateOpts, Generation, HeightProgress, RootPoint};

/// Single-threaded enumeration + root finding. Heights must already be validated.
///
/// Produces the same point multiset as the worker pool (up to floating-point jitter) and
/// serves as its reference implementation.
pub(crate) fn generate_sequential(
    heights: RangeInclusive<u32>,
    opts: &GenerateOpts,
) -> Generation {
    let last_height = *heights.end();
    let mut rng = ChaCha8Rng::seed_from_u64(mix_seed(opts.resolved_seed(), 0));
    let mut progress = HeightProgress::new(last_height);
    let mut generation = Generation::default();

    let Ok(enumerator) = PolynomialEnumerator::with_heights(heights) else {
        return generation;
    };
    for item in enumerator {
        progress.observe(item.height);
        let roots = find_roots(&item.polynomial, &opts.newton, &mut rng);
        generation.stats.polynomials += 1;
        generation.stats.roots += roots.len() as u64;
        generation.points.extend(RootPoint::batch(&item, roots));
    }

    generation.stats.workers = 1;
    generation
}
