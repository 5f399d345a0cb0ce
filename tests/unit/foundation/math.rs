use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn unit_square_samples_stay_in_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..10_000 {
        let z = random_unit_square(&mut rng);
        assert!((-1.0..1.0).contains(&z.re));
        assert!((-1.0..1.0).contains(&z.im));
    }
}

#[test]
fn mix_seed_is_deterministic_and_separates_streams() {
    assert_eq!(mix_seed(42, 0), mix_seed(42, 0));
    let seeds: Vec<u64> = (0..64).map(|i| mix_seed(42, i)).collect();
    let mut dedup = seeds.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), seeds.len());
    assert_ne!(mix_seed(1, 0), mix_seed(2, 0));
}
