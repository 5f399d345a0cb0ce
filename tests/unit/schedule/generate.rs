use super::*;
use crate::poly::enumerate::PolynomialEnumerator;
use crate::poly::polynomial::Polynomial;

fn seeded(parallel: bool) -> GenerateOpts {
    GenerateOpts {
        parallel,
        workers: Some(3),
        seed: Some(99),
        ..GenerateOpts::default()
    }
}

#[test]
fn invalid_heights_fail_before_any_work() {
    assert!(matches!(
        generate(1, &GenerateOpts::default()),
        Err(GlowError::Validation(_))
    ));
    assert!(matches!(
        generate(64, &GenerateOpts::default()),
        Err(GlowError::Validation(_))
    ));
    assert!(generate_heights(5..=4, &GenerateOpts::default()).is_err());
}

#[test]
fn zero_workers_is_rejected() {
    let opts = GenerateOpts {
        workers: Some(0),
        ..GenerateOpts::default()
    };
    assert!(matches!(opts.validate(), Err(GlowError::Validation(_))));
}

#[test]
fn every_polynomial_is_processed_exactly_once() {
    let expected = PolynomialEnumerator::new(8).unwrap().count() as u64;
    for parallel in [false, true] {
        let generation = generate(8, &seeded(parallel)).unwrap();
        assert_eq!(generation.stats.polynomials, expected);
        assert_eq!(generation.stats.roots, generation.points.len() as u64);
    }
}

#[test]
fn worker_count_is_reported() {
    assert_eq!(generate(5, &seeded(true)).unwrap().stats.workers, 3);
    assert_eq!(generate(5, &seeded(false)).unwrap().stats.workers, 1);
}

#[test]
fn tiny_queues_still_drain_completely() {
    let opts = GenerateOpts {
        work_capacity: 1,
        result_capacity: 1,
        ..seeded(true)
    };
    let expected = PolynomialEnumerator::new(7).unwrap().count() as u64;
    assert_eq!(generate(7, &opts).unwrap().stats.polynomials, expected);
}

#[test]
fn height_two_yields_an_empty_generation() {
    let generation = generate(2, &seeded(true)).unwrap();
    assert!(generation.points.is_empty());
    assert_eq!(generation.stats.polynomials, 0);
}

#[test]
fn points_carry_their_polynomial_metadata() {
    let item = WorkItem {
        polynomial: Polynomial::from_integers(&[0, 2]).unwrap(),
        height: 4,
        degree: 1,
        leading_magnitude: 2,
    };
    let batch = RootPoint::batch(&item, vec![Complex64::new(0.0, 0.0)]);
    assert_eq!(
        batch,
        vec![RootPoint {
            z: Complex64::new(0.0, 0.0),
            height: 4,
            degree: 1,
            leading_magnitude: 2,
        }]
    );
}
