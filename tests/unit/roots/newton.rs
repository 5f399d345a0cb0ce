use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;
use crate::poly::enumerate::PolynomialEnumerator;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn sorted(mut roots: Vec<Complex64>) -> Vec<Complex64> {
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    roots
}

fn assert_root_set(got: Vec<Complex64>, want: &[Complex64], tol: f64) {
    assert_eq!(got.len(), want.len(), "roots: {got:?}");
    for w in want {
        assert!(
            got.iter().any(|g| (g - w).norm() < tol),
            "missing root {w} in {got:?}"
        );
    }
}

#[test]
fn sqrt_two_roots_converge_for_many_seeds() {
    let p = Polynomial::from_integers(&[-2, 0, 1]).unwrap();
    let s = 2f64.sqrt();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let roots = find_roots(&p, &NewtonOpts::default(), &mut rng);
        assert_root_set(roots, &[c(s, 0.0), c(-s, 0.0)], 1e-9);
    }
}

#[test]
fn unit_imaginary_roots_converge_for_many_seeds() {
    let p = Polynomial::from_integers(&[1, 0, 1]).unwrap();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let roots = find_roots(&p, &NewtonOpts::default(), &mut rng);
        assert_root_set(roots, &[c(0.0, 1.0), c(0.0, -1.0)], 1e-9);
    }
}

#[test]
fn different_seeds_agree_on_the_root_set() {
    // (x - 1)(x - 2)(x + 3)(x^2 + x + 1)
    let p = Polynomial::from_integers(&[6, -1, -1, -6, 1, 1]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let reference = sorted(find_roots(&p, &NewtonOpts::default(), &mut rng));
    assert_eq!(reference.len(), 5);

    for seed in 1..30 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let roots = sorted(find_roots(&p, &NewtonOpts::default(), &mut rng));
        assert_root_set(roots, &reference, 1e-7);
    }
}

#[test]
fn roots_of_unity_are_found() {
    let p = Polynomial::from_integers(&[-1, 0, 0, 0, 0, 1]).unwrap();
    let want: Vec<Complex64> = (0..5)
        .map(|k| Complex64::from_polar(1.0, 2.0 * std::f64::consts::PI * k as f64 / 5.0))
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    assert_root_set(find_roots(&p, &NewtonOpts::default(), &mut rng), &want, 1e-8);
}

#[test]
fn linear_case_is_closed_form() {
    let p = Polynomial::from_integers(&[3, 2]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(find_roots(&p, &NewtonOpts::default(), &mut rng), vec![c(-1.5, 0.0)]);
}

#[test]
fn raw_slice_form_handles_degenerate_input_without_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let opts = NewtonOpts::default();
    assert!(find_roots_coeffs(&[c(1.0, 0.0), c(0.0, 0.0)], 1, &opts, &mut rng).is_empty());
    assert!(find_roots_coeffs(&[c(1.0, 0.0)], 0, &opts, &mut rng).is_empty());
    assert!(find_roots_coeffs(&[c(1.0, 0.0)], 3, &opts, &mut rng).is_empty());

    let roots = find_roots_coeffs(&[c(-2.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)], 2, &opts, &mut rng);
    assert_eq!(roots.len(), 2);
}

#[test]
fn repeated_roots_are_all_found() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let opts = NewtonOpts::default();

    // (x + 1)^2
    let p = Polynomial::from_integers(&[1, 2, 1]).unwrap();
    let roots = find_roots(&p, &opts, &mut rng);
    assert_eq!(roots.len(), 2);
    assert!(roots.iter().all(|r| (r - c(-1.0, 0.0)).norm() < 1e-5));

    // (x - 1)^2 (x + 2)
    let p = Polynomial::from_integers(&[2, -3, 0, 1]).unwrap();
    let roots = find_roots(&p, &opts, &mut rng);
    assert_eq!(roots.len(), 3);
    assert_eq!(roots.iter().filter(|r| (*r - c(1.0, 0.0)).norm() < 1e-5).count(), 2);
    assert!(roots.iter().any(|r| (r - c(-2.0, 0.0)).norm() < 1e-5));

    // x^2 has its double root at the origin.
    let p = Polynomial::from_integers(&[0, 0, 1]).unwrap();
    let roots = find_roots(&p, &opts, &mut rng);
    assert_eq!(roots.len(), 2);
    assert!(roots.iter().all(|r| r.norm() < 1e-8));
}

#[test]
fn iteration_cap_yields_no_roots_instead_of_failing() {
    let p = Polynomial::from_integers(&[-2, 0, 1]).unwrap();
    let opts = NewtonOpts {
        max_iterations: 0,
        ..NewtonOpts::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(find_roots(&p, &opts, &mut rng).is_empty());
}

#[test]
fn enumerated_polynomials_yield_accurate_roots() {
    let opts = NewtonOpts::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for item in PolynomialEnumerator::new(9).unwrap() {
        let roots = find_roots(&item.polynomial, &opts, &mut rng);
        assert!(roots.len() <= item.degree);
        let scale: f64 = item
            .polynomial
            .coefficients()
            .iter()
            .map(|c| c.norm())
            .sum();
        for r in roots {
            let (f, _) = item.polynomial.eval_with_derivative(r);
            let bound = 1e-6 * scale * r.norm().max(1.0).powi(item.degree as i32);
            assert!(f.norm() <= bound, "residual {} at {r} for {:?}", f.norm(), item);
        }
    }
}

#[test]
fn opts_validation_rejects_bad_values() {
    assert!(NewtonOpts::default().validate().is_ok());
    let zero_restart = NewtonOpts {
        restart_interval: 0,
        ..NewtonOpts::default()
    };
    assert!(zero_restart.validate().is_err());
    let nan_tol = NewtonOpts {
        tolerance: f64::NAN,
        ..NewtonOpts::default()
    };
    assert!(nan_tol.validate().is_err());
}
