use super::*;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn constructor_rejects_empty_and_zero_leading() {
    assert!(Polynomial::new(vec![]).is_err());
    assert!(Polynomial::from_integers(&[1, 2, 0]).is_err());
    let p = Polynomial::from_integers(&[-2, 0, 1]).unwrap();
    assert_eq!(p.degree(), 2);
    assert_eq!(p.leading(), c(1.0, 0.0));
}

#[test]
fn horner_matches_direct_evaluation() {
    // 3 - 2x + x^3
    let p = Polynomial::from_integers(&[3, -2, 0, 1]).unwrap();
    let z = c(0.5, -1.25);
    let (f, df) = p.eval_with_derivative(z);
    let direct_f = c(3.0, 0.0) - z * 2.0 + z * z * z;
    let direct_df = c(-2.0, 0.0) + z * z * 3.0;
    assert!((f - direct_f).norm() < 1e-12);
    assert!((df - direct_df).norm() < 1e-12);
}

#[test]
fn deflate_divides_out_known_root() {
    // (x - 1)(x - 2)(x + 3) = x^3 - 7x + 6
    let p = Polynomial::from_integers(&[6, -7, 0, 1]).unwrap();
    let q = p.deflate(c(1.0, 0.0));
    assert_eq!(q.degree(), 2);
    // x^2 + x - 6
    let expected = [c(-6.0, 0.0), c(1.0, 0.0), c(1.0, 0.0)];
    for (got, want) in q.coefficients().iter().zip(expected.iter()) {
        assert!((got - want).norm() < 1e-12);
    }
    // Parent is untouched.
    assert_eq!(p.degree(), 3);
}

#[test]
fn deflate_of_linear_keeps_leading_coefficient() {
    let p = Polynomial::from_integers(&[4, 2]).unwrap();
    let q = p.deflate(c(-2.0, 0.0));
    assert_eq!(q.coefficients(), &[c(2.0, 0.0)]);
}

#[test]
fn magnitude_bound_sums_absolute_terms() {
    let p = Polynomial::from_integers(&[2, -3, 0, 1]).unwrap();
    assert_eq!(p.magnitude_bound(0.0), 2.0);
    assert_eq!(p.magnitude_bound(1.0), 6.0);
    assert_eq!(p.magnitude_bound(2.0), 2.0 + 6.0 + 8.0);
}
