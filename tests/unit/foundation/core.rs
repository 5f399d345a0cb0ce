use super::*;

#[test]
fn viewport_rejects_inverted_or_degenerate_bounds() {
    assert!(Viewport::new(-1.0, -1.0, 1.0, 1.0).is_ok());
    assert!(Viewport::new(1.0, -1.0, -1.0, 1.0).is_err());
    assert!(Viewport::new(-1.0, 1.0, 1.0, 1.0).is_err());
    assert!(Viewport::new(f64::NAN, -1.0, 1.0, 1.0).is_err());
    assert!(Viewport::new(-1.0, -1.0, f64::INFINITY, 1.0).is_err());
}

#[test]
fn viewport_contains_is_inclusive_on_every_edge() {
    let vp = Viewport::default();
    assert!(vp.contains(Complex64::new(2.0, 2.0)));
    assert!(vp.contains(Complex64::new(-2.0, -2.0)));
    assert!(vp.contains(Complex64::new(0.0, 0.0)));
    assert!(!vp.contains(Complex64::new(2.0 + 1e-12, 0.0)));
    assert!(!vp.contains(Complex64::new(0.0, -2.5)));
}

#[test]
fn canvas_validation_catches_zero_sizes() {
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 10,
            height: 0
        }
        .validate()
        .is_err()
    );
    let ok = Canvas {
        width: 4,
        height: 3,
    };
    assert!(ok.validate().is_ok());
    assert_eq!(ok.pixel_count(), 12);
}
