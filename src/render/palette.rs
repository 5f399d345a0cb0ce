use crate::foundation::core::Rgb8;

/// Blob colour for a polynomial's leading-coefficient magnitude.
///
/// Magnitude 1 (algebraic integers) is red; anything above 10, or 0, is white. Degree
/// plays no part in the colour.
pub fn color_for_leading_magnitude(magnitude: u32) -> Rgb8 {
    match magnitude {
        1 => Rgb8::new(255, 0, 0),
        2 => Rgb8::new(0, 255, 0),
        3 => Rgb8::new(0, 0, 255),
        4 => Rgb8::new(255, 255, 0),
        5 => Rgb8::new(255, 0, 255),
        6 => Rgb8::new(0, 255, 255),
        7 => Rgb8::new(255, 128, 0),
        8 => Rgb8::new(128, 255, 0),
        9 => Rgb8::new(255, 0, 128),
        10 => Rgb8::new(128, 0, 255),
        _ => Rgb8::WHITE,
    }
}
