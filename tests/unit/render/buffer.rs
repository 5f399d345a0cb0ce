use super::*;

fn canvas(width: u32, height: u32) -> Canvas {
    Canvas { width, height }
}

#[test]
fn new_buffer_is_black() {
    let buf = PixelBuffer::new(canvas(3, 2));
    assert_eq!(buf.data.len(), 3 * 2 * 3);
    assert!(buf.data.iter().all(|&b| b == 0));
    assert_eq!(buf.get(2, 1), Some(Rgb8::BLACK));
    assert_eq!(buf.get(3, 1), None);
    assert_eq!(buf.get(-1, 0), None);
}

#[test]
fn additive_blend_floors_and_saturates() {
    let mut buf = PixelBuffer::new(canvas(1, 1));
    let c = Rgb8::new(255, 128, 0);
    buf.add_saturating(0, 0, c, 0.5);
    assert_eq!(buf.get(0, 0), Some(Rgb8::new(127, 64, 0)));
    buf.add_saturating(0, 0, c, 0.5);
    buf.add_saturating(0, 0, c, 0.5);
    assert_eq!(buf.get(0, 0), Some(Rgb8::new(255, 192, 0)));
}

#[test]
fn out_of_bounds_writes_are_ignored() {
    let mut buf = PixelBuffer::new(canvas(2, 2));
    buf.add_saturating(5, 0, Rgb8::WHITE, 1.0);
    buf.set(0, -3, Rgb8::WHITE);
    buf.blend_over(2, 2, Rgb8::WHITE, 255);
    assert!(buf.data.iter().all(|&b| b == 0));
}

#[test]
fn blend_over_mixes_with_existing_colour() {
    let mut buf = PixelBuffer::new(canvas(1, 1));
    buf.set(0, 0, Rgb8::new(200, 100, 0));
    buf.blend_over(0, 0, Rgb8::BLACK, 180);
    let px = buf.get(0, 0).unwrap();
    assert_eq!(px, Rgb8::new(58, 29, 0));
}

#[test]
fn converts_to_rgb_image() {
    let mut buf = PixelBuffer::new(canvas(2, 1));
    buf.set(1, 0, Rgb8::new(1, 2, 3));
    let img = buf.to_image().unwrap();
    assert_eq!(img.dimensions(), (2, 1));
    assert_eq!(img.get_pixel(1, 0).0, [1, 2, 3]);
}
