use super::*;
use crate::foundation::core::Canvas;

fn grey(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(Canvas { width, height });
    buf.data.fill(100);
    buf
}

#[test]
fn background_box_darkens_only_the_corner() {
    let mut buf = grey(200, 100);
    draw_label(&mut buf, "");
    assert_eq!(buf.get(40, 50), Some(Rgb8::new(29, 29, 29)));
    assert_eq!(buf.get(189, 84), Some(Rgb8::new(29, 29, 29)));
    assert_eq!(buf.get(39, 50), Some(Rgb8::new(100, 100, 100)));
    assert_eq!(buf.get(40, 85), Some(Rgb8::new(100, 100, 100)));
    assert_eq!(buf.get(10, 10), Some(Rgb8::new(100, 100, 100)));
}

#[test]
fn glyphs_are_white_and_advance_eight_pixels() {
    let mut buf = grey(200, 100);
    draw_label(&mut buf, "Height: 1");
    // 'H' top row is lit at both ends only.
    assert_eq!(buf.get(50, 60), Some(Rgb8::WHITE));
    assert_eq!(buf.get(54, 60), Some(Rgb8::WHITE));
    assert_ne!(buf.get(52, 60), Some(Rgb8::WHITE));
    // 'H' crossbar.
    assert_eq!(buf.get(52, 62), Some(Rgb8::WHITE));
    // '1' is the ninth character.
    assert_eq!(buf.get(115, 60), Some(Rgb8::WHITE));
    assert_ne!(buf.get(114, 60), Some(Rgb8::WHITE));
    assert_eq!(buf.get(114, 64), Some(Rgb8::WHITE));
}

#[test]
fn unknown_characters_draw_nothing() {
    let mut plain = grey(200, 100);
    draw_label(&mut plain, "");
    let mut unknown = grey(200, 100);
    draw_label(&mut unknown, "?#%");
    assert_eq!(plain, unknown);
}

#[test]
fn tiny_buffers_are_clipped() {
    let mut buf = grey(8, 6);
    draw_label(&mut buf, "Height: 42");
    assert_eq!(buf.data.len(), 8 * 6 * 3);
}
