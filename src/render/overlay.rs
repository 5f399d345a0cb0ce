use crate::foundation::core::Rgb8;
use crate::render::buffer::PixelBuffer;

const ANCHOR_FROM_RIGHT: i64 = 150;
const ANCHOR_FROM_BOTTOM: i64 = 40;
const BOX_PAD: i64 = 10;
const BOX_WIDTH: i64 = 150;
const BOX_HEIGHT: i64 = 35;
const BOX_ALPHA: u8 = 180;
const GLYPH_ADVANCE: i64 = 8;

/// A 5-row bitmap glyph. Bit `width - 1 - col` of each row is the pixel at `col`.
#[derive(Clone, Copy, Debug)]
struct Glyph {
    width: u8,
    rows: [u8; 5],
}

const fn glyph(width: u8, rows: [u8; 5]) -> Glyph {
    Glyph { width, rows }
}

const DIGITS: [Glyph; 10] = [
    glyph(3, [0b111, 0b101, 0b101, 0b101, 0b111]),
    glyph(3, [0b010, 0b110, 0b010, 0b010, 0b111]),
    glyph(3, [0b111, 0b001, 0b111, 0b100, 0b111]),
    glyph(3, [0b111, 0b001, 0b111, 0b001, 0b111]),
    glyph(3, [0b101, 0b101, 0b111, 0b001, 0b001]),
    glyph(3, [0b111, 0b100, 0b111, 0b001, 0b111]),
    glyph(3, [0b111, 0b100, 0b111, 0b101, 0b111]),
    glyph(3, [0b111, 0b001, 0b001, 0b001, 0b001]),
    glyph(3, [0b111, 0b101, 0b111, 0b101, 0b111]),
    glyph(3, [0b111, 0b101, 0b111, 0b001, 0b111]),
];

fn glyph_for(ch: char) -> Option<Glyph> {
    let g = match ch {
        'H' => glyph(5, [0b10001, 0b10001, 0b11111, 0b10001, 0b10001]),
        'e' => glyph(5, [0b01110, 0b10000, 0b11100, 0b10000, 0b01110]),
        'i' => glyph(3, [0b010, 0b000, 0b010, 0b010, 0b010]),
        'g' => glyph(5, [0b01110, 0b10000, 0b10111, 0b10001, 0b01110]),
        'h' => glyph(5, [0b10000, 0b10000, 0b11100, 0b10010, 0b10010]),
        't' => glyph(3, [0b010, 0b111, 0b010, 0b010, 0b010]),
        ':' => glyph(1, [0, 1, 0, 1, 0]),
        ' ' => glyph(3, [0; 5]),
        '0'..='9' => DIGITS[ch as usize - '0' as usize],
        _ => return None,
    };
    Some(g)
}

/// Stamp `text` into the bottom-right corner over a translucent black box.
///
/// Only the characters of `"Height: 0123456789"` have glyphs; anything else advances
/// the pen without drawing.
pub fn draw_label(buf: &mut PixelBuffer, text: &str) {
    let start_x = i64::from(buf.width) - ANCHOR_FROM_RIGHT;
    let start_y = i64::from(buf.height) - ANCHOR_FROM_BOTTOM;

    for y in (start_y - BOX_PAD)..(start_y - BOX_PAD + BOX_HEIGHT) {
        for x in (start_x - BOX_PAD)..(start_x - BOX_PAD + BOX_WIDTH) {
            buf.blend_over(x, y, Rgb8::BLACK, BOX_ALPHA);
        }
    }

    for (i, ch) in text.chars().enumerate() {
        if let Some(g) = glyph_for(ch) {
            stamp(buf, g, start_x + i as i64 * GLYPH_ADVANCE, start_y);
        }
    }
}

fn stamp(buf: &mut PixelBuffer, g: Glyph, x: i64, y: i64) {
    let w = i64::from(g.width);
    for (row, bits) in g.rows.iter().enumerate() {
        for col in 0..w {
            if (bits >> (w - 1 - col)) & 1 == 1 {
                buf.set(x + col, y + row as i64, Rgb8::WHITE);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
