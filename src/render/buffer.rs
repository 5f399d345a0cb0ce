use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{GlowError, GlowResult};

/// Row-major RGB8 accumulation grid.
///
/// Channels saturate at 255. Blending only ever adds, so the final pixels do not depend
/// on the order contributions arrive in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed `[r, g, b]` triples, `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Black buffer of the given size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.pixel_count() * 3],
        }
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 3)
    }

    /// Colour at `(x, y)`, or `None` outside the buffer.
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb8> {
        let i = self.index(x, y)?;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i64, y: i64, color: Rgb8) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 3].copy_from_slice(&color.to_array());
        }
    }

    /// Add `floor(color * intensity)` per channel, saturating at 255.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn add_saturating(&mut self, x: i64, y: i64, color: Rgb8, intensity: f64) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        for (dst, src) in self.data[i..i + 3].iter_mut().zip(color.to_array()) {
            let add = (f64::from(src) * intensity).clamp(0.0, 255.0) as u8;
            *dst = dst.saturating_add(add);
        }
    }

    /// Blend `color` over the pixel with straight `alpha` (0..=255).
    pub fn blend_over(&mut self, x: i64, y: i64, color: Rgb8, alpha: u8) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let a = f64::from(alpha) / 255.0;
        for (dst, src) in self.data[i..i + 3].iter_mut().zip(color.to_array()) {
            *dst = (f64::from(src) * a + f64::from(*dst) * (1.0 - a)) as u8;
        }
    }

    /// Copy into an [`image::RgbImage`] for encoding.
    pub fn to_image(&self) -> GlowResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| GlowError::encode("pixel buffer size does not match width*height*3"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffer.rs"]
mod tests;
