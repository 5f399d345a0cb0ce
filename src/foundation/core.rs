use crate::foundation::error::{GlowError, GlowResult};

pub use num_complex::Complex64;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject zero-sized canvases.
    pub fn validate(self) -> GlowResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GlowError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        Ok(())
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Axis-aligned rectangle of the complex plane shown on the canvas.
///
/// `x` is the real axis and `y` the imaginary axis. Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Smallest visible real part.
    pub x_min: f64,
    /// Smallest visible imaginary part.
    pub y_min: f64,
    /// Largest visible real part.
    pub x_max: f64,
    /// Largest visible imaginary part.
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -2.0,
            y_min: -2.0,
            x_max: 2.0,
            y_max: 2.0,
        }
    }
}

impl Viewport {
    /// Create a validated viewport.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> GlowResult<Self> {
        let vp = Self {
            x_min,
            y_min,
            x_max,
            y_max,
        };
        vp.validate()?;
        Ok(vp)
    }

    /// Require finite bounds with `x_min < x_max` and `y_min < y_max`.
    pub fn validate(self) -> GlowResult<()> {
        let bounds = [self.x_min, self.y_min, self.x_max, self.y_max];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(GlowError::validation("viewport bounds must be finite"));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(GlowError::validation(
                "invalid viewport: x_min must be < x_max and y_min must be < y_max",
            ));
        }
        Ok(())
    }

    /// Extent along the real axis.
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    /// Extent along the imaginary axis.
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    /// Return `true` when `z` lies inside the rectangle, edges included.
    pub fn contains(self, z: Complex64) -> bool {
        z.re >= self.x_min && z.re <= self.x_max && z.im >= self.y_min && z.im <= self.y_max
    }
}

/// Opaque 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Channels as an array in `[r, g, b]` order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
