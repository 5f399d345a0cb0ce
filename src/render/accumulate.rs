use crate::config::Config;
use crate::foundation::core::{Rgb8, Viewport};
use crate::render::buffer::PixelBuffer;
use crate::render::palette::color_for_leading_magnitude;
use crate::schedule::generate::RootPoint;

const MIN_BLOB_RADIUS: f64 = 3.0;
const MAX_BLOB_RADIUS: f64 = 80.0;
const RADIUS_FALLOFF: f64 = 0.5;
const INTENSITY_CUTOFF: f64 = 0.005;

/// Blob radius in pixels for a point of the given height.
///
/// Simpler polynomials (lower height) get larger blobs. The base size scales inversely
/// with the viewport width.
pub fn blob_radius(height: u32, viewport: &Viewport) -> f64 {
    let k1 = 25.0 * (4.0 / viewport.width());
    let radius = k1 * RADIUS_FALLOFF.powi(height as i32 - 3);
    radius.clamp(MIN_BLOB_RADIUS, MAX_BLOB_RADIUS)
}

/// Map a plane coordinate to integer pixel coordinates (y axis flipped).
pub fn to_screen(z: num_complex::Complex64, config: &Config) -> (i64, i64) {
    let vp = &config.viewport;
    let sx = (z.re - vp.x_min) / vp.width() * f64::from(config.canvas.width);
    let sy = (vp.y_max - z.im) / vp.height() * f64::from(config.canvas.height);
    (sx as i64, sy as i64)
}

/// Rasterize a point cloud into a fresh buffer.
///
/// Points outside the viewport are skipped. Every remaining point paints a Gaussian blob
/// coloured by its leading-coefficient magnitude and sized by its height.
#[tracing::instrument(skip(points, config), fields(points = points.len()))]
pub fn render(points: &[RootPoint], config: &Config) -> PixelBuffer {
    let mut buf = PixelBuffer::new(config.canvas);
    tracing::debug!(
        width = config.canvas.width,
        height = config.canvas.height,
        "rendering points"
    );

    let mut drawn = 0usize;
    for point in points {
        if !config.viewport.contains(point.z) {
            continue;
        }
        let (x, y) = to_screen(point.z, config);
        let radius = blob_radius(point.height, &config.viewport);
        draw_blob(
            &mut buf,
            x,
            y,
            radius,
            color_for_leading_magnitude(point.leading_magnitude),
        );
        drawn += 1;
    }

    tracing::debug!(drawn, skipped = points.len() - drawn, "rendered points");
    buf
}

/// Additively paint a radially symmetric Gaussian centred on `(x, y)`.
///
/// `sigma = radius / 2.5`; the scan covers a square of half-width `radius + 5` and
/// samples with intensity at or below 0.005 are dropped.
pub fn draw_blob(buf: &mut PixelBuffer, x: i64, y: i64, radius: f64, color: Rgb8) {
    let reach = (radius + 5.0) as i64;
    let sigma = radius / 2.5;
    let denom = 2.0 * sigma * sigma;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let d2 = (dx * dx + dy * dy) as f64;
            let intensity = (-d2 / denom).exp();
            if intensity > INTENSITY_CUTOFF {
                buf.add_saturating(x + dx, y + dy, color, intensity);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/accumulate.rs"]
mod tests;
