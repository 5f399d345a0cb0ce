use std::path::Path;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{GlowError, GlowResult};
use crate::render::buffer::PixelBuffer;

/// Write `buf` as an 8-bit RGB PNG, creating missing parent directories.
#[tracing::instrument(skip(buf), fields(width = buf.width, height = buf.height))]
pub fn save_png(buf: &PixelBuffer, path: &Path) -> GlowResult<()> {
    ensure_parent_dir(path)?;
    let img = buf.to_image()?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| GlowError::encode(format!("write PNG '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "saved image");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
