use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::core::{Canvas, Viewport};
use crate::foundation::error::{GlowError, GlowResult};
use crate::poly::enumerate::{MAX_HEIGHT, MIN_HEIGHT};

/// Viewport and render parameters for one run.
///
/// Read-only once validated. JSON documents may omit any field; missing fields take the
/// values of [`Config::default`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output raster size.
    pub canvas: Canvas,
    /// Visible rectangle of the complex plane.
    pub viewport: Viewport,
    /// Largest polynomial height to enumerate.
    pub max_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1200,
                height: 800,
            },
            viewport: Viewport::default(),
            max_height: 15,
        }
    }
}

impl Config {
    /// Load and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> GlowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GlowError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a JSON config document.
    pub fn from_reader(r: impl Read) -> GlowResult<Self> {
        let cfg: Config =
            serde_json::from_reader(r).map_err(|e| GlowError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check canvas, viewport and height bounds.
    pub fn validate(&self) -> GlowResult<()> {
        self.canvas.validate()?;
        self.viewport.validate()?;
        if self.max_height < MIN_HEIGHT {
            return Err(GlowError::validation(format!(
                "max_height must be at least {MIN_HEIGHT}"
            )));
        }
        if self.max_height > MAX_HEIGHT {
            return Err(GlowError::validation(format!(
                "max_height must be at most {MAX_HEIGHT}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
