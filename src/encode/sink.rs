use crate::foundation::error::{GlowError, GlowResult};
use crate::render::buffer::PixelBuffer;

/// Stream parameters handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Playback frames per second.
    pub fps: u32,
}

impl SinkConfig {
    /// Reject empty frames and a zero frame rate.
    pub fn validate(&self) -> GlowResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GlowError::validation("sink width/height must be non-zero"));
        }
        if self.fps == 0 {
            return Err(GlowError::validation("sink fps must be non-zero"));
        }
        Ok(())
    }
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing indices between one `begin` and the
/// matching `end`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GlowResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: u64, frame: &PixelBuffer) -> GlowResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> GlowResult<()>;
}

/// Sink that keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, PixelBuffer)>,
    finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured by `begin`, if it was called.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(u64, PixelBuffer)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GlowResult<()> {
        cfg.validate()?;
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &PixelBuffer) -> GlowResult<()> {
        if self.cfg.is_none() {
            return Err(GlowError::encode("in-memory sink not started"));
        }
        if let Some((last, _)) = self.frames.last()
            && idx <= *last
        {
            return Err(GlowError::encode(format!(
                "out-of-order frame index {idx} after {last}"
            )));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> GlowResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
