use crate::config::Config;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::error::{GlowError, GlowResult};
use crate::foundation::math::mix_seed;
use crate::poly::enumerate::MIN_HEIGHT;
use crate::render::accumulate::render;
use crate::render::overlay::draw_label;
use crate::schedule::generate::{GenerateOpts, RootPoint, generate_heights};

/// Largest accepted frame rate.
pub const MAX_FPS: u32 = 60;

/// Frame pacing and decoration for [`render_height_sweep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SweepOpts {
    /// Playback frames per second, `1..=60`.
    pub fps: u32,
    /// Stamp "Height: h" into each frame.
    pub label: bool,
}

impl Default for SweepOpts {
    fn default() -> Self {
        Self {
            fps: 2,
            label: true,
        }
    }
}

impl SweepOpts {
    /// Reject frame rates outside `1..=60`.
    pub fn validate(&self) -> GlowResult<()> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(GlowError::validation(format!(
                "fps must be in 1..={MAX_FPS}, got {}",
                self.fps
            )));
        }
        Ok(())
    }

    /// Extra copies of the frame shown after `height`.
    pub fn hold_frames(&self, height: u32) -> u32 {
        if height <= 5 || height.is_multiple_of(5) {
            self.fps / 2
        } else {
            0
        }
    }
}

/// Totals for a finished sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Frames pushed to the sink, hold frames included.
    pub frames: u64,
    /// Points in the final frame.
    pub points: usize,
}

/// Render heights `2..=config.max_height` as a frame sequence into `sink`.
///
/// Each height's points are generated on their own, appended to the running set and the
/// whole set is re-rendered, so frame `h` shows every root of height `<= h`. Early heights
/// and every fifth height are held on screen for `fps / 2` extra frames.
#[tracing::instrument(skip_all, fields(max_height = config.max_height, fps = sweep.fps))]
pub fn render_height_sweep(
    config: &Config,
    sweep: &SweepOpts,
    generate_opts: &GenerateOpts,
    sink: &mut dyn FrameSink,
) -> GlowResult<SweepStats> {
    config.validate()?;
    sweep.validate()?;
    generate_opts.validate()?;

    sink.begin(SinkConfig {
        width: config.canvas.width,
        height: config.canvas.height,
        fps: sweep.fps,
    })?;

    let base_seed = generate_opts.resolved_seed();
    let mut points: Vec<RootPoint> = Vec::new();
    let mut frame_idx = 0u64;

    for height in MIN_HEIGHT..=config.max_height {
        let opts = GenerateOpts {
            seed: Some(mix_seed(base_seed, u64::from(height))),
            ..generate_opts.clone()
        };
        let slice = generate_heights(height..=height, &opts)?;
        points.extend(slice.points);

        let mut frame = render(&points, config);
        if sweep.label {
            draw_label(&mut frame, &format!("Height: {height}"));
        }

        for _ in 0..=sweep.hold_frames(height) {
            sink.push_frame(frame_idx, &frame)?;
            frame_idx += 1;
        }
        tracing::info!(height, points = points.len(), frames = frame_idx, "rendered frame");
    }

    sink.end()?;
    Ok(SweepStats {
        frames: frame_idx,
        points: points.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animate/sweep.rs"]
mod tests;
