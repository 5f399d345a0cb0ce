//! algebraic-glow renders the algebraic numbers as a glowing point cloud.
//!
//! Integer polynomials are enumerated in order of increasing height, their complex roots
//! are found by Newton iteration with deflation on a pool of worker threads, and every root
//! is splatted into an image as a Gaussian blob coloured by the polynomial's leading
//! coefficient.
//!
//! - Enumerate polynomials with [`PolynomialEnumerator`]
//! - Collect root points with [`generate`]
//! - Rasterize with [`render`] and write a PNG with [`save_png`]
//! - Stream a height sweep into a [`FrameSink`] with [`render_height_sweep`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Height-sweep animation.
pub mod animate;
/// Run configuration.
pub mod config;
/// Image and video output.
pub mod encode;
/// Integer polynomials and their enumeration by height.
pub mod poly;
/// Rasterization of root points.
pub mod render;
/// Complex root finding.
pub mod roots;
/// Work distribution across root-finding workers.
pub mod schedule;

pub use crate::foundation::core::{Canvas, Complex64, Rgb8, Viewport};
pub use crate::foundation::error::{GlowError, GlowResult};

pub use crate::animate::sweep::{SweepOpts, SweepStats, render_height_sweep};
pub use crate::config::Config;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::png::save_png;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::poly::enumerate::{
    MAX_HEIGHT, MIN_HEIGHT, PolynomialEnumerator, WorkItem, count_for_height,
};
pub use crate::poly::polynomial::Polynomial;
pub use crate::render::accumulate::{blob_radius, draw_blob, render};
pub use crate::render::buffer::PixelBuffer;
pub use crate::render::overlay::draw_label;
pub use crate::render::palette::color_for_leading_magnitude;
pub use crate::roots::newton::{NewtonOpts, find_roots, find_roots_coeffs};
pub use crate::schedule::generate::{
    GenerateOpts, GenerateStats, Generation, RootPoint, generate, generate_heights,
};
