//! Output encoders.
//!
//! Still images go straight through the `image` crate. Frame sequences are pushed into a
//! [`sink::FrameSink`] in increasing index order.

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// PNG output.
pub mod png;
/// Frame sink trait and the in-memory sink.
pub mod sink;
