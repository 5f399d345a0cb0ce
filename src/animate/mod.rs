//! Height-sweep animation: one frame per height, points accumulating as the height grows.

/// Sweep driver.
pub mod sweep;
