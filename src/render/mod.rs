/// Gaussian blob rasterization of root points.
pub mod accumulate;
/// RGB accumulation buffer.
pub mod buffer;
/// Bitmap "Height: N" label.
pub mod overlay;
/// Leading-magnitude colour table.
pub mod palette;
