//! Utility functions for coordinate transformations.

pub mod safe_cast;

use crate::layout::PixelPoint;
use safe_cast::f32_to_i32_clamp;

/// Convert a normalized [0, 1] landmark coordinate to a pixel point,
/// clamped to the frame bounds.
#[allow(clippy::cast_precision_loss)] // Precision loss acceptable for pixel coordinates
#[must_use]
pub fn normalized_to_pixel(x: f32, y: f32, frame_width: i32, frame_height: i32) -> PixelPoint {
    PixelPoint::new(
        f32_to_i32_clamp(x * frame_width as f32, 0, frame_width.saturating_sub(1).max(0)),
        f32_to_i32_clamp(y * frame_height as f32, 0, frame_height.saturating_sub(1).max(0)),
    )
}
