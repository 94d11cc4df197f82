//! Coordinate mapping between scroll offsets and thumb positions
//!
//! Offsets in `[extent.min, extent.max]` map linearly onto thumb tops in
//! `[0, geometry.max_thumb_top()]`. Only [`inverse`] rounds: scroll offsets are
//! whole pixels, thumb positions are not. So `forward(inverse(y))` is stable
//! under re-clamping but does not give back `y`.

use crate::geometry::{ScrollExtent, ThumbPosition, TrackGeometry};

/// Thumb position for a scroll `offset`
///
/// An extent with nothing to scroll puts the thumb at the top.
pub fn forward(offset: f32, extent: &ScrollExtent, geometry: &TrackGeometry) -> ThumbPosition {
    let range = extent.max - extent.min;
    if range <= 0.0 {
        return ThumbPosition::TOP;
    }
    let raw = (offset - extent.min) * geometry.max_thumb_top() / range;
    ThumbPosition::clamped(raw, geometry)
}

/// Scroll offset that centers the thumb under `pointer_y`
///
/// The result is clamped to the extent and rounded to a whole pixel
/// (half away from zero).
pub fn inverse(pointer_y: f32, extent: &ScrollExtent, geometry: &TrackGeometry) -> f32 {
    let max_thumb_top = geometry.max_thumb_top();
    let range = extent.max - extent.min;
    if max_thumb_top <= 0.0 || range <= 0.0 || !pointer_y.is_finite() {
        return extent.min;
    }

    let pos = pointer_y - geometry.thumb_height / 2.0;
    let offset = (extent.min + pos * range / max_thumb_top).clamp(extent.min, extent.max);
    let rounded = offset.round();

    // Rounding may step past a fractional bound; pull back to the nearest
    // whole pixel that is still inside the extent.
    let low = extent.min.ceil();
    let high = extent.max.floor();
    if low <= high {
        rounded.clamp(low, high)
    } else {
        extent.min
    }
}
