//! Scroll extent, track geometry, and thumb position

/// Replace NaN/infinite inputs with zero
fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// The movable range of the scrolled content plus its current offset
///
/// Owned by the scrollable content; the scrollbar only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollExtent {
    /// Smallest scroll offset
    pub min: f32,
    /// Largest scroll offset (never below `min`)
    pub max: f32,
    /// Current scroll offset, within `[min, max]`
    pub current: f32,
}

impl ScrollExtent {
    /// Create an extent, forcing `max >= min` and clamping `current` into range
    pub fn new(min: f32, max: f32, current: f32) -> Self {
        let min = finite_or_zero(min);
        let max = finite_or_zero(max).max(min);
        Self {
            min,
            max,
            current: finite_or_zero(current).clamp(min, max),
        }
    }

    /// Distance between `min` and `max`
    pub fn range(&self) -> f32 {
        self.max - self.min
    }

    /// Check if there is anything to scroll
    pub fn can_scroll(&self) -> bool {
        self.range() > 0.0
    }

    /// Same range, different current offset (clamped)
    pub fn with_current(self, current: f32) -> Self {
        Self::new(self.min, self.max, current)
    }
}

/// Measured size of the thumb track and the thumb inside it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    /// Height of the track the thumb slides along
    pub track_height: f32,
    /// Height of the thumb (never above `track_height`)
    pub thumb_height: f32,
}

impl TrackGeometry {
    /// Create geometry, keeping `track_height >= thumb_height >= 0`
    pub fn new(track_height: f32, thumb_height: f32) -> Self {
        let track_height = finite_or_zero(track_height).max(0.0);
        let thumb_height = finite_or_zero(thumb_height).clamp(0.0, track_height);
        Self {
            track_height,
            thumb_height,
        }
    }

    /// Largest top offset the thumb can reach
    pub fn max_thumb_top(&self) -> f32 {
        (self.track_height - self.thumb_height).max(0.0)
    }
}

/// Top edge of the thumb within its track
///
/// Only produced by [`crate::mapper`], so `0 <= top <= max_thumb_top` holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbPosition {
    top: f32,
}

impl ThumbPosition {
    /// Thumb resting at the top of the track
    pub const TOP: ThumbPosition = ThumbPosition { top: 0.0 };

    /// Clamp `top` into the track of `geometry`
    pub(crate) fn clamped(top: f32, geometry: &TrackGeometry) -> Self {
        Self {
            top: finite_or_zero(top).clamp(0.0, geometry.max_thumb_top()),
        }
    }

    /// Top offset in track pixels
    pub fn top(&self) -> f32 {
        self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_normalizes_inverted_range() {
        let extent = ScrollExtent::new(100.0, 50.0, 75.0);
        assert_eq!(extent.min, 100.0);
        assert_eq!(extent.max, 100.0);
        assert_eq!(extent.current, 100.0);
        assert!(!extent.can_scroll());
    }

    #[test]
    fn test_extent_clamps_current() {
        let extent = ScrollExtent::new(0.0, 1000.0, 1200.0);
        assert_eq!(extent.current, 1000.0);
        assert_eq!(extent.with_current(-5.0).current, 0.0);
        assert_eq!(extent.range(), 1000.0);
    }

    #[test]
    fn test_extent_ignores_non_finite() {
        let extent = ScrollExtent::new(f32::NAN, f32::INFINITY, 3.0);
        assert_eq!(extent, ScrollExtent::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_geometry_keeps_thumb_inside_track() {
        let geometry = TrackGeometry::new(40.0, 60.0);
        assert_eq!(geometry.thumb_height, 40.0);
        assert_eq!(geometry.max_thumb_top(), 0.0);

        let geometry = TrackGeometry::new(-10.0, 5.0);
        assert_eq!(geometry.track_height, 0.0);
        assert_eq!(geometry.thumb_height, 0.0);

        let geometry = TrackGeometry::new(200.0, 50.0);
        assert_eq!(geometry.max_thumb_top(), 150.0);
    }

    #[test]
    fn test_thumb_position_clamped() {
        let geometry = TrackGeometry::new(200.0, 50.0);
        assert_eq!(ThumbPosition::clamped(-3.0, &geometry).top(), 0.0);
        assert_eq!(ThumbPosition::clamped(400.0, &geometry).top(), 150.0);
        assert_eq!(ThumbPosition::clamped(75.0, &geometry).top(), 75.0);
        assert_eq!(ThumbPosition::default(), ThumbPosition::TOP);
    }
}
