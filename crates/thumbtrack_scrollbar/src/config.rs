//! Scrollbar configuration
//!
//! Plain struct with sensible defaults, builder-style setters, and TOML
//! loading. Durations are written as integer milliseconds:
//!
//! ```toml
//! always_shown = false
//! scroll_interval_ms = 100
//! scroll_end_hide_delay_ms = 500
//! drag_end_hide_delay_ms = 1000
//! fade_duration_ms = 300
//!
//! [thumb_size]
//! width = 8.0
//! height = 48.0
//!
//! [padding]
//! right = 2.0
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollbarError};
use crate::geometry::TrackGeometry;

/// Space around the thumb track (rendering only)
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Same padding on every side
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Size of the draggable thumb
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThumbSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ThumbSize {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 48.0,
        }
    }
}

/// Configuration for thumb behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollbarConfig {
    /// Keep the thumb visible at all times, bypassing hide timing
    pub always_shown: bool,
    /// Minimum spacing between drag-driven jumps of the content
    #[serde(rename = "scroll_interval_ms", with = "duration_ms")]
    pub scroll_interval: Duration,
    /// Grace period after scrolling stops before the thumb hides
    #[serde(rename = "scroll_end_hide_delay_ms", with = "duration_ms")]
    pub scroll_end_hide_delay: Duration,
    /// Grace period after a drag ends before the thumb hides
    #[serde(rename = "drag_end_hide_delay_ms", with = "duration_ms")]
    pub drag_end_hide_delay: Duration,
    /// Length of the linear show/hide fade
    #[serde(rename = "fade_duration_ms", with = "duration_ms")]
    pub fade_duration: Duration,
    /// Space around the track; not used by the interaction core
    pub padding: Padding,
    /// Thumb dimensions; the height feeds the track geometry
    pub thumb_size: ThumbSize,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            always_shown: false,
            scroll_interval: Duration::from_millis(100),
            scroll_end_hide_delay: Duration::from_millis(500),
            drag_end_hide_delay: Duration::from_millis(1000),
            fade_duration: Duration::from_millis(300),
            padding: Padding::default(),
            thumb_size: ThumbSize::default(),
        }
    }
}

impl ScrollbarConfig {
    /// Config with the thumb permanently visible
    pub fn always_shown() -> Self {
        Self {
            always_shown: true,
            ..Default::default()
        }
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the interaction core cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.scroll_interval.is_zero() {
            return Err(ScrollbarError::InvalidConfig(
                "scroll_interval must be greater than zero".to_string(),
            ));
        }
        let ThumbSize { width, height } = self.thumb_size;
        if !(width.is_finite() && width >= 0.0 && height.is_finite() && height >= 0.0) {
            return Err(ScrollbarError::InvalidConfig(format!(
                "thumb_size must be finite and non-negative, got {width}x{height}"
            )));
        }
        if !self.padding.is_valid() {
            return Err(ScrollbarError::InvalidConfig(
                "padding must be finite and non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Track geometry for a measured track, using the configured thumb height
    pub fn geometry_for_track(&self, track_height: f32) -> TrackGeometry {
        TrackGeometry::new(track_height, self.thumb_size.height)
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_thumb_size(mut self, width: f32, height: f32) -> Self {
        self.thumb_size = ThumbSize { width, height };
        self
    }

    pub fn with_always_shown(mut self, always_shown: bool) -> Self {
        self.always_shown = always_shown;
        self
    }

    pub fn with_scroll_interval(mut self, interval: Duration) -> Self {
        self.scroll_interval = interval;
        self
    }

    pub fn with_scroll_end_hide_delay(mut self, delay: Duration) -> Self {
        self.scroll_end_hide_delay = delay;
        self
    }

    pub fn with_drag_end_hide_delay(mut self, delay: Duration) -> Self {
        self.drag_end_hide_delay = delay;
        self
    }

    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }
}

/// Serialize a `Duration` as whole milliseconds
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
