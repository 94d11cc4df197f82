//! Linear show/hide fade
//!
//! Turns the thumb's visibility boolean into an opacity the renderer can
//! draw with. Opacity moves toward its target at a constant rate, covering
//! the full 0..1 span in `duration`.

use std::time::Duration;

/// Opacity tracker for the thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbFade {
    opacity: f32,
    target: f32,
    duration: Duration,
}

impl ThumbFade {
    /// Create a fade starting fully shown or fully hidden
    pub fn new(duration: Duration, visible: bool) -> Self {
        let opacity = if visible { 1.0 } else { 0.0 };
        Self {
            opacity,
            target: opacity,
            duration,
        }
    }

    /// Point the fade at shown (1.0) or hidden (0.0)
    pub fn set_visible(&mut self, visible: bool) {
        self.target = if visible { 1.0 } else { 0.0 };
        if self.duration.is_zero() {
            self.opacity = self.target;
        }
    }

    /// Step the fade by `dt`
    ///
    /// Returns true while the opacity is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.opacity == self.target {
            return false;
        }
        if self.duration.is_zero() {
            self.opacity = self.target;
            return false;
        }

        let step = dt.as_secs_f32() / self.duration.as_secs_f32();
        self.opacity = if self.target > self.opacity {
            (self.opacity + step).min(self.target)
        } else {
            (self.opacity - step).max(self.target)
        };

        self.opacity != self.target
    }

    /// Current opacity (0.0 to 1.0)
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Opacity the fade is heading toward
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check if the fade is still moving
    pub fn is_animating(&self) -> bool {
        self.opacity != self.target
    }
}
