//! Scrollable content capability
//!
//! The scrollbar never owns the scroll position. It reads the extent and, while
//! dragging, asks the content to jump. Anything that can answer those two
//! requests can be driven by a thumb.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::ScrollExtent;

/// What the scrollbar needs from the scrolled content
pub trait ScrollContent {
    /// Current scroll range and offset
    fn extent(&self) -> ScrollExtent;

    /// Move the content to `offset` without animation
    fn jump_to(&mut self, offset: f32);
}

/// Shared handle to the scrolled content
pub type SharedContent = Rc<RefCell<dyn ScrollContent>>;

/// A bare extent is the simplest scrollable: jumping moves `current`
impl ScrollContent for ScrollExtent {
    fn extent(&self) -> ScrollExtent {
        *self
    }

    fn jump_to(&mut self, offset: f32) {
        *self = self.with_current(offset);
    }
}
