//! Inbound event vocabulary
//!
//! The events a host feeds into a scrollbar: scroll lifecycle notifications
//! from the scrollable content, pointer lifecycle on the thumb track, and
//! layout pushes whenever the track is measured.

/// Event type identifier
pub type EventType = u32;

/// Numeric event types, for logging and recording
pub mod event_types {
    use super::EventType;

    pub const SCROLL_START: EventType = 30;
    pub const SCROLL_UPDATE: EventType = 31;
    pub const SCROLL_END: EventType = 32;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer sequence aborted by the platform (e.g. gesture stolen)
    pub const POINTER_CANCEL: EventType = 8;

    pub const LAYOUT: EventType = 40;
}

/// An event delivered to the scrollbar core
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollbarEvent {
    /// The content started scrolling
    ScrollStart,
    /// The content scrolled to `offset`
    ScrollUpdate { offset: f32 },
    /// The content stopped scrolling
    ScrollEnd,
    /// Pointer pressed on the thumb track at track-local `y`
    PointerDown { y: f32 },
    /// Pointer moved to track-local `y`
    PointerMove { y: f32 },
    /// Pointer released
    PointerUp,
    /// Pointer sequence cancelled
    PointerCancel,
    /// The host measured the track
    Layout { track_height: f32, thumb_height: f32 },
}

impl ScrollbarEvent {
    /// Numeric type of this event
    pub fn event_type(&self) -> EventType {
        match self {
            ScrollbarEvent::ScrollStart => event_types::SCROLL_START,
            ScrollbarEvent::ScrollUpdate { .. } => event_types::SCROLL_UPDATE,
            ScrollbarEvent::ScrollEnd => event_types::SCROLL_END,
            ScrollbarEvent::PointerDown { .. } => event_types::POINTER_DOWN,
            ScrollbarEvent::PointerMove { .. } => event_types::POINTER_MOVE,
            ScrollbarEvent::PointerUp => event_types::POINTER_UP,
            ScrollbarEvent::PointerCancel => event_types::POINTER_CANCEL,
            ScrollbarEvent::Layout { .. } => event_types::LAYOUT,
        }
    }

    /// Check if this is part of the scroll lifecycle
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            ScrollbarEvent::ScrollStart
                | ScrollbarEvent::ScrollUpdate { .. }
                | ScrollbarEvent::ScrollEnd
        )
    }

    /// Check if this is part of the pointer lifecycle
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            ScrollbarEvent::PointerDown { .. }
                | ScrollbarEvent::PointerMove { .. }
                | ScrollbarEvent::PointerUp
                | ScrollbarEvent::PointerCancel
        )
    }
}
