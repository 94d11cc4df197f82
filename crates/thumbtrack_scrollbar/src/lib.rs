//! Thumbtrack Scrollbar
//!
//! Interaction core of an overlay scrollbar thumb. The host feeds it scroll,
//! pointer and layout events; it answers with a thumb position and a
//! visibility flag, and moves the scrolled content while the thumb is dragged.
//!
//! # Features
//!
//! - **Mapping**: linear offset/thumb conversion with clamping and whole-pixel
//!   drag offsets ([`mapper`])
//! - **Visibility**: shown while scrolling, hidden after a grace delay that is
//!   longer after a drag than after a scroll
//! - **Drag sync**: the thumb follows the pointer immediately while content
//!   jumps are throttled to one per interval
//! - **Fade**: optional linear opacity for renderers
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use thumbtrack_core::TimerScheduler;
//! use thumbtrack_scrollbar::{
//!     ScrollExtent, ScrollbarConfig, SharedContent, ThumbController, TrackGeometry,
//! };
//!
//! let scheduler = TimerScheduler::shared();
//! let list = Rc::new(RefCell::new(ScrollExtent::new(0.0, 1000.0, 0.0)));
//! let content: SharedContent = list.clone();
//!
//! let mut thumb = ThumbController::new(ScrollbarConfig::default(), content, &scheduler)?;
//! thumb.on_layout(TrackGeometry::new(200.0, 50.0));
//!
//! thumb.on_pointer_down(25.0);
//! thumb.on_pointer_move(100.0);
//! assert_eq!(thumb.thumb_top(), 75.0);
//!
//! scheduler.advance(Duration::from_millis(100));
//! assert_eq!(list.borrow().current, 500.0);
//! # Ok::<(), thumbtrack_scrollbar::ScrollbarError>(())
//! ```

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod fade;
pub mod geometry;
pub mod mapper;

pub use config::{Padding, ScrollbarConfig, ThumbSize};
pub use content::{ScrollContent, SharedContent};
pub use controller::{ChangeListener, ListenerId, ThumbController, ThumbPhase, ThumbRenderState};
pub use error::{Result, ScrollbarError};
pub use fade::ThumbFade;
pub use geometry::{ScrollExtent, ThumbPosition, TrackGeometry};

// Re-export the runtime so hosts need a single dependency
pub use thumbtrack_core::{ScrollbarEvent, SharedScheduler, TimerScheduler};
