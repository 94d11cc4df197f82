//! Thumbtrack Core Runtime
//!
//! This crate provides the cooperative timing primitives used by the
//! thumbtrack scrollbar:
//!
//! - **Timer Scheduler**: a loop-owned scheduler of one-shot and repeating
//!   timers, advanced by the host (no background threads)
//! - **Debouncer**: collapses bursts of requests into a single delayed action
//! - **Throttle**: delivers at most one action per interval, keeping only the
//!   freshest request
//! - **Events**: the inbound scroll/pointer/layout event vocabulary
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use thumbtrack_core::{Debouncer, TimerScheduler};
//!
//! let scheduler = TimerScheduler::shared();
//! let mut hide = Debouncer::new(&scheduler);
//!
//! let hidden = Rc::new(Cell::new(false));
//! let flag = hidden.clone();
//! hide.run(move || flag.set(true), Duration::from_millis(500));
//!
//! scheduler.advance(Duration::from_millis(499));
//! assert!(!hidden.get());
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert!(hidden.get());
//! ```

pub mod debounce;
pub mod error;
pub mod events;
pub mod throttle;
pub mod timer;

pub use debounce::Debouncer;
pub use error::{Result, TimerError};
pub use events::{EventType, ScrollbarEvent};
pub use throttle::Throttle;
pub use timer::{SharedScheduler, TimerId, TimerScheduler};
