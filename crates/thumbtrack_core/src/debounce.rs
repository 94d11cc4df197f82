//! Restartable delayed action
//!
//! A [`Debouncer`] holds at most one pending action. Every [`Debouncer::run`]
//! cancels the previous schedule and starts the delay again, so a burst of
//! requests collapses into a single firing once the burst goes quiet.

use std::cell::Cell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::timer::{SharedScheduler, TimerId, TimerScheduler};

/// State shared between the debouncer and its scheduled callback
#[derive(Default)]
struct DebounceSlot {
    timer: Cell<Option<TimerId>>,
    disposed: Cell<bool>,
}

/// Collapses bursts of requests into one delayed action
pub struct Debouncer {
    scheduler: Weak<TimerScheduler>,
    slot: Rc<DebounceSlot>,
}

impl Debouncer {
    /// Create a debouncer bound to the loop's scheduler
    pub fn new(scheduler: &SharedScheduler) -> Self {
        Self {
            scheduler: Rc::downgrade(scheduler),
            slot: Rc::new(DebounceSlot::default()),
        }
    }

    /// Schedule `action` to run after `delay`, replacing any pending action
    ///
    /// After [`dispose`](Self::dispose) this is a no-op.
    pub fn run<F: FnOnce() + 'static>(&mut self, action: F, delay: Duration) {
        if self.slot.disposed.get() {
            tracing::warn!("Debouncer::run called after dispose; ignoring");
            return;
        }
        self.clear();

        let Some(scheduler) = self.scheduler.upgrade() else {
            tracing::warn!("Debouncer::run with no live scheduler; ignoring");
            return;
        };

        let slot = Rc::downgrade(&self.slot);
        let id = scheduler.schedule_once(delay, move || {
            let Some(slot) = slot.upgrade() else {
                return;
            };
            if slot.disposed.get() {
                return;
            }
            slot.timer.set(None);
            action();
        });
        self.slot.timer.set(Some(id));
        tracing::trace!(?id, ?delay, "debounce scheduled");
    }

    /// Cancel the pending action, if any. Safe to call at any time.
    pub fn clear(&mut self) {
        if let Some(id) = self.slot.timer.take() {
            if let Some(scheduler) = self.scheduler.upgrade() {
                scheduler.cancel(id);
            }
        }
    }

    /// Check if an action is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.slot.timer.get().is_some()
    }

    /// The scheduler timer backing the pending action
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.slot.timer.get()
    }

    /// Cancel the pending action and refuse all later requests
    pub fn dispose(&mut self) {
        if self.slot.disposed.get() {
            return;
        }
        self.clear();
        self.slot.disposed.set(true);
        tracing::debug!("debouncer disposed");
    }

    /// Check if the debouncer has been disposed
    pub fn is_disposed(&self) -> bool {
        self.slot.disposed.get()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.dispose();
    }
}
