//! Fixed-rate action gate
//!
//! A [`Throttle`] runs a repeating tick every `interval`. Submitted actions
//! wait in a single slot; each tick runs whatever is in the slot (once) and
//! empties it. Submitting while an action is waiting replaces it, so fast
//! bursts deliver only their freshest request.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::error::Result;
use crate::timer::{SharedScheduler, TimerId, TimerScheduler};

type PendingAction = Box<dyn FnOnce()>;

#[derive(Default)]
struct ThrottleGate {
    pending: RefCell<Option<PendingAction>>,
    disposed: Cell<bool>,
}

impl ThrottleGate {
    fn on_tick(&self) {
        if self.disposed.get() {
            return;
        }
        // Release the slot before running so the action may submit again
        let action = self.pending.borrow_mut().take();
        if let Some(action) = action {
            tracing::trace!("throttle delivering pending action");
            action();
        }
    }
}

/// Rate-limits a stream of actions to one execution per interval
pub struct Throttle {
    scheduler: Weak<TimerScheduler>,
    interval: Duration,
    tick_timer: Option<TimerId>,
    gate: Rc<ThrottleGate>,
}

impl Throttle {
    /// Create a throttle and start its repeating tick
    ///
    /// Fails if `interval` is zero.
    pub fn new(scheduler: &SharedScheduler, interval: Duration) -> Result<Self> {
        let gate = Rc::new(ThrottleGate::default());
        let weak_gate = Rc::downgrade(&gate);
        let tick_timer = scheduler.schedule_repeating(interval, move || {
            if let Some(gate) = weak_gate.upgrade() {
                gate.on_tick();
            }
        })?;

        Ok(Self {
            scheduler: Rc::downgrade(scheduler),
            interval,
            tick_timer: Some(tick_timer),
            gate,
        })
    }

    /// Submit an action, discarding any action still waiting for a tick
    ///
    /// After [`dispose`](Self::dispose) this is a no-op.
    pub fn run<F: FnOnce() + 'static>(&mut self, action: F) {
        if self.gate.disposed.get() {
            tracing::warn!("Throttle::run called after dispose; ignoring");
            return;
        }
        let replaced = self.gate.pending.borrow_mut().replace(Box::new(action));
        if replaced.is_some() {
            tracing::trace!("throttle dropped superseded action");
        }
    }

    /// Check if an action is waiting for the next tick
    pub fn has_pending(&self) -> bool {
        self.gate.pending.borrow().is_some()
    }

    /// Tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The scheduler timer driving the repeating tick (None once disposed)
    pub fn tick_timer(&self) -> Option<TimerId> {
        self.tick_timer
    }

    /// Stop ticking permanently and drop any waiting action
    pub fn dispose(&mut self) {
        if self.gate.disposed.get() {
            return;
        }
        self.gate.disposed.set(true);
        // Take first so the action is dropped without the slot borrowed
        let dropped = self.gate.pending.borrow_mut().take();
        drop(dropped);

        if let Some(id) = self.tick_timer.take() {
            if let Some(scheduler) = self.scheduler.upgrade() {
                scheduler.cancel(id);
            }
        }
        tracing::debug!(interval = ?self.interval, "throttle disposed");
    }

    /// Check if the throttle has been disposed
    pub fn is_disposed(&self) -> bool {
        self.gate.disposed.get()
    }
}

impl Drop for Throttle {
    fn drop(&mut self) {
        self.dispose();
    }
}
