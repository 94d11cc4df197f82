//! Cooperative timer scheduler
//!
//! Owns every pending timer of a UI event loop and fires them when the host
//! advances time. Nothing here spawns threads: the host calls [`TimerScheduler::tick`]
//! (wall clock) or [`TimerScheduler::advance`] (virtual time) from its loop, and
//! due callbacks run inline, in deadline order.
//!
//! Callbacks run with the scheduler unborrowed, so a callback may schedule or
//! cancel timers (including itself).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::error::{Result, TimerError};

new_key_type! {
    /// Unique identifier for a scheduled timer
    pub struct TimerId;
}

/// Shared handle to the loop-owned scheduler
pub type SharedScheduler = Rc<TimerScheduler>;

/// Callback invoked when a timer fires
pub type TimerCallback = Box<dyn FnMut()>;

struct TimerEntry {
    /// Virtual time at which the timer is next due
    deadline: Duration,
    /// Repeat interval (None for one-shot timers)
    interval: Option<Duration>,
    /// Registration order, breaks ties between equal deadlines
    seq: u64,
    /// Taken out while the callback is running
    callback: Option<TimerCallback>,
}

struct SchedulerState {
    timers: SlotMap<TimerId, TimerEntry>,
    now: Duration,
    next_seq: u64,
    last_tick: Instant,
}

impl SchedulerState {
    /// Earliest timer due at or before `limit`
    fn earliest_due(&self, limit: Duration) -> Option<TimerId> {
        self.timers
            .iter()
            .filter(|(_, t)| t.callback.is_some() && t.deadline <= limit)
            .min_by_key(|(_, t)| (t.deadline, t.seq))
            .map(|(id, _)| id)
    }

    fn insert(
        &mut self,
        delay: Duration,
        interval: Option<Duration>,
        callback: TimerCallback,
    ) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            deadline: self.now + delay,
            interval,
            seq,
            callback: Some(callback),
        })
    }
}

/// A timer taken out of the scheduler to be run unborrowed
struct Firing {
    id: TimerId,
    callback: TimerCallback,
    repeating: bool,
}

/// The scheduler that owns and fires all cooperative timers of one loop
pub struct TimerScheduler {
    state: RefCell<SchedulerState>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(SchedulerState {
                timers: SlotMap::with_key(),
                now: Duration::ZERO,
                next_seq: 0,
                last_tick: Instant::now(),
            }),
        }
    }

    /// Create a scheduler wrapped in the shared handle timers hold on to
    pub fn shared() -> SharedScheduler {
        Rc::new(Self::new())
    }

    /// Current virtual time (time elapsed since creation, as seen by timers)
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Schedule `callback` to run once, `delay` from now
    pub fn schedule_once<F: FnOnce() + 'static>(&self, delay: Duration, callback: F) -> TimerId {
        let mut callback = Some(callback);
        let id = self.state.borrow_mut().insert(
            delay,
            None,
            Box::new(move || {
                if let Some(callback) = callback.take() {
                    callback();
                }
            }),
        );
        tracing::trace!(?id, ?delay, "timer scheduled");
        id
    }

    /// Schedule `callback` to run every `interval`, first firing one interval from now
    pub fn schedule_repeating<F: FnMut() + 'static>(
        &self,
        interval: Duration,
        callback: F,
    ) -> Result<TimerId> {
        if interval.is_zero() {
            return Err(TimerError::ZeroInterval);
        }
        let id = self
            .state
            .borrow_mut()
            .insert(interval, Some(interval), Box::new(callback));
        tracing::trace!(?id, ?interval, "repeating timer scheduled");
        Ok(id)
    }

    /// Cancel a timer. Returns false if it was not scheduled.
    pub fn cancel(&self, id: TimerId) -> bool {
        let removed = self.state.borrow_mut().timers.remove(id).is_some();
        if removed {
            tracing::trace!(?id, "timer cancelled");
        }
        removed
    }

    /// Check whether a timer is still scheduled
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.state.borrow().timers.contains_key(id)
    }

    /// Deadline of the next timer to fire, if any
    ///
    /// Hosts use this to decide how long the event loop may sleep.
    pub fn next_deadline(&self) -> Option<Duration> {
        let state = self.state.borrow();
        state
            .timers
            .values()
            .filter(|t| t.callback.is_some())
            .map(|t| t.deadline)
            .min()
    }

    /// Number of scheduled timers
    pub fn len(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Check if no timers are scheduled
    pub fn is_empty(&self) -> bool {
        self.state.borrow().timers.is_empty()
    }

    /// Advance by the wall-clock time elapsed since the previous `tick`
    ///
    /// Returns the number of callbacks fired.
    pub fn tick(&self) -> usize {
        let dt = {
            let mut state = self.state.borrow_mut();
            let now = Instant::now();
            let dt = now - state.last_tick;
            state.last_tick = now;
            dt
        };
        self.advance(dt)
    }

    /// Advance virtual time by `dt`, firing every timer that comes due
    ///
    /// Timers fire in deadline order (registration order on ties). A repeating
    /// timer fires once per interval elapsed. Returns the number of callbacks fired.
    pub fn advance(&self, dt: Duration) -> usize {
        let target = self.now() + dt;
        let mut fired = 0;

        loop {
            let firing = {
                let mut state = self.state.borrow_mut();
                let Some(id) = state.earliest_due(target) else {
                    break;
                };
                let deadline = state.timers[id].deadline;
                state.now = state.now.max(deadline);
                Self::take_for_firing(&mut state, id, true)
            };

            if let Some(firing) = firing {
                self.run(firing);
                fired += 1;
            }
        }

        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
        fired
    }

    /// Fire a timer immediately, regardless of its deadline
    ///
    /// One-shot timers are consumed; repeating timers keep their schedule.
    /// Returns false (and runs nothing) if the timer was cancelled or never existed.
    pub fn fire(&self, id: TimerId) -> bool {
        let firing = {
            let mut state = self.state.borrow_mut();
            Self::take_for_firing(&mut state, id, false)
        };
        match firing {
            Some(firing) => {
                self.run(firing);
                true
            }
            None => false,
        }
    }

    fn take_for_firing(
        state: &mut SchedulerState,
        id: TimerId,
        reschedule: bool,
    ) -> Option<Firing> {
        let entry = state.timers.get_mut(id)?;
        let callback = entry.callback.take()?;
        let repeating = match entry.interval {
            Some(interval) => {
                if reschedule {
                    entry.deadline += interval;
                }
                true
            }
            None => false,
        };
        if !repeating {
            state.timers.remove(id);
        }
        Some(Firing {
            id,
            callback,
            repeating,
        })
    }

    fn run(&self, firing: Firing) {
        let Firing {
            id,
            mut callback,
            repeating,
        } = firing;
        callback();

        if repeating {
            // Put the callback back unless the timer was cancelled while running
            if let Some(entry) = self.state.borrow_mut().timers.get_mut(id) {
                entry.callback = Some(callback);
            }
        }
    }

    /// Cancel every scheduled timer
    pub fn clear(&self) {
        let ids: SmallVec<[TimerId; 8]> = self.state.borrow().timers.keys().collect();
        for id in ids {
            self.cancel(id);
        }
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}
