//! Thumb interaction state machine
//!
//! [`ThumbController`] owns the thumb position and the `visible`/`dragging`
//! flags, and decides which way synchronization flows:
//!
//! - **Passive**: scroll updates from the content move the thumb through
//!   [`mapper::forward`].
//! - **Drag**: pointer moves place the thumb immediately and queue a jump of
//!   the content through a [`Throttle`]. Scroll updates are ignored meanwhile,
//!   so the content echoing the jump back cannot fight the pointer.
//!
//! Visibility is shown on scroll start and hidden by a [`Debouncer`] after
//! scrolling or dragging goes quiet.
//!
//! # States
//!
//! ```text
//!  IdleHidden --scroll start--> IdleVisible --scroll end--> VisibleTimingOut
//!      ^                                                          |
//!      +---------------------- hide timer fires ------------------+
//!
//!  any --pointer down--> Dragging --pointer up/cancel--> VisibleTimingOut
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};
use thumbtrack_core::{Debouncer, ScrollbarEvent, SharedScheduler, Throttle};

use crate::config::ScrollbarConfig;
use crate::content::{ScrollContent, SharedContent};
use crate::error::Result;
use crate::fade::ThumbFade;
use crate::geometry::{ScrollExtent, ThumbPosition, TrackGeometry};
use crate::mapper;

new_key_type! {
    /// Handle for a change listener
    pub struct ListenerId;
}

/// Change listener callback
pub type ChangeListener = Box<dyn FnMut(ThumbRenderState)>;

/// What the renderer needs to draw the thumb
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbRenderState {
    /// Top edge of the thumb in track pixels
    pub thumb_top: f32,
    /// Whether the thumb should be shown (fades out when false)
    pub visible: bool,
}

/// Named interaction states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbPhase {
    /// Not scrolling, thumb hidden
    IdleHidden,
    /// Scrolling (or just scrolled), thumb shown, no hide scheduled
    IdleVisible,
    /// Thumb shown with a hide scheduled
    VisibleTimingOut,
    /// Thumb held by the pointer
    Dragging,
}

struct ThumbState {
    position: ThumbPosition,
    visible: bool,
    dragging: bool,
    always_shown: bool,
    geometry: Option<TrackGeometry>,
    /// Last extent read from the content, used while the content is busy
    extent: Option<ScrollExtent>,
    last_emitted: ThumbRenderState,
}

impl ThumbState {
    fn render_state(&self) -> ThumbRenderState {
        ThumbRenderState {
            thumb_top: self.position.top(),
            visible: self.always_shown || self.visible || self.dragging,
        }
    }
}

/// State reachable from timer callbacks
struct Shared {
    state: RefCell<ThumbState>,
    listeners: RefCell<SlotMap<ListenerId, ChangeListener>>,
}

impl Shared {
    /// Apply `f` to the state, then notify listeners if the render state changed
    fn update<F: FnOnce(&mut ThumbState)>(&self, f: F) {
        f(&mut self.state.borrow_mut());
        self.notify();
    }

    /// Deliver the render state to listeners, once per distinct value
    ///
    /// Listeners run with the state unborrowed and may read the controller or
    /// feed it more events; a nested change is delivered by the outer loop.
    /// They must not subscribe or unsubscribe from inside the callback.
    fn notify(&self) {
        let Ok(mut listeners) = self.listeners.try_borrow_mut() else {
            return;
        };
        loop {
            let snapshot = {
                let mut state = self.state.borrow_mut();
                let current = state.render_state();
                if current == state.last_emitted {
                    return;
                }
                state.last_emitted = current;
                current
            };
            tracing::trace!(top = snapshot.thumb_top, visible = snapshot.visible, "thumb changed");
            for listener in listeners.values_mut() {
                listener(snapshot);
            }
        }
    }
}

/// Overlay scrollbar thumb driven by scroll and pointer events
pub struct ThumbController {
    config: ScrollbarConfig,
    content: SharedContent,
    shared: Rc<Shared>,
    hide_timer: Debouncer,
    scroll_gate: Throttle,
    fade: ThumbFade,
    disposed: bool,
}

impl ThumbController {
    /// Mount a thumb over `content`, registering its timers on `scheduler`
    pub fn new(
        config: ScrollbarConfig,
        content: SharedContent,
        scheduler: &SharedScheduler,
    ) -> Result<Self> {
        config.validate()?;
        let scroll_gate = Throttle::new(scheduler, config.scroll_interval)?;
        let hide_timer = Debouncer::new(scheduler);

        let state = ThumbState {
            position: ThumbPosition::TOP,
            visible: false,
            dragging: false,
            always_shown: config.always_shown,
            geometry: None,
            extent: None,
            last_emitted: ThumbRenderState::default(),
        };
        let initial = state.render_state();
        let state = ThumbState {
            last_emitted: initial,
            ..state
        };

        tracing::debug!(
            always_shown = config.always_shown,
            interval = ?config.scroll_interval,
            "thumb controller mounted"
        );

        Ok(Self {
            fade: ThumbFade::new(config.fade_duration, initial.visible),
            config,
            content,
            shared: Rc::new(Shared {
                state: RefCell::new(state),
                listeners: RefCell::new(SlotMap::with_key()),
            }),
            hide_timer,
            scroll_gate,
            disposed: false,
        })
    }

    // =========================================================================
    // Inbound events
    // =========================================================================

    /// Route an event to its handler
    pub fn handle_event(&mut self, event: ScrollbarEvent) {
        match event {
            ScrollbarEvent::ScrollStart => self.on_scroll_start(),
            ScrollbarEvent::ScrollUpdate { offset } => self.on_scroll_update(offset),
            ScrollbarEvent::ScrollEnd => self.on_scroll_end(),
            ScrollbarEvent::PointerDown { y } => self.on_pointer_down(y),
            ScrollbarEvent::PointerMove { y } => self.on_pointer_move(y),
            ScrollbarEvent::PointerUp => self.on_pointer_up(),
            ScrollbarEvent::PointerCancel => self.on_pointer_cancel(),
            ScrollbarEvent::Layout {
                track_height,
                thumb_height,
            } => self.on_layout(TrackGeometry::new(track_height, thumb_height)),
        }
    }

    /// The content started scrolling: show the thumb and cancel any pending hide
    pub fn on_scroll_start(&mut self) {
        if self.disposed {
            return;
        }
        self.hide_timer.clear();
        self.shared.update(|state| state.visible = true);
    }

    /// The content scrolled to `offset`
    ///
    /// Ignored while dragging (the pointer owns the thumb) and before the
    /// first layout.
    pub fn on_scroll_update(&mut self, offset: f32) {
        if self.disposed {
            return;
        }
        let (dragging, geometry) = {
            let state = self.shared.state.borrow();
            (state.dragging, state.geometry)
        };
        if dragging {
            tracing::trace!(offset, "scroll update ignored while dragging");
            return;
        }
        let Some(geometry) = geometry else {
            tracing::trace!(offset, "scroll update before layout; skipping");
            return;
        };
        let Some(extent) = self.read_extent() else {
            return;
        };

        let extent = extent.with_current(offset);
        let position = mapper::forward(offset, &extent, &geometry);
        self.shared.update(|state| {
            state.extent = Some(extent);
            state.position = position;
        });
    }

    /// The content stopped scrolling: hide after the scroll grace delay
    pub fn on_scroll_end(&mut self) {
        if self.disposed {
            return;
        }
        self.schedule_hide(self.config.scroll_end_hide_delay);
    }

    /// Pointer pressed on the thumb track: the drag takes over the thumb
    pub fn on_pointer_down(&mut self, y: f32) {
        if self.disposed {
            return;
        }
        tracing::debug!(y, "thumb drag started");
        self.shared.update(|state| state.dragging = true);
    }

    /// Pointer moved while dragging: place the thumb now, jump the content soon
    pub fn on_pointer_move(&mut self, y: f32) {
        if self.disposed {
            return;
        }
        let (dragging, geometry) = {
            let state = self.shared.state.borrow();
            (state.dragging, state.geometry)
        };
        if !dragging {
            return;
        }
        let Some(geometry) = geometry else {
            tracing::trace!(y, "pointer move before layout; skipping");
            return;
        };
        let Some(extent) = self.read_extent() else {
            return;
        };

        let offset = mapper::inverse(y, &extent, &geometry);
        let position = mapper::forward(offset, &extent, &geometry);
        tracing::trace!(y, offset, top = position.top(), "thumb dragged");
        self.shared.update(|state| state.position = position);

        let content = Rc::downgrade(&self.content);
        self.scroll_gate.run(move || jump_content(&content, offset));
    }

    /// Pointer released: end the drag and hide after the drag grace delay
    pub fn on_pointer_up(&mut self) {
        self.end_drag("released");
    }

    /// Pointer sequence cancelled: same as release
    pub fn on_pointer_cancel(&mut self) {
        self.end_drag("cancelled");
    }

    /// The host measured the track
    ///
    /// Re-syncs the thumb with the content's current offset, which reconciles
    /// any updates skipped before layout. During a drag the thumb keeps its
    /// place, clamped into the new track.
    pub fn on_layout(&mut self, geometry: TrackGeometry) {
        if self.disposed {
            return;
        }
        let dragging = self.shared.state.borrow().dragging;
        let extent = if dragging { None } else { self.read_extent() };

        self.shared.update(|state| {
            state.geometry = Some(geometry);
            match extent {
                Some(extent) => {
                    state.extent = Some(extent);
                    state.position = mapper::forward(extent.current, &extent, &geometry);
                }
                None => {
                    state.position = ThumbPosition::clamped(state.position.top(), &geometry);
                }
            }
        });
        tracing::trace!(
            track = geometry.track_height,
            thumb = geometry.thumb_height,
            "thumb track laid out"
        );
    }

    /// Layout from a measured track height and the configured thumb height
    pub fn on_track_resized(&mut self, track_height: f32) {
        self.on_layout(self.config.geometry_for_track(track_height));
    }

    fn end_drag(&mut self, reason: &str) {
        if self.disposed || !self.shared.state.borrow().dragging {
            return;
        }
        tracing::debug!(reason, "thumb drag ended");
        // Stay shown through the drop-off grace period even if a hide fired mid-drag
        self.shared.update(|state| {
            state.dragging = false;
            state.visible = true;
        });
        self.schedule_hide(self.config.drag_end_hide_delay);
    }

    fn schedule_hide(&mut self, delay: Duration) {
        let shared: Weak<Shared> = Rc::downgrade(&self.shared);
        self.hide_timer.run(
            move || {
                if let Some(shared) = shared.upgrade() {
                    tracing::debug!("thumb hide timer fired");
                    shared.update(|state| state.visible = false);
                }
            },
            delay,
        );
        tracing::debug!(?delay, "thumb hide scheduled");
    }

    /// Read the content extent, falling back to the last known one if the
    /// content is currently borrowed (e.g. reporting from inside `jump_to`)
    fn read_extent(&self) -> Option<ScrollExtent> {
        match self.content.try_borrow() {
            Ok(content) => Some(content.extent()),
            Err(_) => {
                let cached = self.shared.state.borrow().extent;
                if cached.is_none() {
                    tracing::warn!("scroll content busy and no extent cached; skipping");
                }
                cached
            }
        }
    }

    // =========================================================================
    // Outbound state
    // =========================================================================

    /// Top edge of the thumb in track pixels
    pub fn thumb_top(&self) -> f32 {
        self.shared.state.borrow().position.top()
    }

    /// Whether the thumb renders as shown (`always_shown || visible || dragging`)
    pub fn is_visible(&self) -> bool {
        self.shared.state.borrow().render_state().visible
    }

    /// Whether the pointer currently owns the thumb
    pub fn is_dragging(&self) -> bool {
        self.shared.state.borrow().dragging
    }

    /// Current interaction phase
    pub fn phase(&self) -> ThumbPhase {
        let state = self.shared.state.borrow();
        if state.dragging {
            ThumbPhase::Dragging
        } else if state.visible && self.hide_timer.is_pending() {
            ThumbPhase::VisibleTimingOut
        } else if state.visible {
            ThumbPhase::IdleVisible
        } else {
            ThumbPhase::IdleHidden
        }
    }

    /// Position and visibility for the renderer
    pub fn render_state(&self) -> ThumbRenderState {
        self.shared.state.borrow().render_state()
    }

    /// Last geometry pushed by the host
    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.shared.state.borrow().geometry
    }

    /// Active configuration
    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// Check whether a content jump is waiting for the next throttle tick
    pub fn has_pending_jump(&self) -> bool {
        self.scroll_gate.has_pending()
    }

    /// Register a listener called whenever the render state changes
    pub fn subscribe<F: FnMut(ThumbRenderState) + 'static>(&mut self, listener: F) -> ListenerId {
        self.shared.listeners.borrow_mut().insert(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.shared.listeners.borrow_mut().remove(id).is_some()
    }

    // =========================================================================
    // Fade
    // =========================================================================

    /// Advance the show/hide fade by `dt`
    ///
    /// Returns true while the fade is still animating.
    pub fn tick_fade(&mut self, dt: Duration) -> bool {
        self.fade.set_visible(self.is_visible());
        self.fade.tick(dt)
    }

    /// Current thumb opacity (0.0 to 1.0)
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Unmount: cancel the hide timer, stop the throttle, drop listeners
    ///
    /// Idempotent. Later events are ignored and no timer callback can reach
    /// the thumb state again.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.hide_timer.dispose();
        self.scroll_gate.dispose();
        if let Ok(mut listeners) = self.shared.listeners.try_borrow_mut() {
            listeners.clear();
        }
        tracing::debug!("thumb controller disposed");
    }

    /// Check if the controller has been disposed
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for ThumbController {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn jump_content(content: &Weak<RefCell<dyn ScrollContent>>, offset: f32) {
    let Some(content) = content.upgrade() else {
        return;
    };
    match content.try_borrow_mut() {
        Ok(mut content) => {
            tracing::trace!(offset, "jumping content");
            content.jump_to(offset);
        }
        Err(_) => tracing::warn!(offset, "scroll content busy; dropping jump"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use thumbtrack_core::TimerScheduler;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn content(min: f32, max: f32, current: f32) -> Rc<RefCell<ScrollExtent>> {
        Rc::new(RefCell::new(ScrollExtent::new(min, max, current)))
    }

    fn mounted(
        config: ScrollbarConfig,
        content: &Rc<RefCell<ScrollExtent>>,
    ) -> (SharedScheduler, ThumbController) {
        let scheduler = TimerScheduler::shared();
        let shared: SharedContent = content.clone();
        let controller = ThumbController::new(config, shared, &scheduler).unwrap();
        (scheduler, controller)
    }

    #[test]
    fn test_starts_hidden_at_top() {
        let content = content(0.0, 1000.0, 0.0);
        let (_scheduler, controller) = mounted(ScrollbarConfig::default(), &content);

        assert_eq!(controller.thumb_top(), 0.0);
        assert!(!controller.is_visible());
        assert!(!controller.is_dragging());
        assert_eq!(controller.phase(), ThumbPhase::IdleHidden);
        assert!(controller.geometry().is_none());
    }

    #[test]
    fn test_always_shown_is_visible_without_scrolling() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::always_shown(), &content);

        assert!(controller.is_visible());
        assert_eq!(controller.opacity(), 1.0);

        controller.on_scroll_start();
        controller.on_scroll_end();
        scheduler.advance(ms(5000));
        assert!(controller.is_visible());
    }

    #[test]
    fn test_layout_syncs_thumb_with_content() {
        let content = content(0.0, 1000.0, 500.0);
        let (_scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);

        controller.on_layout(TrackGeometry::new(200.0, 50.0));
        assert_eq!(controller.thumb_top(), 75.0);
    }

    #[test]
    fn test_scroll_update_before_layout_is_skipped() {
        let content = content(0.0, 1000.0, 0.0);
        let (_scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);

        controller.on_scroll_update(500.0);
        assert_eq!(controller.thumb_top(), 0.0);

        // Layout reconciles with wherever the content is now
        content.borrow_mut().jump_to(1000.0);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));
        assert_eq!(controller.thumb_top(), 150.0);
    }

    #[test]
    fn test_scroll_lifecycle_visibility() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        controller.on_scroll_start();
        assert!(controller.is_visible());
        assert_eq!(controller.phase(), ThumbPhase::IdleVisible);

        controller.on_scroll_update(250.0);
        assert_eq!(controller.thumb_top(), 37.5);

        controller.on_scroll_end();
        assert_eq!(controller.phase(), ThumbPhase::VisibleTimingOut);

        scheduler.advance(ms(499));
        assert!(controller.is_visible());

        scheduler.advance(ms(1));
        assert!(!controller.is_visible());
        assert_eq!(controller.phase(), ThumbPhase::IdleHidden);
    }

    #[test]
    fn test_scroll_start_cancels_pending_hide() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);

        controller.on_scroll_start();
        controller.on_scroll_end();
        scheduler.advance(ms(400));

        controller.on_scroll_start();
        assert_eq!(controller.phase(), ThumbPhase::IdleVisible);
        scheduler.advance(ms(1000));
        assert!(controller.is_visible());
    }

    #[test]
    fn test_drag_suppresses_scroll_updates() {
        let content = content(0.0, 1000.0, 500.0);
        let (_scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));
        assert_eq!(controller.thumb_top(), 75.0);

        controller.on_pointer_down(100.0);
        assert!(controller.is_dragging());
        assert_eq!(controller.phase(), ThumbPhase::Dragging);

        controller.on_scroll_update(0.0);
        controller.on_scroll_update(1000.0);
        assert_eq!(controller.thumb_top(), 75.0);

        controller.on_pointer_move(175.0);
        assert_eq!(controller.thumb_top(), 150.0);
    }

    #[test]
    fn test_pointer_move_without_drag_is_ignored() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        controller.on_pointer_move(150.0);
        assert_eq!(controller.thumb_top(), 0.0);
        assert!(!controller.has_pending_jump());

        scheduler.advance(ms(200));
        assert_eq!(content.borrow().current, 0.0);
    }

    #[test]
    fn test_drag_moves_thumb_now_and_content_on_tick() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        controller.on_pointer_down(25.0);
        controller.on_pointer_move(100.0);
        assert_eq!(controller.thumb_top(), 75.0);
        assert!(controller.has_pending_jump());
        assert_eq!(content.borrow().current, 0.0);

        scheduler.advance(ms(100));
        assert_eq!(content.borrow().current, 500.0);
        assert!(!controller.has_pending_jump());
    }

    #[test]
    fn test_pointer_up_schedules_longer_hide() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        controller.on_scroll_start();
        controller.on_pointer_down(25.0);
        controller.on_pointer_up();
        assert!(!controller.is_dragging());
        assert_eq!(controller.phase(), ThumbPhase::VisibleTimingOut);

        scheduler.advance(ms(999));
        assert!(controller.is_visible());
        scheduler.advance(ms(1));
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_layout_mid_drag_clamps_thumb() {
        let content = content(0.0, 1000.0, 0.0);
        let (_scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        controller.on_pointer_down(100.0);
        controller.on_pointer_move(175.0);
        assert_eq!(controller.thumb_top(), 150.0);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        controller.subscribe(move |state| s.borrow_mut().push(state.thumb_top));

        controller.on_layout(TrackGeometry::new(100.0, 50.0));
        assert!(controller.is_dragging());
        assert_eq!(controller.thumb_top(), 50.0);
        assert_eq!(*seen.borrow(), vec![50.0]);
    }

    #[test]
    fn test_release_after_mid_drag_hide_keeps_grace_period() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);

        controller.on_scroll_start();
        controller.on_scroll_end();
        controller.on_pointer_down(30.0);
        scheduler.advance(ms(600));
        assert_eq!(controller.phase(), ThumbPhase::Dragging);

        controller.on_pointer_up();
        assert!(controller.is_visible());
        assert_eq!(controller.phase(), ThumbPhase::VisibleTimingOut);

        scheduler.advance(ms(999));
        assert!(controller.is_visible());
        scheduler.advance(ms(1));
        assert!(!controller.is_visible());
    }

    #[test]
    fn test_pointer_cancel_ends_drag() {
        let content = content(0.0, 1000.0, 0.0);
        let (_scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);

        controller.on_pointer_down(10.0);
        assert!(controller.is_visible());
        controller.on_pointer_cancel();
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_listeners_see_each_change_once() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        let id = controller.subscribe(move |state| s.borrow_mut().push(state));

        controller.on_scroll_start();
        controller.on_scroll_start();
        controller.on_scroll_update(500.0);
        controller.on_scroll_update(500.0);
        controller.on_scroll_end();
        scheduler.advance(ms(500));

        assert_eq!(
            *seen.borrow(),
            vec![
                ThumbRenderState { thumb_top: 0.0, visible: true },
                ThumbRenderState { thumb_top: 75.0, visible: true },
                ThumbRenderState { thumb_top: 75.0, visible: false },
            ]
        );

        assert!(controller.unsubscribe(id));
        assert!(!controller.unsubscribe(id));
        controller.on_scroll_start();
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_handle_event_dispatch() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);

        controller.handle_event(ScrollbarEvent::Layout {
            track_height: 200.0,
            thumb_height: 50.0,
        });
        controller.handle_event(ScrollbarEvent::PointerDown { y: 100.0 });
        controller.handle_event(ScrollbarEvent::PointerMove { y: 100.0 });
        assert_eq!(controller.thumb_top(), 75.0);

        controller.handle_event(ScrollbarEvent::PointerUp);
        scheduler.advance(ms(100));
        assert_eq!(content.borrow().current, 500.0);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_track_resized_uses_config_thumb_height() {
        let content = content(0.0, 1000.0, 1000.0);
        let config = ScrollbarConfig::default().with_thumb_size(8.0, 40.0);
        let (_scheduler, mut controller) = mounted(config, &content);

        controller.on_track_resized(240.0);
        assert_eq!(controller.geometry(), Some(TrackGeometry::new(240.0, 40.0)));
        assert_eq!(controller.thumb_top(), 200.0);
    }

    #[test]
    fn test_fade_follows_visibility() {
        let content = content(0.0, 1000.0, 0.0);
        let config = ScrollbarConfig::default().with_fade_duration(ms(100));
        let (scheduler, mut controller) = mounted(config, &content);

        assert_eq!(controller.opacity(), 0.0);
        controller.on_scroll_start();
        assert!(controller.tick_fade(ms(50)));
        assert!((controller.opacity() - 0.5).abs() < 1e-5);
        assert!(!controller.tick_fade(ms(50)));
        assert_eq!(controller.opacity(), 1.0);

        controller.on_scroll_end();
        scheduler.advance(ms(500));
        controller.tick_fade(ms(100));
        assert_eq!(controller.opacity(), 0.0);
    }

    #[test]
    fn test_dispose_silences_timers() {
        let content = content(0.0, 1000.0, 0.0);
        let (scheduler, mut controller) = mounted(ScrollbarConfig::default(), &content);
        controller.on_layout(TrackGeometry::new(200.0, 50.0));

        let notified = Rc::new(Cell::new(0));
        let n = notified.clone();
        controller.subscribe(move |_| n.set(n.get() + 1));

        controller.on_scroll_start();
        controller.on_pointer_down(25.0);
        controller.on_pointer_move(100.0);
        controller.on_pointer_up();
        let before = notified.get();

        controller.dispose();
        controller.dispose();
        assert!(controller.is_disposed());
        assert!(scheduler.is_empty());

        scheduler.advance(ms(5000));
        assert_eq!(content.borrow().current, 0.0);
        assert!(controller.is_visible());
        assert_eq!(notified.get(), before);

        // Events after unmount are ignored
        controller.on_scroll_update(1000.0);
        assert_eq!(controller.thumb_top(), 75.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let scheduler = TimerScheduler::shared();
        let content: SharedContent = Rc::new(RefCell::new(ScrollExtent::default()));
        let config = ScrollbarConfig::default().with_scroll_interval(Duration::ZERO);
        assert!(ThumbController::new(config, content, &scheduler).is_err());
        assert!(scheduler.is_empty());
    }
}
