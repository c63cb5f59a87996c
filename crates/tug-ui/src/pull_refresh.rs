//! Pull-to-refresh gesture controller.
//!
//! Translates a single-pointer vertical drag on a scrollable host into a
//! damped, threshold-gated refresh trigger, drives the [`PullIndicator`]
//! through its filling phase, and animates the host content back to rest (0)
//! or the parked refreshing offset (the threshold) when the gesture ends.
//!
//! The controller is composed against capabilities: it binds to anything
//! implementing [`PullableHost`] and owns the host's vertical translation and
//! layout-suppression flag while a settle animation is in flight. All state
//! lives on the single event-dispatch thread; touch events, host-scroll
//! notifications, frame ticks, and programmatic calls interleave but never
//! run in parallel.
//!
//! ## Session model
//!
//! One pull session spans touch-down to settle completion:
//!
//! ```text
//! Idle → MaybeTracking → Tracking → Settling → Idle (rest)
//!                                           └→ Parked (refreshing)
//! ```
//!
//! Two flags deliberately outlive the drag phases: `did_pass_refresh_threshold`
//! latches a threshold crossing across the settle animation, and
//! `is_refresh_triggered` guarantees the refresh callback fires at most once
//! per cycle. Both clear only when a session fully settles at rest.

use std::rc::Rc;

use tug_animation::{AnimationSpec, Tween};
use tug_foundation::{
    PointerEvent, PointerEventKind, PullableHost, RefreshListener, TouchObserver, MAX_PULL_FACTOR,
    MOVE_HYSTERESIS, PULL_THRESHOLD, SETTLE_DURATION_MS,
};
use tug_ui_graphics::Dp;

use crate::indicator::{IndicatorStyle, PullIndicator};

/// Drag sub-state of the current pull session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No gesture in progress, content at rest.
    Idle,
    /// A move arrived while pulling is allowed; origin recorded, waiting for
    /// the hysteresis distance before acting.
    MaybeTracking,
    /// The pull owns the gesture and is moving content.
    Tracking,
    /// The settle/park animation is returning content to its target offset.
    Settling,
    /// Content is held at the threshold while a refresh is in progress.
    Parked,
}

/// Gesture tuning, converted to device pixels once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullConfig {
    /// Device density factor (device px per dp).
    pub density: f32,
    /// Pull distance at which refresh triggers.
    pub threshold: Dp,
    /// Settle/park animation duration.
    pub settle_duration_ms: u64,
    /// Move debounce distance in device pixels.
    pub move_hysteresis: f32,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            threshold: PULL_THRESHOLD,
            settle_duration_ms: SETTLE_DURATION_MS,
            move_hysteresis: MOVE_HYSTERESIS,
        }
    }
}

pub struct PullToRefreshController {
    host: Option<Rc<dyn PullableHost>>,
    listener: Option<Rc<dyn RefreshListener>>,
    touch_observer: Option<Rc<dyn TouchObserver>>,
    indicator: PullIndicator,
    settle_animation: Option<Tween>,

    threshold_px: f32,
    max_pull_down_y: f32,
    settle_duration_ms: u64,
    move_hysteresis: f32,

    /// Current pull offset in device pixels. The observable value is clamped
    /// to `[0, max_pull_down_y]`; internally it may transiently dip below
    /// zero while the rubber-band re-centering runs, which is what lets a
    /// re-drag after a threshold crossing un-cross it.
    pulled_down_y: f32,
    phase: SessionPhase,
    started_tracking_y: f32,
    last_touch_y: Option<f32>,

    allow_pull_to_refresh: bool,
    did_pass_refresh_threshold: bool,
    is_refresh_triggered: bool,
    force_end_touch_session: bool,
    touch_handler_installed: bool,
}

impl PullToRefreshController {
    pub fn new(config: PullConfig, style: IndicatorStyle) -> Self {
        let threshold_px = config.threshold.to_px(config.density);
        Self {
            host: None,
            listener: None,
            touch_observer: None,
            indicator: PullIndicator::new(style, config.density),
            settle_animation: None,
            threshold_px,
            max_pull_down_y: threshold_px * MAX_PULL_FACTOR,
            settle_duration_ms: config.settle_duration_ms,
            move_hysteresis: config.move_hysteresis,
            pulled_down_y: 0.0,
            phase: SessionPhase::Idle,
            started_tracking_y: 0.0,
            last_touch_y: None,
            allow_pull_to_refresh: false,
            did_pass_refresh_threshold: false,
            is_refresh_triggered: false,
            force_end_touch_session: false,
            touch_handler_installed: false,
        }
    }

    /// Bind to the scrollable host. Single-bind: a second call is ignored.
    pub fn attach_host(&mut self, host: Rc<dyn PullableHost>) {
        if self.host.is_some() {
            log::warn!("pull-to-refresh host already attached, ignoring rebind");
            return;
        }
        host.set_touch_handler_installed(true);
        self.touch_handler_installed = true;
        self.host = Some(host);
        self.sync_pull_offset();
    }

    /// Host-scroll notification: recompute whether pulling is allowed.
    pub fn host_scrolled(&mut self) {
        if let Some(host) = &self.host {
            self.allow_pull_to_refresh = host.first_item_fully_visible();
        }
    }

    pub fn set_refresh_listener(&mut self, listener: Rc<dyn RefreshListener>) {
        self.listener = Some(listener);
    }

    /// Install an observer that sees every raw pointer event delivered to
    /// the controller, before the gesture state machine runs.
    pub fn set_touch_observer(&mut self, observer: Rc<dyn TouchObserver>) {
        self.touch_observer = Some(observer);
    }

    /// Raw touch handler. Returns whether the event was consumed by the pull
    /// gesture; unconsumed events belong to the host's own scrolling.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        if !self.touch_handler_installed {
            return false;
        }
        if let Some(observer) = &self.touch_observer {
            observer.on_touch(event);
        }
        match event.kind {
            PointerEventKind::Move => self.handle_move(event.y()),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.end_touch_session();
                false
            }
            PointerEventKind::Down => false,
        }
    }

    /// Programmatic refresh control. Outside a drag the content transitions
    /// immediately (optionally animated) to the parked or rest offset; during
    /// a drag the transition is deferred until the finger lifts, by forcing
    /// the session to end.
    pub fn set_refreshing(&mut self, is_refreshing: bool, animate: bool) {
        self.did_pass_refresh_threshold = is_refreshing;
        if self.host.is_none() {
            log::warn!("set_refreshing called before a host is attached");
            return;
        }
        if self.is_dragging() {
            self.force_end_touch_session = true;
        } else {
            self.apply_refresh_mode(animate);
        }
    }

    /// True once the threshold was passed or the refresh callback fired,
    /// until the session settles back to rest.
    pub fn is_refreshing(&self) -> bool {
        self.did_pass_refresh_threshold || self.is_refresh_triggered
    }

    /// True while any drag or settle animation is active; callers use this
    /// to avoid conflicting programmatic operations.
    pub fn is_interacted(&self) -> bool {
        self.is_dragging()
            || self.did_pass_refresh_threshold
            || self.pulled_down_y > 0.0
            || self.settle_animation.is_some()
    }

    /// Abort an in-flight settle animation without its completion side
    /// effects: no settle, no animating-status notification. State may be
    /// inconsistent until the next session settles.
    pub fn cancel_animation(&mut self) {
        self.settle_animation = None;
    }

    /// Toggle whether touch input is delivered to this controller at all.
    pub fn set_user_interaction_enabled(&mut self, enabled: bool) {
        if let Some(host) = &self.host {
            host.set_touch_handler_installed(enabled);
        }
        self.touch_handler_installed = enabled;
    }

    /// Advance the settle/park animation to `frame_time_nanos`. Returns true
    /// while more frames are needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(tween) = self.settle_animation.as_mut() else {
            return false;
        };
        let value = tween.tick(frame_time_nanos);
        let finished = tween.is_finished();
        if let Some(host) = &self.host {
            host.set_translation_y(value);
        }
        if finished {
            self.settle_animation = None;
            self.settle_pull_view();
            if let Some(host) = &self.host {
                host.set_layout_suppressed(false);
            }
            self.notify_animating(false);
        }
        !finished
    }

    pub fn needs_frame(&self) -> bool {
        self.settle_animation.is_some()
    }

    /// Current pull offset applied to host content, in `[0, max_pull_down_y]`.
    pub fn pulled_down_y(&self) -> f32 {
        self.pulled_down_y.max(0.0)
    }

    pub fn threshold_px(&self) -> f32 {
        self.threshold_px
    }

    pub fn max_pull_down_y(&self) -> f32 {
        self.max_pull_down_y
    }

    pub fn session_phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn indicator(&self) -> &PullIndicator {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut PullIndicator {
        &mut self.indicator
    }

    fn is_dragging(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::MaybeTracking | SessionPhase::Tracking
        )
    }

    fn handle_move(&mut self, y: f32) -> bool {
        if self.force_end_touch_session {
            self.end_touch_session();
            return false;
        }
        if self.settle_animation.is_some() {
            return false;
        }
        if self.is_dragging() {
            self.track_move(y)
        } else if self.allow_pull_to_refresh {
            self.phase = SessionPhase::MaybeTracking;
            self.started_tracking_y = y;
            self.last_touch_y = Some(y);
            false
        } else {
            self.end_touch_session();
            false
        }
    }

    fn track_move(&mut self, y: f32) -> bool {
        let mut delta_y = (self.started_tracking_y - y).abs();
        // Signed delta: positive when the finger moved up from the origin.
        let raw_delta_y = self.started_tracking_y - y;
        let scrolling_down = self.last_touch_y.is_some_and(|last| last < y);
        self.last_touch_y = Some(y);

        if delta_y <= self.move_hysteresis {
            return false;
        }

        if self.did_pass_refresh_threshold {
            // Re-entering a drag after a crossing in this cycle: re-center
            // the delta around the threshold so the rubber band starts out
            // already extended to the parked offset.
            if raw_delta_y <= 0.0 {
                delta_y += self.threshold_px;
            } else {
                delta_y = self.threshold_px - delta_y;
            }
        }

        // The gesture is pushing content back toward rest and there is no
        // pull left to give back: hand the event stream over to the host's
        // own scrolling.
        let prevent_scrolling = !scrolling_down
            && (self.pulled_down_y <= 0.0
                || (raw_delta_y > 0.0
                    && self.pulled_down_y - raw_delta_y <= 0.0
                    && !self.did_pass_refresh_threshold));
        if prevent_scrolling {
            self.end_touch_session();
            return false;
        }

        self.phase = SessionPhase::Tracking;
        self.pulled_down_y = delta_y.min(self.max_pull_down_y);
        if self.pulled_down_y >= self.threshold_px {
            self.trigger_refresh_callback();
        }
        self.sync_pull_offset();
        true
    }

    fn end_touch_session(&mut self) {
        self.last_touch_y = None;
        self.started_tracking_y = 0.0;
        self.phase = SessionPhase::Idle;
        if self.force_end_touch_session {
            // Stop touch delivery until the forced transition settles; the
            // settle path reinstalls the handler.
            if let Some(host) = &self.host {
                host.set_touch_handler_installed(false);
            }
            self.touch_handler_installed = false;
        } else if self.pulled_down_y != 0.0 {
            self.did_pass_refresh_threshold = self.pulled_down_y >= self.threshold_px;
        }
        log::trace!(
            "pull session ended: pulled={} passed={}",
            self.pulled_down_y,
            self.did_pass_refresh_threshold
        );
        self.apply_refresh_mode(true);
    }

    /// Move content to the offset implied by the current refresh mode:
    /// the threshold when a crossing is latched, rest otherwise.
    fn apply_refresh_mode(&mut self, animate: bool) {
        let Some(host) = self.host.clone() else {
            return;
        };
        let target = if self.did_pass_refresh_threshold {
            self.threshold_px
        } else {
            0.0
        };
        if (target - self.pulled_down_y).abs() > f32::EPSILON {
            if animate {
                if host.is_computing_layout() {
                    // Animating the translation mid-layout is unsafe.
                    self.settle_animation = None;
                    self.settle_pull_view();
                } else {
                    self.settle_animation = Some(Tween::new(
                        host.translation_y(),
                        target,
                        AnimationSpec::linear(self.settle_duration_ms),
                    ));
                    self.phase = SessionPhase::Settling;
                    host.set_layout_suppressed(true);
                    self.notify_animating(true);
                }
            } else {
                self.settle_pull_view();
            }
        } else if self.settle_animation.is_none() {
            self.phase = if self.pulled_down_y == 0.0 {
                SessionPhase::Idle
            } else {
                SessionPhase::Parked
            };
        }
    }

    /// Final settle: pin content at rest or the parked offset, reconcile the
    /// indicator, and close or hold the refresh cycle.
    fn settle_pull_view(&mut self) {
        if !self.did_pass_refresh_threshold || self.force_end_touch_session {
            if self.force_end_touch_session {
                self.force_end_touch_session = false;
                if let Some(host) = &self.host {
                    host.set_touch_handler_installed(true);
                }
                self.touch_handler_installed = true;
            }
            self.indicator.reset_state();
            self.pulled_down_y = 0.0;
        } else {
            self.pulled_down_y = self.threshold_px;
        }
        self.sync_pull_offset();
        if self.pulled_down_y == 0.0 {
            self.is_refresh_triggered = false;
            self.phase = SessionPhase::Idle;
        } else {
            self.trigger_refresh_callback();
            self.phase = SessionPhase::Parked;
        }
    }

    fn trigger_refresh_callback(&mut self) {
        if let Some(listener) = &self.listener {
            if !self.is_refresh_triggered {
                listener.on_refresh();
                self.is_refresh_triggered = true;
            }
        }
    }

    /// Reflect the current pull offset onto the host translation and the
    /// indicator. Skipped while a settle animation owns the translation, and
    /// while the internal offset is in a negative rubber-band transient.
    fn sync_pull_offset(&mut self) {
        if self.settle_animation.is_some() || self.pulled_down_y < 0.0 {
            return;
        }
        let progress = self.pulled_down_y / self.threshold_px;
        if progress == 0.0 {
            self.indicator.set_visible(false);
        } else {
            self.indicator.set_visible(true);
            self.indicator.set_progress(progress);
        }
        if let Some(host) = &self.host {
            host.set_translation_y(self.pulled_down_y);
        }
    }

    fn notify_animating(&self, is_animating: bool) {
        if let Some(listener) = &self.listener {
            listener.on_animating_status_changed(is_animating);
        }
    }
}
