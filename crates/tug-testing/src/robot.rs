//! Robot-style harness for scripting pull gestures against a real
//! controller.
//!
//! The robot plays the role of the host widget's event loop: it delivers
//! pointer events only while the controller's touch handler is installed on
//! the host, and pumps `on_frame` ticks from a manual clock so settle/park
//! animations run deterministically.

use std::rc::Rc;

use tug_animation::FrameClock;
use tug_foundation::{PointerEvent, PointerEventKind};
use tug_ui::{IndicatorFrame, IndicatorStyle, PullConfig, PullToRefreshController};

use crate::clock::ManualFrameClock;
use crate::fakes::{RecordingHost, RecordingListener};

/// ~60 FPS frame period.
pub const FRAME_NANOS: u64 = 16_666_667;

pub struct PullRobot {
    pub controller: PullToRefreshController,
    pub host: Rc<RecordingHost>,
    pub listener: Rc<RecordingListener>,
    clock: ManualFrameClock,
}

impl PullRobot {
    pub fn new() -> Self {
        Self::with_config(PullConfig::default())
    }

    pub fn with_config(config: PullConfig) -> Self {
        let mut controller = PullToRefreshController::new(config, IndicatorStyle::default());
        let host = RecordingHost::new();
        let listener = RecordingListener::new();
        controller.attach_host(host.clone());
        controller.set_refresh_listener(listener.clone());
        Self {
            controller,
            host,
            listener,
            clock: ManualFrameClock::new(),
        }
    }

    /// Move the host to (or away from) its top and notify the controller,
    /// the way a list widget reports scroll changes.
    pub fn scrolled_to_top(&mut self, at_top: bool) {
        self.host.set_first_item_fully_visible(at_top);
        self.controller.host_scrolled();
    }

    pub fn touch_down(&mut self, y: f32) -> bool {
        self.deliver(PointerEvent::at_y(PointerEventKind::Down, y))
    }

    pub fn touch_move(&mut self, y: f32) -> bool {
        self.deliver(PointerEvent::at_y(PointerEventKind::Move, y))
    }

    pub fn touch_up(&mut self) -> bool {
        self.deliver(PointerEvent::at_y(PointerEventKind::Up, 0.0))
    }

    pub fn touch_cancel(&mut self) -> bool {
        self.deliver(PointerEvent::at_y(PointerEventKind::Cancel, 0.0))
    }

    /// Press at `from_y` and move to `to_y` in `steps` increments, leaving
    /// the finger down.
    pub fn press_and_move(&mut self, from_y: f32, to_y: f32, steps: u32) {
        self.touch_down(from_y);
        self.touch_move(from_y);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.touch_move(from_y + (to_y - from_y) * t);
        }
    }

    /// Full drag: press, move in steps, release.
    pub fn drag(&mut self, from_y: f32, to_y: f32) {
        self.press_and_move(from_y, to_y, 10);
        self.touch_up();
    }

    /// Advance the clock by whole frames, ticking the controller each time.
    pub fn advance_frames(&mut self, frames: u32) {
        for _ in 0..frames {
            self.clock.advance_nanos(FRAME_NANOS);
            self.controller.on_frame(self.clock.now_nanos());
        }
    }

    /// Pump frames until no settle animation is in flight (bounded, so a
    /// stuck animation fails the test instead of hanging it).
    pub fn settle(&mut self) {
        for _ in 0..120 {
            if !self.controller.needs_frame() {
                return;
            }
            self.advance_frames(1);
        }
        assert!(
            !self.controller.needs_frame(),
            "settle animation did not finish within 120 frames"
        );
    }

    /// Draw the indicator at the current clock time.
    pub fn indicator_frame(&mut self) -> IndicatorFrame {
        let now = self.clock.now_nanos();
        self.controller.indicator_mut().frame(now)
    }

    pub fn now_nanos(&self) -> u64 {
        self.clock.now_nanos()
    }

    /// Advance the shared clock without ticking the controller, for
    /// indicator-only timing tests.
    pub fn advance_clock_millis(&mut self, millis: u64) {
        self.clock.advance_millis(millis);
    }

    fn deliver(&mut self, event: PointerEvent) -> bool {
        // A real host stops calling the handler once it is uninstalled.
        if !self.host.touch_handler_installed() {
            return false;
        }
        self.controller.on_touch_event(&event)
    }
}

impl Default for PullRobot {
    fn default() -> Self {
        Self::new()
    }
}
