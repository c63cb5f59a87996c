//! Recording fakes for the controller's capability contracts.
//!
//! Each fake uses `Cell`/`RefCell` interior state so it can be shared via
//! `Rc` between the controller and the test, mirroring how a real host
//! widget would hold its own mutable state on the UI thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tug_foundation::{
    PointerEvent, PointerEventKind, PullableHost, RefreshListener, TouchObserver,
};

/// Fake scrollable host recording everything the controller does to it.
pub struct RecordingHost {
    translation_y: Cell<f32>,
    layout_suppressed: Cell<bool>,
    computing_layout: Cell<bool>,
    first_item_visible: Cell<bool>,
    touch_handler_installed: Cell<bool>,
    translation_history: RefCell<Vec<f32>>,
}

impl RecordingHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            translation_y: Cell::new(0.0),
            layout_suppressed: Cell::new(false),
            computing_layout: Cell::new(false),
            first_item_visible: Cell::new(false),
            touch_handler_installed: Cell::new(false),
            translation_history: RefCell::new(Vec::new()),
        })
    }

    /// Scroll-position control: whether the host reports being at its top.
    pub fn set_first_item_fully_visible(&self, visible: bool) {
        self.first_item_visible.set(visible);
    }

    pub fn set_computing_layout(&self, computing: bool) {
        self.computing_layout.set(computing);
    }

    pub fn layout_suppressed(&self) -> bool {
        self.layout_suppressed.get()
    }

    pub fn touch_handler_installed(&self) -> bool {
        self.touch_handler_installed.get()
    }

    pub fn current_translation_y(&self) -> f32 {
        self.translation_y.get()
    }

    /// Every translation the controller applied, in order.
    pub fn translation_history(&self) -> Vec<f32> {
        self.translation_history.borrow().clone()
    }
}

impl PullableHost for RecordingHost {
    fn first_item_fully_visible(&self) -> bool {
        self.first_item_visible.get()
    }

    fn translation_y(&self) -> f32 {
        self.translation_y.get()
    }

    fn set_translation_y(&self, y: f32) {
        self.translation_y.set(y);
        self.translation_history.borrow_mut().push(y);
    }

    fn is_computing_layout(&self) -> bool {
        self.computing_layout.get()
    }

    fn set_layout_suppressed(&self, suppressed: bool) {
        self.layout_suppressed.set(suppressed);
    }

    fn set_touch_handler_installed(&self, installed: bool) {
        self.touch_handler_installed.set(installed);
    }
}

/// Fake refresh listener counting callbacks and recording the
/// animating-status sequence.
#[derive(Default)]
pub struct RecordingListener {
    refresh_count: Cell<usize>,
    animating_events: RefCell<Vec<bool>>,
}

impl RecordingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_count.get()
    }

    pub fn animating_events(&self) -> Vec<bool> {
        self.animating_events.borrow().clone()
    }
}

impl RefreshListener for RecordingListener {
    fn on_refresh(&self) {
        self.refresh_count.set(self.refresh_count.get() + 1);
    }

    fn on_animating_status_changed(&self, is_animating: bool) {
        self.animating_events.borrow_mut().push(is_animating);
    }
}

/// Fake touch observer recording the kinds of every event it saw.
#[derive(Default)]
pub struct RecordingTouchObserver {
    events: RefCell<Vec<PointerEventKind>>,
}

impl RecordingTouchObserver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn seen_kinds(&self) -> Vec<PointerEventKind> {
        self.events.borrow().clone()
    }
}

impl TouchObserver for RecordingTouchObserver {
    fn on_touch(&self, event: &PointerEvent) {
        self.events.borrow_mut().push(event.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_host_tracks_translations_in_order() {
        let host = RecordingHost::new();
        host.set_translation_y(10.0);
        host.set_translation_y(0.0);
        assert_eq!(host.translation_history(), vec![10.0, 0.0]);
        assert_eq!(host.current_translation_y(), 0.0);
    }
}
