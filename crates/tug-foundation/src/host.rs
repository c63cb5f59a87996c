//! Capability contracts between the controller and its collaborators.
//!
//! The controller never subclasses or owns the scrollable list widget. It
//! binds to anything implementing [`PullableHost`], which is the minimal set
//! of capabilities the gesture needs: query the scroll position, move the
//! content vertically, gate raw touch delivery, and suspend layout while an
//! animation owns the translation.

use crate::input::PointerEvent;

/// A scrollable host surface the pull gesture can attach to.
///
/// All methods take `&self`; hosts are expected to use interior mutability
/// (the whole system is single-threaded and event-driven).
pub trait PullableHost {
    /// True when the host is scrolled to its very top, i.e. the first item's
    /// top edge is fully on-screen. Pulling is only allowed in this state.
    fn first_item_fully_visible(&self) -> bool;

    /// Current vertical visual offset applied to the host content.
    fn translation_y(&self) -> f32;

    /// Apply a vertical visual offset to the host content.
    fn set_translation_y(&self, y: f32);

    /// True while the host is in the middle of its own layout pass.
    /// Animating the translation during layout is unsafe; the controller
    /// settles immediately instead.
    fn is_computing_layout(&self) -> bool;

    /// Suppress or restore the host's internal layout recalculation while an
    /// animation owns the translation.
    fn set_layout_suppressed(&self, suppressed: bool);

    /// Install or remove the controller as the host's raw touch handler.
    /// While removed, the host must not deliver pointer events to the
    /// controller.
    fn set_touch_handler_installed(&self, installed: bool);
}

/// Consumer-facing refresh callbacks.
pub trait RefreshListener {
    /// Fired once per pull cycle when the pull distance crosses the
    /// threshold (or when a refresh is requested programmatically).
    fn on_refresh(&self);

    /// Fired when the settle/park animation starts (`true`) and ends
    /// (`false`), so a caller can suppress host-scroll side effects while the
    /// controller owns the content offset.
    fn on_animating_status_changed(&self, is_animating: bool);
}

/// Optional observer that sees every raw pointer event delivered to the
/// controller, before the gesture state machine runs and regardless of
/// whether the event is consumed.
pub trait TouchObserver {
    fn on_touch(&self, event: &PointerEvent);
}
