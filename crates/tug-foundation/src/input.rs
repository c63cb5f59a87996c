//! Pointer input vocabulary.
//!
//! The pull gesture consumes a single-pointer event stream; there is no
//! multi-touch or button state here. Hosts deliver events in screen
//! coordinates. The controller only ever looks at the vertical component,
//! but the full position is carried so observers can see the raw stream.

use tug_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Convenience for the vertical-drag core: an event at screen y.
    pub fn at_y(kind: PointerEventKind, y: f32) -> Self {
        Self::new(kind, Point::new(0.0, y))
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}
