//! Pure math/data for drawing & units in Tug
//!
//! This crate contains the geometry primitives, color definitions, brushes,
//! and unit types shared by the pull-to-refresh components. It holds no
//! behavior beyond plain data and conversions, so rendering backends and the
//! gesture core can both depend on it without pulling in each other.

mod brush;
mod color;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::{Brush, Stroke, StrokeCap};
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::{Dp, Px};
}
