//! Brush and stroke definitions for painting arcs

use crate::color::Color;
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Angular gradient sweeping clockwise around `center`, interpolating
    /// through `colors`. Used for the indeterminate looping arc so its tail
    /// fades toward the base color.
    SweepGradient { colors: Vec<Color>, center: Point },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn sweep_gradient(colors: Vec<Color>, center: Point) -> Self {
        Brush::SweepGradient { colors, center }
    }
}

/// How stroke ends are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
}

/// Stroke parameters for arc outlines, width in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: StrokeCap,
}

impl Stroke {
    pub fn round(width: f32) -> Self {
        Self {
            width,
            cap: StrokeCap::Round,
        }
    }
}
