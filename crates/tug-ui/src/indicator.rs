//! Circular pull-to-refresh progress indicator.
//!
//! The indicator is a pure presentation state machine with two phases:
//! *Filling*, where the arc sweep grows proportionally with pull progress,
//! and *Looping*, an indeterminate spin entered once progress reaches 1.0,
//! with a one-shot pop-in scale at the hand-off.
//!
//! Rendering is data-only: each call to [`PullIndicator::frame`] advances the
//! time-driven state and returns an [`IndicatorFrame`] of stroked arcs for
//! whatever backend the embedder uses. The indicator never reads a clock;
//! frame timestamps come in from the outside, and [`needs_redraw`]
//! tells the embedder whether to schedule another frame (the looping spin is
//! self-scheduling: every frame requests the next).
//!
//! [`needs_redraw`]: PullIndicator::needs_redraw

use smallvec::SmallVec;
use tug_animation::Easing;
use tug_ui_graphics::{Brush, Color, Dp, Rect, Size, Stroke};

/// Resting angle for the filling arc, pointing straight up.
pub const FILLING_REST_ANGLE_DEG: f32 = 270.0;

/// Full-revolution period of the indeterminate spin.
pub const LOOP_PERIOD_MS: u64 = 800;

/// Duration of the pop-in scale animation at the Filling → Looping hand-off.
pub const POP_DURATION_MS: u64 = 200;

/// Peak scale reached halfway through the pop-in.
pub const POP_MAX_SCALE: f32 = 1.2;

/// The indicator's presentation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorPhase {
    /// Arc sweep tracks pull progress.
    Filling,
    /// Indeterminate spin; entered when progress reaches 1.0.
    Looping,
}

/// Visual configuration for the indicator, passed at construction.
///
/// Defaults reproduce the reference design: a 33dp ring with a 1.25dp round
/// stroke, light base circle, darker filling arc, and a sweep gradient from
/// the fill color back to the base color for the looping arc.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorStyle {
    pub size: Dp,
    pub padding: Dp,
    pub stroke_width: Dp,
    /// Offset from the container's top edge at which the host places the
    /// indicator. Carried here so embedders lay it out consistently; the
    /// indicator itself only draws within its own bounds.
    pub top_margin: Dp,
    pub base_color: Color,
    pub fill_color: Color,
    /// Gradient stops for the looping arc, swept clockwise around the center.
    pub looping_colors: Vec<Color>,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        let base_color = Color::from_argb_u32(0xFFEFEFEF);
        let fill_color = Color::from_argb_u32(0xFFC7C7C7);
        Self {
            size: Dp(33.0),
            padding: Dp(1.0),
            stroke_width: Dp(1.25),
            top_margin: Dp(19.0),
            base_color,
            fill_color,
            looping_colors: vec![fill_color, base_color],
        }
    }
}

/// One stroked arc in an indicator frame.
///
/// `rotation_deg` is applied around the bounds center before the arc is
/// drawn; angles are in degrees, clockwise, with 0° at the 3 o'clock mark.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcCommand {
    pub bounds: Rect,
    pub start_angle_deg: f32,
    pub sweep_angle_deg: f32,
    pub rotation_deg: f32,
    pub brush: Brush,
    pub stroke: Stroke,
}

/// Draw model for one indicator frame. `scale` applies uniformly around the
/// indicator center (the pop-in animation).
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorFrame {
    pub scale: f32,
    pub commands: SmallVec<[ArcCommand; 3]>,
}

pub struct PullIndicator {
    style: IndicatorStyle,
    bounds: Rect,
    stroke: Stroke,
    base_brush: Brush,
    fill_brush: Brush,
    looping_brush: Brush,
    phase: IndicatorPhase,
    progress: f32,
    visible: bool,
    filling_sweep_deg: f32,
    looping_angle_deg: f32,
    looping_start_nanos: Option<u64>,
    scale: f32,
    pop_armed: bool,
    pop_start_nanos: Option<u64>,
    invalidated: bool,
}

impl PullIndicator {
    pub fn new(style: IndicatorStyle, density: f32) -> Self {
        let size_px = style.size.to_px(density);
        let bounds = Rect::from_size(Size::square(size_px)).inset(style.padding.to_px(density));
        let center = Rect::from_size(Size::square(size_px)).center();
        Self {
            bounds,
            stroke: Stroke::round(style.stroke_width.to_px(density)),
            base_brush: Brush::solid(style.base_color),
            fill_brush: Brush::solid(style.fill_color),
            looping_brush: Brush::sweep_gradient(style.looping_colors.clone(), center),
            style,
            phase: IndicatorPhase::Filling,
            progress: 0.0,
            visible: false,
            filling_sweep_deg: FILLING_REST_ANGLE_DEG,
            looping_angle_deg: FILLING_REST_ANGLE_DEG,
            looping_start_nanos: None,
            scale: 1.0,
            pop_armed: false,
            pop_start_nanos: None,
            invalidated: false,
        }
    }

    /// Feed pull progress. Values below 1.0 size the filling arc; reaching
    /// 1.0 while Filling hands off to the Looping phase, arming the pop-in
    /// scale and the spin clock (which starts on the next frame).
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
        if self.progress < 1.0 {
            self.filling_sweep_deg = 360.0 * self.progress;
        } else if self.phase == IndicatorPhase::Filling {
            self.pop_armed = true;
            self.phase = IndicatorPhase::Looping;
            self.looping_start_nanos = None;
        }
        self.invalidated = true;
    }

    /// Force back to the Filling phase with the arc at its resting angle.
    pub fn reset_state(&mut self) {
        self.phase = IndicatorPhase::Filling;
        self.progress = 0.0;
        self.filling_sweep_deg = FILLING_REST_ANGLE_DEG;
        self.looping_angle_deg = FILLING_REST_ANGLE_DEG;
        self.looping_start_nanos = None;
        self.invalidated = true;
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.invalidated = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The style this indicator was built with; embedders read layout
    /// details (size, top margin) from here.
    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    pub fn phase(&self) -> IndicatorPhase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn filling_sweep_deg(&self) -> f32 {
        self.filling_sweep_deg
    }

    pub fn looping_angle_deg(&self) -> f32 {
        self.looping_angle_deg
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether the embedder should schedule another frame: true while the
    /// indeterminate spin runs or a state change awaits drawing.
    pub fn needs_redraw(&self) -> bool {
        self.visible && (self.phase == IndicatorPhase::Looping || self.invalidated)
    }

    /// The render step. Advances the spin angle and pop-in scale to
    /// `frame_time_nanos` (Looping phase only) and returns the frame's draw
    /// model. Hidden indicators produce an empty frame.
    pub fn frame(&mut self, frame_time_nanos: u64) -> IndicatorFrame {
        self.invalidated = false;
        if !self.visible {
            return IndicatorFrame {
                scale: 1.0,
                commands: SmallVec::new(),
            };
        }
        if self.phase == IndicatorPhase::Looping {
            self.advance_looping(frame_time_nanos);
        }

        let mut commands: SmallVec<[ArcCommand; 3]> = SmallVec::new();
        commands.push(ArcCommand {
            bounds: self.bounds,
            start_angle_deg: 0.0,
            sweep_angle_deg: 360.0,
            rotation_deg: 0.0,
            brush: self.base_brush.clone(),
            stroke: self.stroke,
        });
        match self.phase {
            IndicatorPhase::Filling => commands.push(ArcCommand {
                bounds: self.bounds,
                start_angle_deg: FILLING_REST_ANGLE_DEG,
                sweep_angle_deg: self.filling_sweep_deg,
                rotation_deg: 0.0,
                brush: self.fill_brush.clone(),
                stroke: self.stroke,
            }),
            // The looping arc is a full circle whose sweep gradient rotates
            // with the spin angle; counter-rotating the start angle keeps the
            // gradient seam aligned with the arc start.
            IndicatorPhase::Looping => commands.push(ArcCommand {
                bounds: self.bounds,
                start_angle_deg: -self.looping_angle_deg,
                sweep_angle_deg: 360.0,
                rotation_deg: self.looping_angle_deg,
                brush: self.looping_brush.clone(),
                stroke: self.stroke,
            }),
        }

        IndicatorFrame {
            scale: self.scale,
            commands,
        }
    }

    fn advance_looping(&mut self, frame_time_nanos: u64) {
        let loop_start = *self.looping_start_nanos.get_or_insert(frame_time_nanos);
        let elapsed_ms = frame_time_nanos.saturating_sub(loop_start) as f32 / 1_000_000.0;
        self.looping_angle_deg = (360.0 * (elapsed_ms / LOOP_PERIOD_MS as f32)) % 360.0;

        if self.pop_armed {
            let pop_start = *self.pop_start_nanos.get_or_insert(frame_time_nanos);
            let pop_elapsed_ms = frame_time_nanos.saturating_sub(pop_start) as f32 / 1_000_000.0;
            let fraction = pop_elapsed_ms / POP_DURATION_MS as f32;
            if fraction >= 1.0 {
                self.pop_start_nanos = None;
                self.scale = 1.0;
                self.pop_armed = false;
            } else {
                self.scale = 1.0 + (POP_MAX_SCALE - 1.0) * Easing::Triangle.transform(fraction);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/indicator_tests.rs"]
mod tests;
