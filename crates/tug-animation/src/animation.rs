//! Time-based animation primitives.
//!
//! Everything here is driven by explicit frame timestamps: a [`Tween`] is
//! advanced by calling [`Tween::tick`] with the current frame time in
//! nanoseconds and latches its start time on the first tick. No wall clock is
//! read inside this module, so animations are fully deterministic under test.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Symmetric triangular easing: ramps linearly from 0 to 1 over the first
    /// half of the animation and back down to 0 over the second half. Drives
    /// the indicator's pop-in scale (peak at the midpoint, rest at both ends).
    Triangle,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::Triangle => {
                if fraction <= 0.5 {
                    fraction * 2.0
                } else {
                    (1.0 - fraction) * 2.0
                }
            }
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

/// A single in-flight value animation from `start` to `end`.
///
/// The tween owns no clock. Callers feed it frame timestamps; the first tick
/// establishes the animation's time origin. Once the elapsed time covers the
/// spec duration the tween reports [`Tween::is_finished`] and keeps returning
/// the end value.
#[derive(Debug, Clone)]
pub struct Tween {
    start: f32,
    end: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl Tween {
    pub fn new(start: f32, end: f32, spec: AnimationSpec) -> Self {
        Self {
            start,
            end,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    /// Advance to `frame_time_nanos` and return the interpolated value.
    pub fn tick(&mut self, frame_time_nanos: u64) -> f32 {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        // Zero-duration specs complete on their first tick.
        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        if linear_progress >= 1.0 {
            self.finished = true;
            return self.end;
        }
        let fraction = self.spec.easing.transform(linear_progress);
        self.start.lerp(&self.end, fraction)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn end_value(&self) -> f32 {
        self.end
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
