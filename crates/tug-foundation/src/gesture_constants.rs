//! Shared gesture constants for the pull-to-refresh interaction.
//!
//! Distances are density-independent ([`Dp`]) unless noted; the controller
//! converts them once at construction with the host's density factor.

use tug_ui_graphics::Dp;

/// Pull distance at which a refresh triggers.
pub const PULL_THRESHOLD: Dp = Dp(80.0);

/// Hard clamp on pull distance, as a multiple of the threshold.
pub const MAX_PULL_FACTOR: f32 = 3.0;

/// Move hysteresis in device pixels.
///
/// A tracked move must exceed this distance from the gesture origin before
/// the state machine acts on it. Filters out finger jitter without making
/// intentional pulls feel laggy; deliberately much smaller than a tap slop
/// because the host has already resolved that this gesture is a drag.
pub const MOVE_HYSTERESIS: f32 = 1.0;

/// Duration of the settle/park animation that returns host content to its
/// rest or parked offset after a pull ends.
pub const SETTLE_DURATION_MS: u64 = 200;
