//! Pull-to-refresh components for Tug
//!
//! Two collaborating pieces: [`PullIndicator`], the circular progress
//! affordance with its filling/looping animation, and
//! [`PullToRefreshController`], the gesture state machine that binds a
//! scrollable host to the indicator and fires the refresh callback.

mod indicator;
mod pull_refresh;

pub use indicator::*;
pub use pull_refresh::*;
