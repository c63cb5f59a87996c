//! Manually advanced frame clock for deterministic animation tests.

use std::cell::Cell;

use tug_animation::FrameClock;

/// A [`FrameClock`] whose time only moves when a test advances it.
#[derive(Default)]
pub struct ManualFrameClock {
    now_nanos: Cell<u64>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_nanos(&self, nanos: u64) {
        self.now_nanos.set(self.now_nanos.get() + nanos);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance_nanos(millis * 1_000_000);
    }
}

impl FrameClock for ManualFrameClock {
    fn now_nanos(&self) -> u64 {
        self.now_nanos.get()
    }
}
