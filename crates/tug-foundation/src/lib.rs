//! Foundation contracts for Tug
//!
//! The pull-to-refresh controller is composed against capabilities rather
//! than a concrete widget base class: this crate defines the pointer event
//! vocabulary, the shared gesture constants, and the traits a scrollable host
//! and a refresh consumer implement.

mod gesture_constants;
mod host;
mod input;

pub use gesture_constants::*;
pub use host::*;
pub use input::*;
