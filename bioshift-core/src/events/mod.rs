//! Event system for the combination engine.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when unused.

pub mod handler;
pub mod types;

pub use handler::{NoOpHandler, ShiftEventHandler};
