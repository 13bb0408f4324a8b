//! Conversation session state.
//!
//! A `Session` holds the visitor's identity, the append-only message log,
//! and the lifecycle phase. It performs no I/O and schedules nothing; the
//! widget drives timers and transport around it.

mod lifecycle;
mod model;

#[cfg(test)]
mod tests;

pub use model::{Phase, Session};
