//! Idle detection: a single cancellable scheduled action per session.
//!
//! The monitor arms a warning after `warn_after` of inactivity; once the
//! warning has been issued the owner arms termination after
//! `terminate_after`. Every armed action carries a [`Ticket`], and the owner
//! must [`claim`](InactivityMonitor::claim) it before acting so that a timer
//! which woke just before being cancelled does nothing.

mod monitor;
mod task;

pub use monitor::{InactivityMonitor, Ticket, TimerKind};
pub use task::ScheduledTask;
