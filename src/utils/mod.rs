//! Utility Module
//!
//! - [`time`]: Fixed-step tick clock used by the task scheduler

pub mod time;

pub use time::{TickClock, TickSteps};
