//! Error Types
//!
//! This module defines the error types used by the tween library.
//!
//! # Overview
//!
//! Runtime conditions of a running task (a despawned target, a blocked sweep,
//! a zero duration) are *not* errors: they are reported through the task's
//! own outcome. [`TweenError`] only covers API misuse and configuration:
//! - Non-finite numeric input passed to an entry point
//! - Unknown or retired task handles
//! - Settings loading and validation failures
//!
//! # Usage
//!
//! ```rust,ignore
//! use myth_tween::errors::{TweenError, Result};
//!
//! fn start() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the tween library.
#[derive(Error, Debug)]
pub enum TweenError {
    // ========================================================================
    // Entry Point Errors
    // ========================================================================
    /// A time, rate or target component was NaN or infinite.
    #[error("Non-finite input for `{field}`: {value}")]
    NonFiniteInput {
        /// Name of the offending argument
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    // ========================================================================
    // Scheduler Errors
    // ========================================================================
    /// The handle does not refer to a task owned by the scheduler.
    ///
    /// Completed tasks are retired immediately, so their handles end up here too.
    #[error("Task not found (unknown or already completed)")]
    TaskNotFound,

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Settings failed validation.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// File I/O error while loading settings.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error while loading settings.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, TweenError>`.
pub type Result<T> = std::result::Result<T, TweenError>;
