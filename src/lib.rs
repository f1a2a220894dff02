#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Easing curves and timed transform tasks.
//!
//! A task moves, rotates or scales one actor from wherever it is to a target
//! value over a duration, shaped by an [`EasingKind`]. Tasks are ticked by a
//! [`TaskScheduler`] and report exactly one [`TaskOutcome`].
//!
//! ```rust,ignore
//! use glam::Vec3;
//! use myth_tween::{Actor, EasingKind, Stage, TaskScheduler};
//!
//! let mut stage = Stage::new();
//! let crate_box = stage.spawn(Actor::new("crate"));
//!
//! let mut scheduler = TaskScheduler::default();
//! let request = scheduler
//!     .move_request(crate_box, Vec3::new(10.0, 0.0, 0.0))
//!     .time(2.0)
//!     .easing(EasingKind::EaseInOut);
//! scheduler.start_move(&mut stage, request)?;
//!
//! // once per frame
//! for event in scheduler.update(dt, &mut stage) {
//!     println!("{:?} finished: {:?}", event.path, event.outcome);
//! }
//! ```

pub mod animation;
pub mod config;
pub mod errors;
pub mod host;
pub mod scene;
pub mod utils;

pub use animation::{
    EasingKind, InterpolationTask, MoveRequest, RotateRequest, ScaleRequest, TaskEvent, TaskHandle,
    TaskOutcome, TaskScheduler, TaskState, TimingMode, apply_easing, ease, ease_orientation,
    ease_scalar, ease_vector,
};
pub use config::TweenSettings;
pub use errors::{Result, TweenError};
pub use host::{ApplyResult, TransformHost};
pub use scene::{Actor, ActorKey, Rotator, Stage, Transform};
