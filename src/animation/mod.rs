pub mod values;
pub mod easing;
pub mod duration;
pub mod binding;
pub mod channel;
pub mod task;
pub mod factory;
pub mod scheduler;

pub use values::Interpolatable;
pub use easing::{EasingKind, apply_easing, ease, ease_orientation, ease_scalar, ease_value, ease_vector};
pub use duration::{DurationPolicy, Metric, TimingMode, resolve_duration, MIN_DURATION};
pub use binding::{PropertyBinding, TargetPath};
pub use channel::{Channel, Rotation, Scale, Translation};
pub use task::{InterpolationTask, TaskCallbacks, TaskOutcome, TaskState};
pub use factory::{MoveRequest, RotateRequest, ScaleRequest};
pub use scheduler::{TaskEvent, TaskHandle, TaskScheduler, TransformTask};
