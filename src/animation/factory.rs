//! Entry points.
//!
//! A request collects the arguments of one move/rotate/scale call. Building it
//! validates the numbers, resolves the effective duration through a
//! [`DurationPolicy`] and produces a task in the `Created` state.
//!
//! ```rust,ignore
//! let task = MoveRequest::new(actor, Vec3::new(10.0, 0.0, 0.0))
//!     .time(2.0)
//!     .easing(EasingKind::EaseInOut)
//!     .on_success(|| log::info!("arrived"))
//!     .build(&stage, &DurationPolicy::default())?;
//! ```

use glam::Vec3;

use crate::animation::channel::{Rotation, Scale, Translation};
use crate::animation::duration::{DurationPolicy, TimingMode};
use crate::animation::easing::EasingKind;
use crate::animation::task::{InterpolationTask, TaskCallbacks};
use crate::config::TaskDefaults;
use crate::errors::{Result, TweenError};
use crate::host::TransformHost;
use crate::scene::{ActorKey, Rotator};

fn ensure_finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TweenError::NonFiniteInput { field, value })
    }
}

fn ensure_finite_vec3(field: &'static str, value: Vec3) -> Result<()> {
    match value.to_array().into_iter().find(|c| !c.is_finite()) {
        Some(bad) => Err(TweenError::NonFiniteInput { field, value: bad }),
        None => Ok(()),
    }
}

macro_rules! callback_setters {
    () => {
        #[must_use]
        pub fn on_started(mut self, f: impl FnOnce() + Send + 'static) -> Self {
            self.callbacks.on_started(f);
            self
        }

        #[must_use]
        pub fn on_success(mut self, f: impl FnOnce() + Send + 'static) -> Self {
            self.callbacks.on_success(f);
            self
        }

        #[must_use]
        pub fn on_failed(mut self, f: impl FnOnce() + Send + 'static) -> Self {
            self.callbacks.on_failed(f);
            self
        }
    };
}

// ============================================================================
// Move
// ============================================================================

#[derive(Debug)]
pub struct MoveRequest {
    pub target: ActorKey,
    pub location: Vec3,
    /// Seconds, or units per second in [`TimingMode::Rate`].
    pub time: f32,
    pub timing_mode: TimingMode,
    pub easing: EasingKind,
    pub sweep: bool,
    callbacks: TaskCallbacks,
}

impl MoveRequest {
    #[must_use]
    pub fn new(target: ActorKey, location: Vec3) -> Self {
        Self::with_defaults(target, location, &TaskDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(target: ActorKey, location: Vec3, defaults: &TaskDefaults) -> Self {
        Self {
            target,
            location,
            time: defaults.time,
            timing_mode: defaults.timing_mode,
            easing: defaults.easing,
            sweep: false,
            callbacks: TaskCallbacks::default(),
        }
    }

    #[must_use]
    pub fn time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn timing_mode(mut self, mode: TimingMode) -> Self {
        self.timing_mode = mode;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: EasingKind) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn sweep(mut self, sweep: bool) -> Self {
        self.sweep = sweep;
        self
    }

    callback_setters!();

    pub fn build<H: TransformHost + ?Sized>(
        self,
        host: &H,
        policy: &DurationPolicy,
    ) -> Result<InterpolationTask<Translation>> {
        ensure_finite("time", self.time)?;
        ensure_finite_vec3("location", self.location)?;

        let duration = match host.location(self.target) {
            Some(start) if self.time > policy.tolerance => {
                policy.resolve(self.timing_mode, self.time, start, self.location)
            }
            _ => policy.floor(),
        };

        let channel = Translation { sweep: self.sweep };
        Ok(
            InterpolationTask::new(self.target, channel, self.location, duration, self.easing)
                .with_callbacks(self.callbacks),
        )
    }
}

// ============================================================================
// Rotate
// ============================================================================

#[derive(Debug)]
pub struct RotateRequest {
    pub target: ActorKey,
    pub rotation: Rotator,
    /// Seconds, or degrees per second in [`TimingMode::Rate`].
    pub time: f32,
    pub timing_mode: TimingMode,
    pub easing: EasingKind,
    pub shortest_path: bool,
    callbacks: TaskCallbacks,
}

impl RotateRequest {
    #[must_use]
    pub fn new(target: ActorKey, rotation: Rotator) -> Self {
        Self::with_defaults(target, rotation, &TaskDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(target: ActorKey, rotation: Rotator, defaults: &TaskDefaults) -> Self {
        Self {
            target,
            rotation,
            time: defaults.time,
            timing_mode: defaults.timing_mode,
            easing: defaults.easing,
            shortest_path: true,
            callbacks: TaskCallbacks::default(),
        }
    }

    #[must_use]
    pub fn time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn timing_mode(mut self, mode: TimingMode) -> Self {
        self.timing_mode = mode;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: EasingKind) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn shortest_path(mut self, shortest_path: bool) -> Self {
        self.shortest_path = shortest_path;
        self
    }

    callback_setters!();

    pub fn build<H: TransformHost + ?Sized>(
        self,
        host: &H,
        policy: &DurationPolicy,
    ) -> Result<InterpolationTask<Rotation>> {
        ensure_finite("time", self.time)?;
        ensure_finite("rotation.pitch", self.rotation.pitch)?;
        ensure_finite("rotation.yaw", self.rotation.yaw)?;
        ensure_finite("rotation.roll", self.rotation.roll)?;

        let end = self.rotation.to_quat();
        let duration = match host.rotation(self.target) {
            Some(start) if self.time > policy.tolerance => {
                policy.resolve(self.timing_mode, self.time, start.normalize(), end)
            }
            _ => policy.floor(),
        };

        let channel = Rotation {
            shortest_path: self.shortest_path,
        };
        Ok(
            InterpolationTask::new(self.target, channel, end, duration, self.easing)
                .with_callbacks(self.callbacks),
        )
    }
}

// ============================================================================
// Scale
// ============================================================================

#[derive(Debug)]
pub struct ScaleRequest {
    pub target: ActorKey,
    pub scale: Vec3,
    /// Seconds. Scaling has no rate mode.
    pub duration: f32,
    pub easing: EasingKind,
    callbacks: TaskCallbacks,
}

impl ScaleRequest {
    #[must_use]
    pub fn new(target: ActorKey, scale: Vec3) -> Self {
        Self::with_defaults(target, scale, &TaskDefaults::default())
    }

    #[must_use]
    pub fn with_defaults(target: ActorKey, scale: Vec3, defaults: &TaskDefaults) -> Self {
        Self {
            target,
            scale,
            duration: defaults.time,
            easing: defaults.easing,
            callbacks: TaskCallbacks::default(),
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn easing(mut self, easing: EasingKind) -> Self {
        self.easing = easing;
        self
    }

    callback_setters!();

    pub fn build<H: TransformHost + ?Sized>(
        self,
        host: &H,
        policy: &DurationPolicy,
    ) -> Result<InterpolationTask<Scale>> {
        ensure_finite("duration", self.duration)?;
        ensure_finite_vec3("scale", self.scale)?;

        let duration = if host.contains(self.target) && self.duration > policy.tolerance {
            policy.resolve(TimingMode::Duration, self.duration, self.scale, self.scale)
        } else {
            policy.floor()
        };

        Ok(
            InterpolationTask::new(self.target, Scale, self.scale, duration, self.easing)
                .with_callbacks(self.callbacks),
        )
    }
}
