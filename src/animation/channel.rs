//! Channels: the per-property strategy of an [`InterpolationTask`].
//!
//! The task owns timing, easing and the state machine. A channel knows how to
//! read the property from the host, how to write it back, and how values of
//! that property blend.
//!
//! [`InterpolationTask`]: crate::animation::InterpolationTask

use std::fmt::Debug;

use glam::{Quat, Vec3};

use crate::animation::binding::TargetPath;
use crate::animation::values::Interpolatable;
use crate::host::{ApplyResult, TransformHost};
use crate::scene::ActorKey;

pub trait Channel {
    type Value: Interpolatable + Debug;

    const PATH: TargetPath;

    /// Reads the current value from the host; `None` when the actor is gone.
    fn sample<H: TransformHost + ?Sized>(&self, host: &H, actor: ActorKey) -> Option<Self::Value>;

    fn apply<H: TransformHost + ?Sized>(
        &self,
        host: &mut H,
        actor: ActorKey,
        value: Self::Value,
    ) -> ApplyResult;

    /// Adjusts the endpoints once, when the task activates.
    fn prepare(&self, start: Self::Value, end: Self::Value) -> (Self::Value, Self::Value) {
        (start, end)
    }

    fn interpolate(&self, start: Self::Value, end: Self::Value, alpha: f32) -> Self::Value {
        Self::Value::interpolate_linear(start, end, alpha)
    }
}

// ============================================================================
// Translation
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translation {
    /// Test the move against blocking geometry; a blocked move fails the task.
    pub sweep: bool,
}

impl Channel for Translation {
    type Value = Vec3;

    const PATH: TargetPath = TargetPath::Translation;

    fn sample<H: TransformHost + ?Sized>(&self, host: &H, actor: ActorKey) -> Option<Vec3> {
        host.location(actor)
    }

    fn apply<H: TransformHost + ?Sized>(
        &self,
        host: &mut H,
        actor: ActorKey,
        value: Vec3,
    ) -> ApplyResult {
        host.set_location(actor, value, self.sweep)
    }
}

// ============================================================================
// Rotation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    /// Travel the shorter of the two arcs between the endpoints.
    pub shortest_path: bool,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            shortest_path: true,
        }
    }
}

impl Channel for Rotation {
    type Value = Quat;

    const PATH: TargetPath = TargetPath::Rotation;

    fn sample<H: TransformHost + ?Sized>(&self, host: &H, actor: ActorKey) -> Option<Quat> {
        host.rotation(actor).map(Quat::normalize)
    }

    fn apply<H: TransformHost + ?Sized>(
        &self,
        host: &mut H,
        actor: ActorKey,
        value: Quat,
    ) -> ApplyResult {
        host.set_rotation(actor, value)
    }

    /// `q` and `-q` are the same orientation; picking the one in the
    /// hemisphere of `start` makes the slerp take the short arc.
    fn prepare(&self, start: Quat, end: Quat) -> (Quat, Quat) {
        if self.shortest_path && start.dot(end) < 0.0 {
            (start, -end)
        } else {
            (start, end)
        }
    }
}

// ============================================================================
// Scale
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scale;

impl Channel for Scale {
    type Value = Vec3;

    const PATH: TargetPath = TargetPath::Scale;

    fn sample<H: TransformHost + ?Sized>(&self, host: &H, actor: ActorKey) -> Option<Vec3> {
        host.scale(actor)
    }

    fn apply<H: TransformHost + ?Sized>(
        &self,
        host: &mut H,
        actor: ActorKey,
        value: Vec3,
    ) -> ApplyResult {
        host.set_scale(actor, value)
    }
}
