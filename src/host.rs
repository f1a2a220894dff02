//! Host Contract
//!
//! Tasks never own the actor they animate. Everything they know about it goes
//! through [`TransformHost`], which resolves an [`ActorKey`] on every call.
//! A key whose actor was despawned simply stops resolving; tasks treat that
//! as a failed outcome, not as an error.
//!
//! [`Stage`](crate::scene::Stage) is the in-crate implementation. Engines with
//! their own world type implement the trait directly.

use glam::{Quat, Vec3};

use crate::scene::ActorKey;

/// Result of writing a transform property to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// The value was written as requested.
    Applied,
    /// A sweep hit blocking geometry; the actor stopped short of the requested value.
    Blocked,
    /// The actor no longer exists. Nothing was written.
    TargetLost,
}

impl ApplyResult {
    #[inline]
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == ApplyResult::Applied
    }
}

/// Transform access for animated actors.
pub trait TransformHost {
    /// Whether `actor` is still alive.
    fn contains(&self, actor: ActorKey) -> bool;

    fn location(&self, actor: ActorKey) -> Option<Vec3>;

    /// Moves `actor` to `location`.
    ///
    /// With `sweep` set, the move is tested against blocking geometry and
    /// stops at the first contact, returning [`ApplyResult::Blocked`].
    fn set_location(&mut self, actor: ActorKey, location: Vec3, sweep: bool) -> ApplyResult;

    fn rotation(&self, actor: ActorKey) -> Option<Quat>;

    fn set_rotation(&mut self, actor: ActorKey, rotation: Quat) -> ApplyResult;

    fn scale(&self, actor: ActorKey) -> Option<Vec3>;

    fn set_scale(&mut self, actor: ActorKey, scale: Vec3) -> ApplyResult;
}
