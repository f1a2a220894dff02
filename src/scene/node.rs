use glam::Vec3;

use crate::scene::collision::Aabb;
use crate::scene::transform::Transform;

/// An animatable actor living in a [`Stage`](crate::scene::Stage).
///
/// # Collision
///
/// Actors with `extent` set are swept as boxes of those half extents when a
/// move asks for a sweep. Actors without one are swept as points.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Debug name
    pub name: String,

    /// Transform component
    pub transform: Transform,

    /// Half extents used for sweeps
    pub extent: Option<Vec3>,
}

impl Actor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            extent: None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn with_extent(mut self, half_extents: Vec3) -> Self {
        self.extent = Some(half_extents.abs());
        self
    }

    /// World-space bounds at the current position, if the actor has an extent.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        self.extent
            .map(|half| Aabb::from_center_half_extents(self.transform.position, half))
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new("Actor")
    }
}
