use glam::Vec3;

/// Axis-aligned box used as blocking geometry and as an actor's extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self::new(center - half, center + half)
    }

    /// Grows the box by `half_extents` on every side (Minkowski sum with a box).
    #[must_use]
    pub fn expanded(&self, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: self.min - half,
            max: self.max + half,
        }
    }

    #[must_use]
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// First time of impact in `[0, 1]` of the segment `from -> to` with this box.
    ///
    /// Segments that start inside the box are not blocked by it, so an actor
    /// that already overlaps can move out.
    #[must_use]
    pub fn sweep_segment(&self, from: Vec3, to: Vec3) -> Option<f32> {
        if self.contains_point(from) {
            return None;
        }

        let dir = to - from;
        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;

        for axis in 0..3 {
            let origin = from[axis];
            let d = dir[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if d.abs() < f32::EPSILON {
                // Parallel to this slab: must already be inside it.
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let t1 = (lo - origin) * inv;
            let t2 = (hi - origin) * inv;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));

            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }
}
