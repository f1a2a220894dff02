use glam::{Quat, Vec3, Vec4};

/// Quaternions closer than this (in `1 - |dot|`) are blended with a
/// normalized lerp instead of a true slerp.
const SLERP_LINEAR_THRESHOLD: f32 = 1e-4;

pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Quat {
    /// Spherical interpolation along the arc from `start` to `end` as given.
    ///
    /// Unlike [`Quat::slerp`] this does not flip `end` into the hemisphere of
    /// `start`, so a negative dot product travels the long way around.
    /// Callers that want the short arc negate `end` beforehand.
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        let dot = start.dot(end);

        if 1.0 - dot.abs() < SLERP_LINEAR_THRESHOLD {
            // Nearly (anti)parallel: the arc is degenerate, blend in the
            // hemisphere of `start`.
            let end = if dot < 0.0 { -end } else { end };
            let blended = Vec4::from(start).lerp(Vec4::from(end), t);
            return Quat::from_vec4(blended).normalize();
        }

        let theta = dot.clamp(-1.0, 1.0).acos();
        let sin_theta = theta.sin();
        let w0 = ((1.0 - t) * theta).sin() / sin_theta;
        let w1 = (t * theta).sin() / sin_theta;

        let result = Vec4::from(start) * w0 + Vec4::from(end) * w1;
        Quat::from_vec4(result).normalize()
    }
}
