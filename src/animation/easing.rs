//! Easing curves.
//!
//! An easing curve remaps normalized progress (`alpha` in `[0, 1]`) to shape
//! the perceived speed of an animation. Every curve here maps `0 -> 0` and
//! `1 -> 1`; the exponential curves hit both endpoints exactly.
//!
//! ```rust,ignore
//! use myth_tween::animation::easing::{ease, EasingKind};
//!
//! assert_eq!(ease(0.5, EasingKind::EaseIn), 0.25);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::channel::{Channel, Rotation};
use crate::animation::values::Interpolatable;
use crate::scene::Rotator;

/// Closed set of easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EasingKind {
    #[default]
    Linear,
    /// Quadratic ease in.
    EaseIn,
    /// Quadratic ease out.
    EaseOut,
    /// Quadratic ease in and out.
    EaseInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
}

impl EasingKind {
    pub const ALL: [EasingKind; 7] = [
        EasingKind::Linear,
        EasingKind::EaseIn,
        EasingKind::EaseOut,
        EasingKind::EaseInOut,
        EasingKind::ExpoIn,
        EasingKind::ExpoOut,
        EasingKind::ExpoInOut,
    ];
}

/// Raw values coming from scripting or serialized data.
///
/// Unknown values fall back to [`EasingKind::Linear`].
impl From<u8> for EasingKind {
    fn from(raw: u8) -> Self {
        match raw {
            0 => EasingKind::Linear,
            1 => EasingKind::EaseIn,
            2 => EasingKind::EaseOut,
            3 => EasingKind::EaseInOut,
            4 => EasingKind::ExpoIn,
            5 => EasingKind::ExpoOut,
            6 => EasingKind::ExpoInOut,
            _ => {
                log::warn!("Unknown easing kind {raw}, falling back to Linear");
                EasingKind::Linear
            }
        }
    }
}

// ============================================================================
// Curves
// ============================================================================

/// Applies an easing curve to `alpha`.
///
/// `alpha` is clamped to `[0, 1]` first, so upstream floating-point drift
/// never leaks into the curve.
#[must_use]
pub fn ease(alpha: f32, kind: EasingKind) -> f32 {
    let alpha = alpha.clamp(0.0, 1.0);

    match kind {
        EasingKind::Linear => alpha,
        EasingKind::EaseIn => alpha * alpha,
        EasingKind::EaseOut => alpha * (2.0 - alpha),
        EasingKind::EaseInOut => ease_in_out_quad(alpha),
        EasingKind::ExpoIn => expo_in(alpha),
        EasingKind::ExpoOut => expo_out(alpha),
        EasingKind::ExpoInOut => expo_in_out(alpha),
    }
}

fn ease_in_out_quad(alpha: f32) -> f32 {
    let a = alpha * 2.0;
    if a < 1.0 {
        return 0.5 * a * a;
    }
    let a = a - 1.0;
    0.5 * (1.0 - a * (a - 2.0))
}

fn expo_in(alpha: f32) -> f32 {
    if alpha == 0.0 {
        0.0
    } else {
        2.0_f32.powf(10.0 * (alpha - 1.0))
    }
}

fn expo_out(alpha: f32) -> f32 {
    if alpha == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * alpha)
    }
}

fn expo_in_out(alpha: f32) -> f32 {
    if alpha == 0.0 {
        return 0.0;
    }
    if alpha == 1.0 {
        return 1.0;
    }

    let a = alpha * 2.0;
    if a < 1.0 {
        0.5 * 2.0_f32.powf(10.0 * (a - 1.0))
    } else {
        0.5 * (2.0 - 2.0_f32.powf(-10.0 * (a - 1.0)))
    }
}

// ============================================================================
// Standalone interpolation helpers
// ============================================================================

/// Same as [`ease`]; the name scripting layers bind to.
#[inline]
#[must_use]
pub fn apply_easing(alpha: f32, kind: EasingKind) -> f32 {
    ease(alpha, kind)
}

/// Interpolates between two values of any [`Interpolatable`] type with an eased alpha.
#[inline]
#[must_use]
pub fn ease_value<T: Interpolatable>(start: T, end: T, alpha: f32, kind: EasingKind) -> T {
    T::interpolate_linear(start, end, ease(alpha, kind))
}

#[must_use]
pub fn ease_scalar(start: f32, end: f32, alpha: f32, kind: EasingKind) -> f32 {
    ease_value(start, end, alpha, kind)
}

#[must_use]
pub fn ease_vector(start: Vec3, end: Vec3, alpha: f32, kind: EasingKind) -> Vec3 {
    ease_value(start, end, alpha, kind)
}

/// Eases between two orientations through their quaternions, along the
/// shorter arc.
#[must_use]
pub fn ease_orientation(start: Rotator, end: Rotator, alpha: f32, kind: EasingKind) -> Rotator {
    let (start, end) = Rotation::default().prepare(start.to_quat(), end.to_quat());
    Rotator::from_quat(ease_value(start, end, alpha, kind))
}
