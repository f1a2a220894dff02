//! Easing Tests
//!
//! Tests for:
//! - Curve endpoints and output range for every EasingKind
//! - Exact formulas (linear identity, quadratic values)
//! - Point symmetry of the in-out curves
//! - Input clamping and raw-value fallback
//! - Interpolatable implementations (f32, Vec3, Quat)
//! - Standalone ease_scalar / ease_vector / ease_orientation

use glam::{Quat, Vec3};

use myth_tween::animation::easing::{
    EasingKind, apply_easing, ease, ease_orientation, ease_scalar, ease_vector,
};
use myth_tween::animation::values::Interpolatable;
use myth_tween::scene::Rotator;

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn samples() -> impl Iterator<Item = f32> {
    (0..=100).map(|i| i as f32 / 100.0)
}

// ============================================================================
// Endpoints & Range
// ============================================================================

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for kind in EasingKind::ALL {
        assert!(approx(ease(0.0, kind), 0.0), "{kind:?} at 0 = {}", ease(0.0, kind));
        assert!(approx(ease(1.0, kind), 1.0), "{kind:?} at 1 = {}", ease(1.0, kind));
    }
}

#[test]
fn expo_endpoints_are_exact() {
    assert_eq!(ease(0.0, EasingKind::ExpoIn), 0.0);
    assert_eq!(ease(1.0, EasingKind::ExpoIn), 1.0);
    assert_eq!(ease(0.0, EasingKind::ExpoOut), 0.0);
    assert_eq!(ease(1.0, EasingKind::ExpoOut), 1.0);
    assert_eq!(ease(0.0, EasingKind::ExpoInOut), 0.0);
    assert_eq!(ease(1.0, EasingKind::ExpoInOut), 1.0);
}

#[test]
fn every_curve_stays_in_unit_range() {
    for kind in EasingKind::ALL {
        for a in samples() {
            let v = ease(a, kind);
            assert!(
                (-EPSILON..=1.0 + EPSILON).contains(&v),
                "{kind:?}({a}) = {v} out of range"
            );
        }
    }
}

#[test]
fn every_curve_is_monotonic() {
    for kind in EasingKind::ALL {
        let mut prev = ease(0.0, kind);
        for a in samples().skip(1) {
            let v = ease(a, kind);
            assert!(v + EPSILON >= prev, "{kind:?} decreases at {a}: {prev} -> {v}");
            prev = v;
        }
    }
}

// ============================================================================
// Formulas
// ============================================================================

#[test]
fn linear_is_identity() {
    for a in samples() {
        assert_eq!(ease(a, EasingKind::Linear), a);
    }
}

#[test]
fn quadratic_values() {
    assert!(approx(ease(0.5, EasingKind::EaseIn), 0.25));
    assert!(approx(ease(0.5, EasingKind::EaseOut), 0.75));
    assert!(approx(ease(0.25, EasingKind::EaseInOut), 0.125));
    assert!(approx(ease(0.5, EasingKind::EaseInOut), 0.5));
    assert!(approx(ease(0.75, EasingKind::EaseInOut), 0.875));
}

#[test]
fn expo_values() {
    // 2^(10 * (0.5 - 1)) = 2^-5
    assert!(approx(ease(0.5, EasingKind::ExpoIn), 1.0 / 32.0));
    assert!(approx(ease(0.5, EasingKind::ExpoOut), 1.0 - 1.0 / 32.0));
    assert!(approx(ease(0.5, EasingKind::ExpoInOut), 0.5));
}

#[test]
fn in_out_curves_are_point_symmetric() {
    for kind in [EasingKind::EaseInOut, EasingKind::ExpoInOut] {
        for a in samples() {
            let lhs = 1.0 - ease(1.0 - a, kind);
            let rhs = ease(a, kind);
            assert!(approx(lhs, rhs), "{kind:?} not symmetric at {a}: {lhs} vs {rhs}");
        }
    }
}

#[test]
fn ease_in_out_quad_is_continuous_at_midpoint() {
    let below = ease(0.5 - 1e-4, EasingKind::EaseInOut);
    let above = ease(0.5 + 1e-4, EasingKind::EaseInOut);
    assert!((above - below).abs() < 1e-3);
}

// ============================================================================
// Clamping & Fallback
// ============================================================================

#[test]
fn input_is_clamped() {
    for kind in EasingKind::ALL {
        assert_eq!(ease(-0.5, kind), ease(0.0, kind));
        assert_eq!(ease(1.5, kind), ease(1.0, kind));
    }
}

#[test]
fn unknown_raw_kind_falls_back_to_linear() {
    assert_eq!(EasingKind::from(200), EasingKind::Linear);
    assert_eq!(EasingKind::from(3), EasingKind::EaseInOut);
    assert_eq!(ease(0.3, EasingKind::from(42)), 0.3);
}

#[test]
fn apply_easing_matches_ease() {
    for kind in EasingKind::ALL {
        assert_eq!(apply_easing(0.37, kind), ease(0.37, kind));
    }
}

// ============================================================================
// Interpolatable
// ============================================================================

#[test]
fn scalar_and_vector_lerp_are_affine() {
    assert!(approx(f32::interpolate_linear(2.0, 4.0, 0.25), 2.5));

    let v = Vec3::interpolate_linear(Vec3::ZERO, Vec3::new(10.0, -20.0, 4.0), 0.5);
    assert_eq!(v, Vec3::new(5.0, -10.0, 2.0));
}

#[test]
fn quat_interpolation_matches_slerp_on_short_arc() {
    let a = Quat::IDENTITY;
    let b = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

    let ours = Quat::interpolate_linear(a, b, 0.5);
    let glam = a.slerp(b, 0.5);
    assert!(ours.angle_between(glam) < 2e-3);
}

#[test]
fn quat_interpolation_does_not_flip_hemisphere() {
    let a = Quat::IDENTITY;
    let b = -Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);

    // Long way round: halfway is a -135° yaw instead of +45°.
    let mid = Quat::interpolate_linear(a, b, 0.5);
    let expected = Quat::from_rotation_y(-135.0_f32.to_radians());
    assert!(mid.angle_between(expected) < 2e-3, "mid = {mid:?}");
}

#[test]
fn quat_interpolation_endpoints() {
    let a = Quat::from_rotation_x(0.3);
    let b = Quat::from_rotation_z(1.2);
    assert!(Quat::interpolate_linear(a, b, 0.0).angle_between(a) < 2e-3);
    assert!(Quat::interpolate_linear(a, b, 1.0).angle_between(b) < 2e-3);
}

// ============================================================================
// Standalone helpers
// ============================================================================

#[test]
fn ease_scalar_uses_eased_alpha() {
    assert!(approx(ease_scalar(0.0, 100.0, 0.5, EasingKind::EaseIn), 25.0));
}

#[test]
fn ease_vector_uses_eased_alpha() {
    let v = ease_vector(Vec3::ONE, Vec3::splat(3.0), 0.5, EasingKind::EaseOut);
    assert!(approx(v.x, 2.5) && approx(v.y, 2.5) && approx(v.z, 2.5));
}

#[test]
fn ease_orientation_goes_through_quaternions() {
    let start = Rotator::ZERO;
    let end = Rotator::from_yaw(90.0);

    let mid = ease_orientation(start, end, 0.5, EasingKind::Linear);
    assert!(mid.same_orientation(Rotator::from_yaw(45.0), 0.2), "mid = {mid:?}");

    let done = ease_orientation(start, end, 1.0, EasingKind::ExpoInOut);
    assert!(done.same_orientation(end, 0.2), "done = {done:?}");
}

#[test]
fn ease_orientation_takes_the_short_arc_across_the_wrap() {
    let start = Rotator::from_yaw(170.0);
    let end = Rotator::from_yaw(-170.0);

    let mid = ease_orientation(start, end, 0.5, EasingKind::Linear);
    assert!(mid.same_orientation(Rotator::from_yaw(180.0), 0.2), "mid = {mid:?}");

    let quarter = ease_orientation(start, end, 0.25, EasingKind::Linear);
    assert!(quarter.same_orientation(Rotator::from_yaw(175.0), 0.2), "quarter = {quarter:?}");

    let done = ease_orientation(start, end, 1.0, EasingKind::Linear);
    assert!(done.same_orientation(end, 0.2), "done = {done:?}");
}

#[test]
fn rotator_quaternion_round_trip() {
    let r = Rotator::new(20.0, -35.0, 10.0);
    let back = Rotator::from_quat(r.to_quat());
    assert!((back.pitch - r.pitch).abs() < 1e-3);
    assert!((back.yaw - r.yaw).abs() < 1e-3);
    assert!((back.roll - r.roll).abs() < 1e-3);
}
