//! Stage & Transform Tests
//!
//! Tests for:
//! - Actor spawn / despawn and key invalidation
//! - TransformHost on Stage (reads, writes, lost targets)
//! - Transform rotator helpers
//! - Actor bounds and blocker management

use glam::{Quat, Vec3};

use myth_tween::host::{ApplyResult, TransformHost};
use myth_tween::scene::{Aabb, Actor, Rotator, Stage, Transform};

const EPSILON: f32 = 1e-4;

fn approx_vec3(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

// ============================================================================
// Actors
// ============================================================================

#[test]
fn spawn_and_despawn() {
    let mut stage = Stage::new();
    assert!(stage.is_empty());

    let a = stage.spawn(Actor::new("a"));
    let b = stage.spawn(Actor::new("b"));
    assert_eq!(stage.len(), 2);
    assert!(stage.contains(a) && stage.contains(b));

    let removed = stage.despawn(a).unwrap();
    assert_eq!(removed.name, "a");
    assert!(!stage.contains(a));
    assert!(stage.despawn(a).is_none());
    assert_eq!(stage.actors().count(), 1);
}

#[test]
fn stale_key_does_not_resolve_to_new_actor() {
    let mut stage = Stage::new();
    let old = stage.spawn(Actor::new("old"));
    stage.despawn(old);
    let new = stage.spawn(Actor::new("new"));

    assert_ne!(old, new);
    assert!(!stage.contains(old));
    assert_eq!(stage.location(old), None);
}

// ============================================================================
// TransformHost
// ============================================================================

#[test]
fn host_reads_and_writes() {
    let mut stage = Stage::new();
    let actor = stage.spawn(Actor::new("subject"));

    assert_eq!(stage.location(actor), Some(Vec3::ZERO));
    assert_eq!(stage.rotation(actor), Some(Quat::IDENTITY));
    assert_eq!(stage.scale(actor), Some(Vec3::ONE));

    let q = Quat::from_rotation_z(0.5);
    assert_eq!(stage.set_location(actor, Vec3::Y, false), ApplyResult::Applied);
    assert_eq!(stage.set_rotation(actor, q), ApplyResult::Applied);
    assert_eq!(stage.set_scale(actor, Vec3::splat(2.0)), ApplyResult::Applied);

    let transform = stage.get(actor).unwrap().transform;
    assert_eq!(transform.position, Vec3::Y);
    assert_eq!(transform.rotation, q);
    assert_eq!(transform.scale, Vec3::splat(2.0));
}

#[test]
fn writes_to_lost_target_report_target_lost() {
    let mut stage = Stage::new();
    let actor = stage.spawn(Actor::new("gone"));
    stage.despawn(actor);

    assert_eq!(stage.set_location(actor, Vec3::X, true), ApplyResult::TargetLost);
    assert_eq!(stage.set_rotation(actor, Quat::IDENTITY), ApplyResult::TargetLost);
    assert_eq!(stage.set_scale(actor, Vec3::ONE), ApplyResult::TargetLost);
    assert!(!ApplyResult::TargetLost.is_applied());
    assert!(!ApplyResult::Blocked.is_applied());
}

#[test]
fn removed_blocker_no_longer_blocks() {
    let mut stage = Stage::new();
    let actor = stage.spawn(Actor::new("subject"));
    let wall = stage.add_blocker(Aabb::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0)));

    assert!(stage.sweep(Vec3::ZERO, Vec3::X * 5.0, Vec3::ZERO).is_some());
    assert!(stage.remove_blocker(wall).is_some());
    assert!(stage.sweep(Vec3::ZERO, Vec3::X * 5.0, Vec3::ZERO).is_none());

    assert_eq!(stage.set_location(actor, Vec3::X * 5.0, true), ApplyResult::Applied);
}

#[test]
fn nearest_blocker_wins() {
    let mut stage = Stage::new();
    stage.add_blocker(Aabb::new(Vec3::new(6.0, -1.0, -1.0), Vec3::new(7.0, 1.0, 1.0)));
    stage.add_blocker(Aabb::new(Vec3::new(2.0, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0)));

    let toi = stage.sweep(Vec3::ZERO, Vec3::X * 10.0, Vec3::ZERO).unwrap();
    assert!((toi - 0.2).abs() < EPSILON, "toi = {toi}");
}

// ============================================================================
// Transform & Actor
// ============================================================================

#[test]
fn transform_rotator_helpers() {
    let mut transform = Transform::from_position(Vec3::new(1.0, 2.0, 3.0)).with_scale(Vec3::splat(2.0));
    assert_eq!(transform.rotation, Quat::IDENTITY);

    transform.set_rotator(Rotator::from_yaw(30.0));
    let r = transform.rotator();
    assert!((r.yaw - 30.0).abs() < 1e-3);
    assert!(r.pitch.abs() < 1e-3 && r.roll.abs() < 1e-3);
    assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(Transform::default(), Transform::IDENTITY.with_scale(Vec3::ONE));
}

#[test]
fn actor_bounds_follow_position() {
    let actor = Actor::new("box")
        .with_transform(Transform::from_position(Vec3::new(4.0, 0.0, 0.0)))
        .with_extent(Vec3::new(-1.0, 0.5, 0.5));

    let bounds = actor.bounds().unwrap();
    assert!(approx_vec3(bounds.min, Vec3::new(3.0, -0.5, -0.5)));
    assert!(approx_vec3(bounds.max, Vec3::new(5.0, 0.5, 0.5)));

    assert!(Actor::new("point").bounds().is_none());
}

#[test]
fn rotator_quat_conversions() {
    let r = Rotator::new(10.0, 45.0, -5.0);
    let q: Quat = r.into();
    let back: Rotator = q.into();
    assert!(back.same_orientation(r, 0.2));
    assert!(Rotator::from_yaw(360.0).same_orientation(Rotator::ZERO, 0.2));
}
