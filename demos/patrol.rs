//! Patrol demo
//!
//! A guard walks between waypoints, turning to face each one before it
//! moves, while a crate pulses in scale. The second leg runs into a wall and
//! fails, so the guard turns back.
//!
//! Run with `RUST_LOG=debug cargo run --example patrol` to see task logs.

use glam::Vec3;
use myth_tween::scene::Aabb;
use myth_tween::{
    Actor, ActorKey, EasingKind, Rotator, Stage, TaskOutcome, TaskScheduler, TimingMode,
    TransformHost, TweenSettings,
};

const FRAME_DT: f32 = 1.0 / 30.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => TweenSettings::load(path)?,
        None => TweenSettings::default(),
    };

    let mut stage = Stage::new();
    let guard = stage.spawn(Actor::new("guard").with_extent(Vec3::splat(0.4)));
    let crate_box = stage.spawn(Actor::new("crate"));
    stage.add_blocker(Aabb::new(Vec3::new(-4.0, -1.0, 7.0), Vec3::new(4.0, 1.0, 8.0)));

    let waypoints = [
        Vec3::new(6.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 12.0),
        Vec3::ZERO,
    ];

    let mut scheduler = TaskScheduler::new(&settings)?;

    let pulse = scheduler
        .scale_request(crate_box, Vec3::splat(1.5))
        .duration(0.75)
        .easing(EasingKind::EaseInOut);
    scheduler.start_scale(&mut stage, pulse)?;

    let mut leg = 0;
    let mut turning = true;
    start_turn(&mut scheduler, &mut stage, guard, waypoints[leg])?;

    let mut frame = 0_u32;
    while leg < waypoints.len() && frame < 1_000 {
        frame += 1;

        for event in scheduler.update(FRAME_DT, &mut stage) {
            if event.target == crate_box {
                let back = if stage.scale(crate_box) == Some(Vec3::ONE) { 1.5 } else { 1.0 };
                let pulse = scheduler
                    .scale_request(crate_box, Vec3::splat(back))
                    .duration(0.75)
                    .easing(EasingKind::EaseInOut);
                scheduler.start_scale(&mut stage, pulse)?;
                continue;
            }

            let position = stage.location(guard).unwrap_or_default();
            match (turning, event.outcome) {
                (true, _) => {
                    let walk = scheduler
                        .move_request(guard, waypoints[leg])
                        .time(4.0)
                        .timing_mode(TimingMode::Rate)
                        .easing(EasingKind::EaseInOut)
                        .sweep(true);
                    scheduler.start_move(&mut stage, walk)?;
                    turning = false;
                }
                (false, outcome) => {
                    if outcome == TaskOutcome::Success {
                        println!("frame {frame:>4}: reached waypoint {leg} at {position}");
                    } else {
                        println!("frame {frame:>4}: blocked before waypoint {leg}, stopped at {position}");
                    }
                    leg += 1;
                    if leg < waypoints.len() {
                        start_turn(&mut scheduler, &mut stage, guard, waypoints[leg])?;
                        turning = true;
                    }
                }
            }
        }
    }

    println!("patrol finished after {frame} frames");
    Ok(())
}

fn start_turn(
    scheduler: &mut TaskScheduler,
    stage: &mut Stage,
    guard: ActorKey,
    toward: Vec3,
) -> anyhow::Result<()> {
    let from = stage.location(guard).unwrap_or_default();
    let dir = toward - from;
    let yaw = dir.x.atan2(dir.z).to_degrees();

    let turn = scheduler
        .rotate_request(guard, Rotator::from_yaw(yaw))
        .time(180.0)
        .timing_mode(TimingMode::Rate)
        .easing(EasingKind::EaseOut);
    scheduler.start_rotate(stage, turn)?;
    Ok(())
}
