//! Duration derivation.
//!
//! A caller hands a task a single `time` number. Depending on the
//! [`TimingMode`] it is either the duration itself (seconds) or a rate
//! (units per second, degrees per second for rotations) from which the
//! duration is derived using the distance between start and end.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Shortest duration any task may have, in seconds.
pub const MIN_DURATION: f32 = 0.001;

/// Tolerance below which distances and rates count as zero.
pub const DURATION_TOLERANCE: f32 = 1e-4;

/// How the `time` argument of an entry point is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimingMode {
    /// `time` is the duration in seconds.
    #[default]
    Duration,
    /// `time` is a speed: units per second, or degrees per second for rotations.
    Rate,
}

/// Unknown raw values fall back to [`TimingMode::Duration`].
impl From<u8> for TimingMode {
    fn from(raw: u8) -> Self {
        match raw {
            0 => TimingMode::Duration,
            1 => TimingMode::Rate,
            _ => {
                log::warn!("Unknown timing mode {raw}, falling back to Duration");
                TimingMode::Duration
            }
        }
    }
}

// ============================================================================
// Metric
// ============================================================================

/// Distance between two values of an animated quantity.
pub trait Metric: Copy {
    /// Distance in the unit a rate is expressed in.
    fn distance(a: Self, b: Self) -> f32;

    /// Whether `a` and `b` are the same value within `tolerance`.
    fn coincident(a: Self, b: Self, tolerance: f32) -> bool {
        Self::distance(a, b) <= tolerance
    }
}

impl Metric for Vec3 {
    fn distance(a: Self, b: Self) -> f32 {
        a.distance(b)
    }
}

impl Metric for Quat {
    /// Angle of the shortest rotation from `a` to `b`, in degrees (`[0, 180]`).
    fn distance(a: Self, b: Self) -> f32 {
        let inner = a.dot(b);
        let cos = (2.0 * inner * inner - 1.0).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    /// Component-wise comparison, accepting either sign of `b`.
    fn coincident(a: Self, b: Self, tolerance: f32) -> bool {
        let same = (a - b).to_array().iter().all(|c| c.abs() <= tolerance);
        let flipped = (a + b).to_array().iter().all(|c| c.abs() <= tolerance);
        same || flipped
    }
}

// ============================================================================
// DurationPolicy
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationPolicy {
    pub min_duration: f32,
    pub tolerance: f32,
}

impl Default for DurationPolicy {
    fn default() -> Self {
        Self {
            min_duration: MIN_DURATION,
            tolerance: DURATION_TOLERANCE,
        }
    }
}

impl DurationPolicy {
    /// Resolves the effective duration of a task running from `start` to `end`.
    ///
    /// The result is finite and never below `min_duration`.
    #[must_use]
    pub fn resolve<T: Metric>(&self, mode: TimingMode, time: f32, start: T, end: T) -> f32 {
        if !time.is_finite() {
            log::warn!("Non-finite task time {time}, using minimal duration");
            return self.min_duration;
        }

        let duration = match mode {
            TimingMode::Duration => time,
            TimingMode::Rate => {
                if time <= self.tolerance || T::coincident(start, end, self.tolerance) {
                    return self.min_duration;
                }
                T::distance(start, end) / time
            }
        };

        if duration.is_finite() {
            duration.max(self.min_duration)
        } else {
            self.min_duration
        }
    }

    /// Duration used when a task cannot be measured (no live target, or a
    /// negligible `time`).
    #[inline]
    #[must_use]
    pub fn floor(&self) -> f32 {
        self.min_duration
    }
}

/// [`DurationPolicy::resolve`] with the default floor and tolerance.
#[must_use]
pub fn resolve_duration<T: Metric>(mode: TimingMode, time: f32, start: T, end: T) -> f32 {
    DurationPolicy::default().resolve(mode, time, start, end)
}
