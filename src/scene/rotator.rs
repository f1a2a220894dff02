use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

/// Orientation as an angle triple in degrees.
///
/// Conversion to and from quaternions uses yaw (Y) → pitch (X) → roll (Z)
/// order. Animation never blends rotators directly; it converts to
/// quaternions first so it cannot hit gimbal lock.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    /// Rotation about X, degrees
    pub pitch: f32,
    /// Rotation about Y, degrees
    pub yaw: f32,
    /// Rotation about Z, degrees
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    #[must_use]
    pub const fn from_yaw(yaw: f32) -> Self {
        Self::new(0.0, yaw, 0.0)
    }

    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let (yaw, pitch, roll) = q.normalize().to_euler(EulerRot::YXZ);
        Self {
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }

    /// Whether both rotators describe the same orientation, within `tolerance_deg`.
    #[must_use]
    pub fn same_orientation(self, other: Self, tolerance_deg: f32) -> bool {
        self.to_quat().angle_between(other.to_quat()).to_degrees() <= tolerance_deg
    }
}

impl From<Rotator> for Quat {
    fn from(r: Rotator) -> Self {
        r.to_quat()
    }
}

impl From<Quat> for Rotator {
    fn from(q: Quat) -> Self {
        Rotator::from_quat(q)
    }
}
