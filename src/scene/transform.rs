use glam::{Quat, Vec3};

use crate::scene::rotator::Rotator;

/// Transform 组件
///
/// 封装了 Actor 的位置、旋转、缩放（TRS）。
/// 动画任务通过 `TransformHost` 读写这里的字段。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Rotator) -> Self {
        self.rotation = rotation.to_quat();
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    // ========================================================================
    // Getters & Helpers
    // ========================================================================

    /// 获取当前旋转（角度制欧拉角）
    #[must_use]
    pub fn rotator(&self) -> Rotator {
        Rotator::from_quat(self.rotation)
    }

    /// 设置旋转（角度制欧拉角）
    pub fn set_rotator(&mut self, rotator: Rotator) {
        self.rotation = rotator.to_quat();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
