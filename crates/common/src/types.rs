use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World up axis.
pub const UP: Vec3 = Vec3::Y;
/// Forward axis of an unrotated character or camera.
pub const FORWARD: Vec3 = Vec3::Z;
/// Right axis of an unrotated character or camera.
pub const RIGHT: Vec3 = Vec3::X;

/// World-space placement without scale: position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Direction the pose is looking along.
    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    /// Right-hand direction of the pose.
    pub fn right(&self) -> Vec3 {
        self.rotation * RIGHT
    }
}

/// Rotation about the vertical axis by `yaw_degrees`.
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(yaw_degrees.to_radians())
}

/// Yaw applied outermost, pitch innermost (first-person style composition).
pub fn yaw_pitch_rotation(yaw_degrees: f32, pitch_degrees: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        yaw_degrees.to_radians(),
        pitch_degrees.to_radians(),
        0.0,
    )
}
