use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use thirdperson_common::{FORWARD, RIGHT, yaw_pitch_rotation, yaw_rotation};

/// Character fields that persist between frames. Position is owned by the
/// [`crate::CharacterMotor`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    /// Vertical speed, positive is up.
    pub vertical_velocity: f32,
    /// Grounded flag as reported by the motor at the start of the last frame.
    pub grounded: bool,
    /// Crouch flag from the last input frame.
    pub crouching: bool,
}

/// Orbit angles in degrees. Pitch stays within the look limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraState {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Full camera orientation (yaw outer, pitch inner).
    pub fn rotation(&self) -> Quat {
        yaw_pitch_rotation(self.yaw, self.pitch)
    }

    /// Yaw-only orientation used for the character body.
    pub fn facing(&self) -> Quat {
        yaw_rotation(self.yaw)
    }

    /// Camera forward and right axes in world space.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let rot = self.rotation();
        (rot * FORWARD, rot * RIGHT)
    }
}
