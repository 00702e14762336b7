use glam::{Quat, Vec2};

use crate::state::CameraState;

/// Pitch is clamped to this many degrees above or below level.
pub const PITCH_LIMIT_DEGREES: f32 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookOutput {
    /// Yaw-only rotation for the character body.
    pub facing: Quat,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookIntegrator {
    /// Degrees per second per unit of look input.
    pub rotation_speed: f32,
}

impl LookIntegrator {
    pub fn new(rotation_speed: f32) -> Self {
        Self { rotation_speed }
    }

    /// Apply one frame of look input. Yaw is unbounded; pitch is inverted
    /// (look up is positive input) and clamped.
    pub fn integrate(&self, look: Vec2, dt: f32, camera: &mut CameraState) -> LookOutput {
        camera.yaw += look.x * self.rotation_speed * dt;
        camera.pitch -= look.y * self.rotation_speed * dt;
        camera.pitch = camera
            .pitch
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        LookOutput {
            facing: camera.facing(),
        }
    }
}
