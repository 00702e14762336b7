use glam::Vec3;
use thirdperson_common::{Pose, yaw_rotation};

use crate::state::CameraState;

/// Over-the-shoulder camera placement.
///
/// Position orbits with yaw only, so the offset distance never changes with
/// pitch. Orientation composes yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Offset in the character's yaw frame: x right, y up, z forward.
    pub offset: Vec3,
}

impl CameraRig {
    pub fn new(offset: Vec3) -> Self {
        Self { offset }
    }

    pub fn position(&self, character: Vec3, yaw: f32) -> Vec3 {
        character + yaw_rotation(yaw) * self.offset
    }

    pub fn pose(&self, character: Vec3, camera: &CameraState) -> Pose {
        Pose::new(self.position(character, camera.yaw), camera.rotation())
    }
}
