//! Horizontal movement relative to the camera plus jump and gravity.

use glam::{Vec2, Vec3};
use thirdperson_common::UP;

use crate::config::ControllerConfig;

/// Vertical velocity held while grounded so the character keeps pressing into
/// the floor and ground detection does not flicker.
pub const GROUNDED_VERTICAL_VELOCITY: f32 = -2.0;

/// Everything the motion step reads for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInput {
    /// x = right, y = forward.
    pub move_axis: Vec2,
    pub sprint: bool,
    pub jump_triggered: bool,
    pub crouching: bool,
    pub grounded: bool,
    pub camera_forward: Vec3,
    pub camera_right: Vec3,
    pub dt: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionOutput {
    /// World-space move to request from the motor.
    pub displacement: Vec3,
    /// Horizontal speed chosen this frame.
    pub speed: f32,
    /// A jump launched this frame.
    pub jumped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntegrator {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,
    pub jump_height: f32,
    pub gravity: f32,
}

impl From<&ControllerConfig> for MotionIntegrator {
    fn from(c: &ControllerConfig) -> Self {
        Self {
            walk_speed: c.walk_speed,
            sprint_speed: c.sprint_speed,
            crouch_speed: c.crouch_speed,
            jump_height: c.jump_height,
            gravity: c.gravity,
        }
    }
}

impl MotionIntegrator {
    /// Crouch wins over sprint, sprint over walk.
    pub fn select_speed(&self, crouching: bool, sprint: bool) -> f32 {
        if crouching {
            self.crouch_speed
        } else if sprint {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }

    /// Move axis projected on the camera axes, flattened onto the ground
    /// plane. Not renormalised, so a pitched camera slows forward motion the
    /// same way the flattened forward vector shrinks.
    pub fn horizontal_direction(move_axis: Vec2, forward: Vec3, right: Vec3) -> Vec3 {
        let mut dir = forward * move_axis.y + right * move_axis.x;
        dir.y = 0.0;
        dir
    }

    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    /// Advance one frame. Mutates `vertical_velocity` in place.
    pub fn integrate(&self, input: &MotionInput, vertical_velocity: &mut f32) -> MotionOutput {
        let direction =
            Self::horizontal_direction(input.move_axis, input.camera_forward, input.camera_right);
        let speed = self.select_speed(input.crouching, input.sprint);

        if input.grounded && *vertical_velocity < 0.0 {
            *vertical_velocity = GROUNDED_VERTICAL_VELOCITY;
        }

        let jumped = input.jump_triggered && input.grounded;
        if jumped {
            *vertical_velocity = self.jump_velocity();
        }

        // Runs while grounded too; the clamp above keeps it from accumulating.
        *vertical_velocity += self.gravity * input.dt;

        let displacement = (direction * speed + UP * *vertical_velocity) * input.dt;
        MotionOutput {
            displacement,
            speed,
            jumped,
        }
    }
}
