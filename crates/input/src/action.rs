use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A bound action reported by the device-binding layer.
///
/// The controller never sees raw device events or action names; the binding
/// layer translates keys, sticks and mouse motion into these variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Current move stick / WASD composite, x = right, y = forward.
    Move(Vec2),
    /// Look delta since the previous report (mouse motion, right stick).
    Look(Vec2),
    /// Sprint button state.
    Sprint(bool),
    /// Jump button state. The press edge becomes a one-frame trigger.
    Jump(bool),
    /// Crouch button state.
    Crouch(bool),
    /// Unbound input.
    Noop,
}

/// Snapshot of player intent for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_axis: Vec2,
    pub look_delta: Vec2,
    pub sprint: bool,
    pub jump_triggered: bool,
    pub crouch: bool,
}

impl InputFrame {
    /// A frame with no movement, no look and no buttons.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_move(mut self, x: f32, y: f32) -> Self {
        self.move_axis = Vec2::new(x, y);
        self
    }

    pub fn with_look(mut self, x: f32, y: f32) -> Self {
        self.look_delta = Vec2::new(x, y);
        self
    }

    pub fn with_sprint(mut self, sprint: bool) -> Self {
        self.sprint = sprint;
        self
    }

    pub fn with_jump(mut self, jump_triggered: bool) -> Self {
        self.jump_triggered = jump_triggered;
        self
    }

    pub fn with_crouch(mut self, crouch: bool) -> Self {
        self.crouch = crouch;
        self
    }
}
