//! Capabilities the host supplies: collision sweep and cursor capture.

use glam::Vec3;

/// Collision-aware character body owned by the host.
///
/// The controller asks for a displacement; the motor resolves collisions,
/// moves the body and updates the grounded flag for the next frame.
pub trait CharacterMotor {
    fn position(&self) -> Vec3;
    fn is_grounded(&self) -> bool;
    fn move_by(&mut self, displacement: Vec3);
}

/// Cursor lock/visibility owned by the host windowing layer.
pub trait CursorControl {
    /// Lock and hide the cursor when `captured`, release it otherwise.
    fn set_cursor_captured(&mut self, captured: bool);
}

/// Cursor stand-in for headless runs; only remembers the requested state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadlessCursor {
    pub captured: bool,
}

impl CursorControl for HeadlessCursor {
    fn set_cursor_captured(&mut self, captured: bool) {
        self.captured = captured;
    }
}

/// Motor over an infinite horizontal floor at `floor_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    position: Vec3,
    floor_height: f32,
    grounded: bool,
}

impl FlatGround {
    /// Place the body at `position`, snapped up onto the floor if below it.
    pub fn new(position: Vec3, floor_height: f32) -> Self {
        let mut motor = Self {
            position,
            floor_height,
            grounded: false,
        };
        motor.resolve();
        motor
    }

    pub fn floor_height(&self) -> f32 {
        self.floor_height
    }

    /// Teleport without sweeping.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.resolve();
    }

    fn resolve(&mut self) {
        if self.position.y <= self.floor_height {
            self.position.y = self.floor_height;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

impl CharacterMotor for FlatGround {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.resolve();
    }
}
