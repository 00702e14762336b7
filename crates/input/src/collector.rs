use glam::Vec2;

use crate::action::{Action, InputFrame};

/// Folds a stream of [`Action`]s into one [`InputFrame`] per update.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    move_axis: Vec2,
    look_accum: Vec2,
    sprint_held: bool,
    jump_held: bool,
    jump_pressed: bool,
    crouch_held: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one action reported since the last frame was taken.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Move(axis) => self.move_axis = axis.clamp_length_max(1.0),
            Action::Look(delta) => self.look_accum += delta,
            Action::Sprint(held) => self.sprint_held = held,
            Action::Jump(held) => {
                if held && !self.jump_held {
                    self.jump_pressed = true;
                }
                self.jump_held = held;
            }
            Action::Crouch(held) => self.crouch_held = held,
            Action::Noop => {}
        }
    }

    pub fn extend<I: IntoIterator<Item = Action>>(&mut self, actions: I) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Produce this frame's snapshot and reset per-frame accumulators.
    pub fn take_frame(&mut self) -> InputFrame {
        let frame = InputFrame {
            move_axis: self.move_axis,
            look_delta: self.look_accum,
            sprint: self.sprint_held,
            jump_triggered: self.jump_pressed,
            crouch: self.crouch_held,
        };
        self.look_accum = Vec2::ZERO;
        self.jump_pressed = false;
        if frame.jump_triggered {
            tracing::trace!("jump press edge consumed");
        }
        frame
    }

    /// Drop all held state, e.g. when focus is lost.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_triggers_once_per_press() {
        let mut c = InputCollector::new();
        c.apply(Action::Jump(true));
        assert!(c.take_frame().jump_triggered);
        // still held: no new trigger
        c.apply(Action::Jump(true));
        assert!(!c.take_frame().jump_triggered);
        assert!(!c.take_frame().jump_triggered);

        c.apply(Action::Jump(false));
        c.apply(Action::Jump(true));
        assert!(c.take_frame().jump_triggered);
    }

    #[test]
    fn press_and_release_within_frame_still_triggers() {
        let mut c = InputCollector::new();
        c.extend([Action::Jump(true), Action::Jump(false)]);
        assert!(c.take_frame().jump_triggered);
    }

    #[test]
    fn look_accumulates_then_resets() {
        let mut c = InputCollector::new();
        c.extend([
            Action::Look(Vec2::new(1.0, 2.0)),
            Action::Look(Vec2::new(0.5, -1.0)),
        ]);
        assert_eq!(c.take_frame().look_delta, Vec2::new(1.5, 1.0));
        assert_eq!(c.take_frame().look_delta, Vec2::ZERO);
    }

    #[test]
    fn held_states_persist() {
        let mut c = InputCollector::new();
        c.extend([
            Action::Move(Vec2::new(0.0, 1.0)),
            Action::Sprint(true),
            Action::Crouch(true),
        ]);
        let _ = c.take_frame();
        let f = c.take_frame();
        assert_eq!(f.move_axis, Vec2::new(0.0, 1.0));
        assert!(f.sprint);
        assert!(f.crouch);

        c.apply(Action::Sprint(false));
        assert!(!c.take_frame().sprint);
    }

    #[test]
    fn move_is_clamped_to_unit_length() {
        let mut c = InputCollector::new();
        c.apply(Action::Move(Vec2::new(1.0, 1.0)));
        let f = c.take_frame();
        assert!((f.move_axis.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn noop_changes_nothing() {
        let mut c = InputCollector::new();
        c.apply(Action::Noop);
        assert_eq!(c.take_frame(), InputFrame::idle());
    }

    #[test]
    fn reset_clears_held_state() {
        let mut c = InputCollector::new();
        c.extend([Action::Sprint(true), Action::Jump(true)]);
        c.reset();
        assert_eq!(c.take_frame(), InputFrame::idle());
    }
}
