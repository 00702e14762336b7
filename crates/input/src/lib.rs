//! Input layer: typed actions from a device-binding collaborator, folded into
//! one [`InputFrame`] per update.
//!
//! # Invariants
//! - Jump is edge-triggered: `jump_triggered` is true only on the frame the
//!   press begins.
//! - Look deltas accumulate until the frame is taken, then reset.
//! - Held states (move, sprint, crouch) persist across frames.

pub mod action;
pub mod collector;
pub mod script;

pub use action::{Action, InputFrame};
pub use collector::InputCollector;
pub use script::{InputScript, ScriptError, ScriptStep};

pub fn crate_info() -> &'static str {
    "thirdperson-input v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("input"));
    }
}
