//! Third-person controller: per-frame character motion, look integration and
//! a trailing over-the-shoulder camera.
//!
//! # Invariants
//! - One update per frame, in the order motion, look, camera.
//! - Pitch always stays within [`look::PITCH_LIMIT_DEGREES`] of level.
//! - Per-frame updates cannot fail; only configuration loading returns errors.
//! - Collision, ground detection and cursor capture are reached through
//!   [`CharacterMotor`] and [`CursorControl`], never owned here.

pub mod camera;
pub mod config;
pub mod controller;
pub mod look;
pub mod motion;
pub mod motor;
pub mod state;

pub use camera::CameraRig;
pub use config::{ConfigError, ControllerConfig};
pub use controller::{ControllerEvent, FrameContext, FrameOutput, ThirdPersonController};
pub use look::{LookIntegrator, LookOutput};
pub use motion::{MotionInput, MotionIntegrator};
pub use motor::{CharacterMotor, CursorControl, FlatGround, HeadlessCursor};
pub use state::{CameraState, CharacterState};

pub fn crate_info() -> &'static str {
    "thirdperson-controller v0.1.0"
}
