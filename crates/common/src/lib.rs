//! Shared types for the third-person controller workspace.
//!
//! # Conventions
//! - +Y is up, +Z is forward, +X is right.
//! - Angles are stored in degrees; conversion to radians happens at the
//!   quaternion boundary only.
//! - Positive pitch tilts the view downward.

pub mod types;

pub use types::{FORWARD, Pose, RIGHT, UP, yaw_pitch_rotation, yaw_rotation};
