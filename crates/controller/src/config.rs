//! Controller tuning, set once at spawn and read-only afterwards.
//!
//! Loadable from YAML (`.yaml`/`.yml`) or JSON (`.json`); any field left out
//! keeps its default.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::look::PITCH_LIMIT_DEGREES;

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal speed with no modifier, units per second.
    pub walk_speed: f32,
    /// Horizontal speed while sprint is held and not crouching.
    pub sprint_speed: f32,
    /// Horizontal speed while crouching; wins over sprint.
    pub crouch_speed: f32,
    /// Apex height of a jump.
    pub jump_height: f32,
    /// Vertical acceleration, negative is down.
    pub gravity: f32,
    /// Degrees per second per unit of look input.
    pub rotation_speed: f32,
    /// Camera offset in the character's yaw frame (right, up, forward).
    pub camera_offset: Vec3,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            sprint_speed: 6.0,
            crouch_speed: 2.0,
            jump_height: 2.0,
            gravity: -9.81,
            rotation_speed: 5.0,
            camera_offset: Vec3::new(0.75, 1.5, -3.0),
            initial_yaw: 0.0,
            initial_pitch: 0.0,
        }
    }
}

impl ControllerConfig {
    /// Launch speed that reaches `jump_height` under `gravity` (v² = 2gh).
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).sqrt()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("crouch_speed", self.crouch_speed),
            ("jump_height", self.jump_height),
            ("gravity", self.gravity),
            ("rotation_speed", self.rotation_speed),
            ("initial_yaw", self.initial_yaw),
            ("initial_pitch", self.initial_pitch),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(field, format!("{value} is not finite")));
            }
        }
        if !self.camera_offset.is_finite() {
            return Err(invalid("camera_offset", "components must be finite"));
        }
        for (field, value) in [
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("crouch_speed", self.crouch_speed),
            ("jump_height", self.jump_height),
        ] {
            if value < 0.0 {
                return Err(invalid(field, format!("{value} is negative")));
            }
        }
        if self.gravity >= 0.0 {
            return Err(invalid(
                "gravity",
                format!("{} must be negative (down)", self.gravity),
            ));
        }
        if self.initial_pitch.abs() > PITCH_LIMIT_DEGREES {
            return Err(invalid(
                "initial_pitch",
                format!(
                    "{} is outside ±{PITCH_LIMIT_DEGREES} degrees",
                    self.initial_pitch
                ),
            ));
        }
        Ok(())
    }

    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !matches!(ext.as_str(), "yaml" | "yml" | "json") {
            return Err(ConfigError::UnsupportedFormat(ext));
        }
        let src = std::fs::read_to_string(path)?;
        let config = if ext == "json" {
            Self::from_json_str(&src)?
        } else {
            Self::from_yaml_str(&src)?
        };
        tracing::info!(path = %path.display(), "loaded controller config");
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
