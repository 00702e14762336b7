//! Scripted input for headless runs.
//!
//! ```yaml
//! steps:
//!   - frames: 60
//!     move: [0.0, 1.0]
//!   - frames: 30
//!     move: [0.0, 1.0]
//!     sprint: true
//!     jump: true
//!   - frames: 20
//!     look: [40.0, -10.0]
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::action::InputFrame;

/// Errors from loading an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("script has no frames")]
    Empty,
}

/// A run of identical frames. `jump` fires on the first frame only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u32,
    #[serde(default, rename = "move")]
    pub move_axis: Vec2,
    #[serde(default)]
    pub look: Vec2,
    #[serde(default)]
    pub sprint: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub crouch: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }

    pub fn from_yaml_str(src: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_yaml::from_str(src)?;
        if script.total_frames() == 0 {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let script = Self::from_yaml_str(&src)?;
        tracing::debug!(
            path = %path.display(),
            steps = script.steps.len(),
            frames = script.total_frames(),
            "loaded input script"
        );
        Ok(script)
    }

    pub fn total_frames(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// Expand the steps into per-frame input.
    pub fn frames(&self) -> impl Iterator<Item = InputFrame> + '_ {
        self.steps.iter().flat_map(|step| {
            (0..step.frames).map(move |i| InputFrame {
                move_axis: step.move_axis,
                look_delta: step.look,
                sprint: step.sprint,
                jump_triggered: step.jump && i == 0,
                crouch: step.crouch,
            })
        })
    }
}
