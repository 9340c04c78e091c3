//! Navigation options with TOML file support.
//!
//! Every tweakable constant (home pose, focus distance, tween timing,
//! auto-rotation, layout depths, history size) lives here. Options
//! serialize to/from TOML so a host can ship a preset next to its assets.

mod animation;
mod camera;
mod history;
mod rotation;
mod scene;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use history::HistoryOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[rotation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera home pose and focus framing.
    pub camera: CameraOptions,
    /// Tween timing.
    pub animation: AnimationOptions,
    /// Idle auto-rotation.
    pub rotation: RotationOptions,
    /// Node placement and layouts.
    pub scene: SceneOptions,
    /// Navigation history.
    pub history: HistoryOptions,
}

impl Options {
    /// Generate JSON Schema describing every option.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
