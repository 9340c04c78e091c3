use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera home pose and focus framing.
pub struct CameraOptions {
    /// Eye position used by "reset to default".
    #[schemars(title = "Default Position")]
    pub default_position: [f32; 3],
    /// Look-at point used by "reset to default".
    #[schemars(title = "Default Target")]
    pub default_target: [f32; 3],
    /// Distance kept between the camera and a focused node.
    #[schemars(title = "Focus Distance", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub focus_distance: f32,
}

impl CameraOptions {
    /// The configured home pose.
    #[must_use]
    pub fn default_pose(&self) -> CameraPose {
        CameraPose::new(
            Vec3::from_array(self.default_position),
            Vec3::from_array(self.default_target),
        )
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            default_position: CameraPose::DEFAULT.position.to_array(),
            default_target: CameraPose::DEFAULT.target.to_array(),
            focus_distance: 25.0,
        }
    }
}
