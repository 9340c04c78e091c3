use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::rotation::{
    DEFAULT_ACCELERATION, DEFAULT_INACTIVITY_TIMEOUT, DEFAULT_TARGET_SPEED,
};
use crate::animation::RotationState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Auto-Rotation", inline)]
#[serde(default)]
/// Idle auto-rotation parameters.
pub struct RotationOptions {
    /// Spin speed while auto-rotating (rad/s).
    #[schemars(title = "Speed", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub target_speed: f32,
    /// How quickly the spin ramps up and down (per second).
    #[schemars(title = "Acceleration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub acceleration: f32,
    /// Idle time after an interaction before the spin resumes.
    #[schemars(title = "Idle Timeout (ms)", range(min = 0, max = 600_000))]
    pub inactivity_timeout_ms: u64,
    /// Whether the idle timer restarts auto-rotation when it fires.
    #[schemars(title = "Resume When Idle")]
    pub resume_on_idle: bool,
}

impl RotationOptions {
    /// Fresh, stopped rotation state with these parameters.
    #[must_use]
    pub fn state(&self) -> RotationState {
        RotationState::new(
            self.target_speed,
            self.acceleration,
            Duration::from_millis(self.inactivity_timeout_ms),
        )
    }
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            target_speed: DEFAULT_TARGET_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            inactivity_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT.as_millis() as u64,
            resume_on_idle: true,
        }
    }
}
