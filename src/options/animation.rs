use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::tween::DEFAULT_TWEEN_SECS;
use crate::animation::{AnimationTuning, EasingFunction};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Timing shared by camera flights and layout transitions.
pub struct AnimationOptions {
    /// Tween duration in seconds. Zero snaps immediately.
    #[schemars(title = "Duration", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub duration_secs: f32,
    /// Easing curve.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl AnimationOptions {
    /// Tuning built from these options.
    #[must_use]
    pub fn tuning(&self) -> AnimationTuning {
        AnimationTuning::from_secs(self.duration_secs, self.easing)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_TWEEN_SECS,
            easing: EasingFunction::DEFAULT,
        }
    }
}
