use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera eye position plus the orbit-controls look-at target.
///
/// A pose is a plain value: snapshots are copies, and two poses are equal
/// only when all six components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub target: Vec3,
}

impl CameraPose {
    /// Default resting pose: 300 units down +Z, looking at the origin.
    pub const DEFAULT: CameraPose = CameraPose {
        position: Vec3::new(0.0, 0.0, 300.0),
        target: Vec3::ZERO,
    };

    /// Pose from an eye position and a look-at target.
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Offset from the look-at target to the eye.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.position - self.target
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::DEFAULT
    }
}
