//! Boundary between the navigation core and the host that owns the live
//! camera and scene group.
//!
//! The host keeps the only mutable copy of the camera pose and the scene
//! transform. The core reads them through [`SceneHost`] at the start of an
//! operation and writes back one scalar at a time through [`TweenSink`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::scene::SceneTransform;

/// Cartesian axis of a vector-valued host field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// X component.
    X,
    /// Y component.
    Y,
    /// Z component.
    Z,
}

impl Axis {
    /// All three axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Read this component of `v`.
    #[inline]
    #[must_use]
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    /// Mutable access to this component of `v`.
    #[inline]
    pub fn get_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Self::X => &mut v.x,
            Self::Y => &mut v.y,
            Self::Z => &mut v.z,
        }
    }
}

/// A single scalar field on the host that a tween can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Camera eye position.
    CameraPosition(Axis),
    /// Orbit-controls look-at target.
    CameraTarget(Axis),
    /// Scene group translation.
    GroupPosition(Axis),
    /// Scene group Euler rotation (radians).
    GroupRotation(Axis),
}

/// Receives interpolated values from running tweens.
///
/// This is the `onUpdate` side of a tween: every frame, each live tween
/// writes its current value into the field named by its [`Channel`].
pub trait TweenSink {
    /// Write `value` into the host field named by `channel`.
    fn apply(&mut self, channel: Channel, value: f32);

    /// Write a full camera pose, one channel at a time.
    fn apply_camera_pose(&mut self, pose: &CameraPose) {
        for axis in Axis::ALL {
            self.apply(Channel::CameraPosition(axis), axis.get(pose.position));
            self.apply(Channel::CameraTarget(axis), axis.get(pose.target));
        }
    }
}

/// The host rendering layer as seen by the navigation core.
pub trait SceneHost: TweenSink {
    /// Current camera pose, or `None` while the camera or its controls are
    /// not attached yet.
    fn camera_pose(&self) -> Option<CameraPose>;

    /// Current scene-group transform, or `None` while the group is not
    /// attached yet.
    fn scene_transform(&self) -> Option<SceneTransform>;

    /// Per-frame hook for the host's control scheme (damping, inertia).
    fn update_controls(&mut self) {}
}

/// In-memory host holding a camera and a scene group.
///
/// Used by the session runner, the web binding, and tests. Either half can
/// be detached (`None`) to model a render target that is not mounted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Camera pose, if attached.
    pub camera: Option<CameraPose>,
    /// Scene group transform, if attached.
    pub group: Option<SceneTransform>,
    /// Number of times the controls hook ran.
    #[serde(default)]
    pub controls_updates: u64,
}

impl Viewport {
    /// Viewport with the given camera and an identity scene group.
    #[must_use]
    pub fn new(camera: CameraPose) -> Self {
        Self {
            camera: Some(camera),
            group: Some(SceneTransform::default()),
            controls_updates: 0,
        }
    }

    /// Viewport with nothing attached.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            camera: None,
            group: None,
            controls_updates: 0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CameraPose::default())
    }
}

impl TweenSink for Viewport {
    fn apply(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::CameraPosition(axis) => {
                if let Some(camera) = self.camera.as_mut() {
                    *axis.get_mut(&mut camera.position) = value;
                }
            }
            Channel::CameraTarget(axis) => {
                if let Some(camera) = self.camera.as_mut() {
                    *axis.get_mut(&mut camera.target) = value;
                }
            }
            Channel::GroupPosition(axis) => {
                if let Some(group) = self.group.as_mut() {
                    *axis.get_mut(&mut group.position) = value;
                }
            }
            Channel::GroupRotation(axis) => {
                if let Some(group) = self.group.as_mut() {
                    *axis.get_mut(&mut group.rotation) = value;
                }
            }
        }
    }
}

impl SceneHost for Viewport {
    fn camera_pose(&self) -> Option<CameraPose> {
        self.camera
    }

    fn scene_transform(&self) -> Option<SceneTransform> {
        self.group
    }

    fn update_controls(&mut self) {
        self.controls_updates += 1;
    }
}
