use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

use glam::Vec3;
use rustc_hash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

// ---------------------------------------------------------------------------
// SceneTransform
// ---------------------------------------------------------------------------

/// Pose of the scene group that holds every photo node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneTransform {
    /// Group translation.
    pub position: Vec3,
    /// Group Euler rotation in radians.
    pub rotation: Vec3,
}

impl SceneTransform {
    /// Transform from a translation and an Euler rotation.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Spatial arrangement of the node cloud.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Nodes on a sphere around the origin.
    #[default]
    Sphere,
    /// Flat 2D grid facing the camera.
    Grid,
    /// Nodes grouped into 3D clusters, pushed back from the camera.
    Cluster3d,
}

impl Layout {
    /// Every layout.
    pub const ALL: [Layout; 3] = [Layout::Sphere, Layout::Grid, Layout::Cluster3d];

    /// Layout id as used in configuration and events.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Grid => "grid",
            Self::Cluster3d => "cluster3d",
        }
    }

    /// Whether auto-rotation is meaningless for this layout.
    ///
    /// The grid is a flat arrangement, so spinning it only hides the photos.
    #[must_use]
    pub fn suppresses_rotation(self) -> bool {
        matches!(self, Self::Grid)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == s)
            .ok_or_else(|| NavError::UnknownLayout(s.to_owned()))
    }
}

/// Group depth (Z offset) each layout settles at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Layout Depths", inline)]
#[serde(default)]
pub struct LayoutTargets {
    /// Depth for [`Layout::Sphere`].
    #[schemars(title = "Sphere")]
    pub sphere: f32,
    /// Depth for [`Layout::Grid`].
    #[schemars(title = "Grid")]
    pub grid: f32,
    /// Depth for [`Layout::Cluster3d`].
    #[schemars(title = "3D Clusters")]
    pub cluster3d: f32,
}

impl LayoutTargets {
    /// Target group depth for `layout`.
    #[must_use]
    pub fn depth(&self, layout: Layout) -> f32 {
        match layout {
            Layout::Sphere => self.sphere,
            Layout::Grid => self.grid,
            Layout::Cluster3d => self.cluster3d,
        }
    }
}

impl Default for LayoutTargets {
    fn default() -> Self {
        Self {
            sphere: 0.0,
            grid: 150.0,
            cluster3d: -300.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Node positions
// ---------------------------------------------------------------------------

/// Normalized node coordinates inside the scene group, each nominally in
/// `[0, 1]`.
///
/// Two-component inputs (flat layouts) get `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "[f32; 3]")]
pub struct NodeLocalPosition(pub [f32; 3]);

impl NodeLocalPosition {
    /// Position from three normalized coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }
}

impl From<[f32; 3]> for NodeLocalPosition {
    fn from(v: [f32; 3]) -> Self {
        Self(v)
    }
}

impl From<[f32; 2]> for NodeLocalPosition {
    fn from([x, y]: [f32; 2]) -> Self {
        Self([x, y, 0.0])
    }
}

impl From<NodeLocalPosition> for [f32; 3] {
    fn from(p: NodeLocalPosition) -> Self {
        p.0
    }
}

impl TryFrom<Vec<f32>> for NodeLocalPosition {
    type Error = String;

    fn try_from(v: Vec<f32>) -> Result<Self, Self::Error> {
        match v.as_slice() {
            [x, y] => Ok(Self([*x, *y, 0.0])),
            [x, y, z] => Ok(Self([*x, *y, *z])),
            other => Err(format!(
                "node position needs 2 or 3 coordinates, got {}",
                other.len()
            )),
        }
    }
}

/// Id → local position map, as delivered with selection events.
pub type NodePositions = FxHashMap<String, NodeLocalPosition>;

/// Lookup of a node's local position by id.
pub trait NodeLookup {
    /// Local position of node `id`, if known.
    fn local_position(&self, id: &str) -> Option<NodeLocalPosition>;
}

impl<S: BuildHasher> NodeLookup for HashMap<String, NodeLocalPosition, S> {
    fn local_position(&self, id: &str) -> Option<NodeLocalPosition> {
        self.get(id).copied()
    }
}
