use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::navigator::DEFAULT_NODE_SCALE;
use crate::scene::{Layout, LayoutTargets};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Node placement and layout depths.
pub struct SceneOptions {
    /// Edge length of the cube normalized node coordinates span.
    #[schemars(title = "Node Scale", range(min = 1.0, max = 5000.0), extend("step" = 10.0))]
    pub node_scale: f32,
    /// Layout shown at startup.
    #[schemars(title = "Initial Layout")]
    pub initial_layout: Layout,
    /// Group depth per layout.
    pub layouts: LayoutTargets,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            node_scale: DEFAULT_NODE_SCALE,
            initial_layout: Layout::default(),
            layouts: LayoutTargets::default(),
        }
    }
}
