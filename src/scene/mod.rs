//! Scene-group state: layouts, node placement and group motion.
//!
//! Photo nodes live inside a single group whose depth changes with the
//! active [`Layout`] and whose Y rotation drifts while auto-rotating. The
//! [`SceneNavigator`] resolves where a node currently is and animates the
//! group between layouts.

mod entity;
pub mod navigator;

pub use entity::{
    Layout, LayoutTargets, NodeLocalPosition, NodeLookup, NodePositions,
    SceneTransform,
};
pub use navigator::{SceneNavigator, SettledTransition, TransitionId};
