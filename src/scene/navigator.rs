//! Scene-group motion: node placement, layout transitions, auto-rotation.

use glam::Vec3;

use super::entity::{Layout, LayoutTargets, NodeLocalPosition, SceneTransform};
use crate::animation::{AnimationTuning, Animator, Track, TweenSet};
use crate::host::{Axis, Channel, TweenSink};

/// Default edge length of the cube that normalized node coordinates map to.
pub const DEFAULT_NODE_SCALE: f32 = 600.0;

/// Velocities at or below this magnitude leave the group untouched.
pub const ROTATION_EPSILON: f32 = 1e-4;

/// Generation number of a layout transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(u64);

/// A layout transition that has resolved and committed its end state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettledTransition {
    /// Which transition settled.
    pub id: TransitionId,
    /// Layout the group now shows.
    pub layout: Layout,
}

#[derive(Debug)]
struct Transition {
    id: TransitionId,
    layout: Layout,
    depth: f32,
    tweens: TweenSet,
}

/// Moves the scene group that holds the photo nodes.
#[derive(Debug)]
pub struct SceneNavigator {
    node_scale: f32,
    layouts: LayoutTargets,
    in_flight: Option<Transition>,
    generation: u64,
}

impl SceneNavigator {
    /// Navigator mapping unit coordinates to `node_scale` world units.
    #[must_use]
    pub fn new(node_scale: f32, layouts: LayoutTargets) -> Self {
        Self {
            node_scale,
            layouts,
            in_flight: None,
            generation: 0,
        }
    }

    /// Id of the live transition, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<TransitionId> {
        self.in_flight.as_ref().map(|t| t.id)
    }

    /// Where a node is right now, in the un-rotated camera frame.
    ///
    /// Local coordinates are re-centred around 0.5 and scaled, then rotated
    /// about the group's Y axis and shifted by the group's Z offset. Only the
    /// Y rotation and Z translation of the group are taken into account.
    #[must_use]
    pub fn node_world_position(
        &self,
        local: NodeLocalPosition,
        group: &SceneTransform,
    ) -> Vec3 {
        let [x, y, z] = local.0.map(|c| (c - 0.5) * self.node_scale);
        let (sin, cos) = group.rotation.y.sin_cos();
        Vec3::new(
            x * cos - z * sin,
            y,
            x * sin + z * cos + group.position.z,
        )
    }

    /// Tween the group to `layout`'s depth and back to zero rotation.
    ///
    /// A transition already in flight is superseded and will not commit.
    pub fn animate_layout_change<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        sink: &mut dyn TweenSink,
        current: &SceneTransform,
        layout: Layout,
        tuning: &AnimationTuning,
    ) -> TransitionId {
        if let Some(previous) = self.in_flight.take() {
            previous.tweens.cancel(animator);
            log::debug!(
                "layout transition to {} superseded by {layout}",
                previous.layout
            );
        }

        let depth = self.layouts.depth(layout);
        let tracks = [
            Track::new(
                Channel::GroupPosition(Axis::Z),
                current.position.z,
                depth,
            ),
            Track::new(Channel::GroupRotation(Axis::X), current.rotation.x, 0.0),
            Track::new(Channel::GroupRotation(Axis::Y), current.rotation.y, 0.0),
            Track::new(Channel::GroupRotation(Axis::Z), current.rotation.z, 0.0),
        ];

        self.generation += 1;
        let id = TransitionId(self.generation);
        let tweens = TweenSet::launch(animator, &tracks, tuning, sink);
        self.in_flight = Some(Transition {
            id,
            layout,
            depth,
            tweens,
        });
        id
    }

    /// Commit the live transition if all four tweens have resolved.
    pub fn poll<A: Animator + ?Sized>(
        &mut self,
        animator: &A,
        sink: &mut dyn TweenSink,
    ) -> Option<SettledTransition> {
        if !self.in_flight.as_ref()?.tweens.is_settled(animator) {
            return None;
        }
        let transition = self.in_flight.take()?;
        sink.apply(Channel::GroupPosition(Axis::Z), transition.depth);
        for axis in Axis::ALL {
            sink.apply(Channel::GroupRotation(axis), 0.0);
        }
        Some(SettledTransition {
            id: transition.id,
            layout: transition.layout,
        })
    }

    /// Integrate auto-rotation for one frame.
    ///
    /// Adds `velocity * dt` to the group's Y rotation unless the velocity is
    /// negligible or the layout suppresses rotation. Returns whether the
    /// group was rotated.
    pub fn update_rotation(
        &self,
        sink: &mut dyn TweenSink,
        group: &SceneTransform,
        velocity: f32,
        dt: f32,
        layout: Layout,
    ) -> bool {
        if velocity.abs() <= ROTATION_EPSILON || layout.suppresses_rotation() {
            return false;
        }
        sink.apply(
            Channel::GroupRotation(Axis::Y),
            group.rotation.y + velocity * dt,
        );
        true
    }
}

impl Default for SceneNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_SCALE, LayoutTargets::default())
    }
}
