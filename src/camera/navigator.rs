//! Camera flights: focus on a node, return to a previous pose, reset.
//!
//! A flight tweens the six pose scalars (eye x/y/z, look-at x/y/z) together
//! and, once all six have resolved, writes the exact target pose so that no
//! interpolation residue survives. Only one flight is live at a time:
//! starting a new one cancels the tweens of the previous one, and a
//! cancelled flight never commits.

use glam::Vec3;

use super::core::CameraPose;
use super::history::{BoundedHistory, PoseHistory};
use crate::animation::{AnimationTuning, Animator, Track, TweenSet};
use crate::host::{Axis, Channel, TweenSink};

/// Generation number of a camera flight. Later flights compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightId(u64);

/// A flight that has resolved and committed its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettledFlight {
    /// Which flight settled.
    pub id: FlightId,
    /// The pose written to the host.
    pub pose: CameraPose,
}

#[derive(Debug)]
struct Flight {
    id: FlightId,
    target: CameraPose,
    tweens: TweenSet,
}

/// Drives camera flights and owns the navigation history.
#[derive(Debug)]
pub struct CameraNavigator<H: PoseHistory = BoundedHistory> {
    history: H,
    in_flight: Option<Flight>,
    generation: u64,
}

impl<H: PoseHistory> CameraNavigator<H> {
    /// Navigator with an empty flight slot over `history`.
    pub fn new(history: H) -> Self {
        Self {
            history,
            in_flight: None,
            generation: 0,
        }
    }

    /// The navigation history.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Whether a "go back" would move the camera.
    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Drop every saved pose.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Id of the live flight, if any.
    pub fn in_flight(&self) -> Option<FlightId> {
        self.in_flight.as_ref().map(|f| f.id)
    }

    /// Whether `id` has settled or been superseded.
    pub fn is_resolved(&self, id: FlightId) -> bool {
        self.in_flight.as_ref().is_none_or(|f| f.id != id)
    }

    /// Save `current` to history, then fly to `target`.
    ///
    /// The snapshot is taken unconditionally and before any tween runs.
    pub fn animate_to_target<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        sink: &mut dyn TweenSink,
        current: CameraPose,
        target: CameraPose,
        tuning: &AnimationTuning,
    ) -> FlightId {
        self.history.save(current);
        self.fly(animator, sink, current, target, tuning)
    }

    /// Fly back to the most recent saved pose.
    ///
    /// Returns `None` without touching anything when the history is empty.
    /// Unlike every other move, the pose being left is not saved: saving it
    /// would let two go-backs swap the same pair of poses forever, while
    /// skipping it lets repeated calls walk the history down to empty.
    pub fn go_back<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        sink: &mut dyn TweenSink,
        current: CameraPose,
        tuning: &AnimationTuning,
    ) -> Option<FlightId> {
        let previous = self.history.pop()?;
        Some(self.fly(animator, sink, current, previous, tuning))
    }

    /// Fly to the default pose (saving `current` like any other move).
    pub fn reset_to_default<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        sink: &mut dyn TweenSink,
        current: CameraPose,
        default: CameraPose,
        tuning: &AnimationTuning,
    ) -> FlightId {
        self.animate_to_target(animator, sink, current, default, tuning)
    }

    /// Commit the live flight if all of its tweens have resolved.
    ///
    /// Writes the exact target pose into `sink` and frees the flight slot.
    pub fn poll<A: Animator + ?Sized>(
        &mut self,
        animator: &A,
        sink: &mut dyn TweenSink,
    ) -> Option<SettledFlight> {
        if !self.in_flight.as_ref()?.tweens.is_settled(animator) {
            return None;
        }
        let flight = self.in_flight.take()?;
        sink.apply_camera_pose(&flight.target);
        Some(SettledFlight {
            id: flight.id,
            pose: flight.target,
        })
    }

    fn fly<A: Animator + ?Sized>(
        &mut self,
        animator: &mut A,
        sink: &mut dyn TweenSink,
        current: CameraPose,
        target: CameraPose,
        tuning: &AnimationTuning,
    ) -> FlightId {
        if let Some(previous) = self.in_flight.take() {
            previous.tweens.cancel(animator);
            log::debug!("camera flight {:?} superseded", previous.id);
        }

        self.generation += 1;
        let id = FlightId(self.generation);
        let tweens =
            TweenSet::launch(animator, &pose_tracks(current, target), tuning, sink);
        self.in_flight = Some(Flight { id, target, tweens });
        id
    }
}

impl Default for CameraNavigator<BoundedHistory> {
    fn default() -> Self {
        Self::new(BoundedHistory::new())
    }
}

/// The six scalar tracks taking `from` to `to`.
fn pose_tracks(from: CameraPose, to: CameraPose) -> [Track; 6] {
    let track = |channel: fn(Axis) -> Channel, axis: Axis, a: Vec3, b: Vec3| {
        Track::new(channel(axis), axis.get(a), axis.get(b))
    };
    [
        track(Channel::CameraPosition, Axis::X, from.position, to.position),
        track(Channel::CameraPosition, Axis::Y, from.position, to.position),
        track(Channel::CameraPosition, Axis::Z, from.position, to.position),
        track(Channel::CameraTarget, Axis::X, from.target, to.target),
        track(Channel::CameraTarget, Axis::Y, from.target, to.target),
        track(Channel::CameraTarget, Axis::Z, from.target, to.target),
    ]
}

/// Camera position that frames `node` at `distance`, keeping the current
/// viewing direction.
///
/// The direction is the current eye-minus-look-at offset, normalized. When
/// the eye sits exactly on its look-at point (or the offset is not finite)
/// the view direction falls back to +Z.
#[must_use]
pub fn calculate_target_camera_position(
    node_world_position: Vec3,
    camera_position: Vec3,
    look_at: Vec3,
    distance: f32,
) -> Vec3 {
    let direction = (camera_position - look_at).try_normalize().unwrap_or(Vec3::Z);
    node_world_position + direction * distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{EasingFunction, TweenHandle, TweenTimeline};
    use crate::host::{SceneHost, Viewport};

    /// Writes the end value at once, like a backend with no frames.
    #[derive(Default)]
    struct ImmediateAnimator {
        next: u64,
    }

    impl Animator for ImmediateAnimator {
        fn animate(
            &mut self,
            track: Track,
            _tuning: &AnimationTuning,
            sink: &mut dyn TweenSink,
        ) -> TweenHandle {
            sink.apply(track.channel, track.to);
            self.next += 1;
            TweenHandle(self.next)
        }

        fn advance(&mut self, _dt: f32, _sink: &mut dyn TweenSink) {}

        fn is_finished(&self, _handle: TweenHandle) -> bool {
            true
        }

        fn cancel(&mut self, _handle: TweenHandle) {}

        fn active_count(&self) -> usize {
            0
        }
    }

    /// Finishes at once but leaves every field slightly off its end value.
    #[derive(Default)]
    struct DriftingAnimator {
        next: u64,
    }

    impl Animator for DriftingAnimator {
        fn animate(
            &mut self,
            track: Track,
            _tuning: &AnimationTuning,
            sink: &mut dyn TweenSink,
        ) -> TweenHandle {
            sink.apply(track.channel, track.to + 1e-3);
            self.next += 1;
            TweenHandle(self.next)
        }

        fn advance(&mut self, _dt: f32, _sink: &mut dyn TweenSink) {}

        fn is_finished(&self, _handle: TweenHandle) -> bool {
            true
        }

        fn cancel(&mut self, _handle: TweenHandle) {}

        fn active_count(&self) -> usize {
            0
        }
    }

    fn pose(p: [f32; 3], t: [f32; 3]) -> CameraPose {
        CameraPose::new(Vec3::from_array(p), Vec3::from_array(t))
    }

    fn tuning() -> AnimationTuning {
        AnimationTuning::from_secs(0.8, EasingFunction::EaseInOut)
    }

    /// Advance until the live flight settles.
    fn run_to_completion(
        nav: &mut CameraNavigator,
        timeline: &mut TweenTimeline,
        vp: &mut Viewport,
    ) -> SettledFlight {
        for _ in 0..1000 {
            timeline.advance(1.0 / 60.0, vp);
            if let Some(settled) = nav.poll(&*timeline, vp) {
                return settled;
            }
        }
        panic!("flight never settled");
    }

    #[test]
    fn test_animate_to_target_with_immediate_backend() {
        let mut nav = CameraNavigator::default();
        let mut animator = ImmediateAnimator::default();
        let mut vp = Viewport::default();
        let target = pose([10.0, 20.0, 30.0], [5.0, 10.0, 15.0]);

        let id = nav.animate_to_target(
            &mut animator,
            &mut vp,
            CameraPose::DEFAULT,
            target,
            &tuning(),
        );
        let settled = nav.poll(&animator, &mut vp).unwrap();

        assert_eq!(settled.id, id);
        assert_eq!(vp.camera_pose(), Some(target));
        assert_eq!(nav.history().len(), 1);
        assert_eq!(
            nav.history().entries().next().unwrap().pose,
            CameraPose::DEFAULT
        );
    }

    #[test]
    fn test_save_happens_before_resolution() {
        let mut nav = CameraNavigator::default();
        let mut timeline = TweenTimeline::new();
        let mut vp = Viewport::default();

        let _ = nav.animate_to_target(
            &mut timeline,
            &mut vp,
            CameraPose::DEFAULT,
            pose([1.0, 2.0, 3.0], [0.0; 3]),
            &tuning(),
        );

        assert_eq!(nav.history().len(), 1);
        assert!(nav.in_flight().is_some());
        assert!(nav.poll(&timeline, &mut vp).is_none());
    }

    #[test]
    fn test_final_pose_is_exact() {
        let cases = [
            (pose([0.0, 0.0, 300.0], [0.0; 3]), pose([0.1, -7.3, 1e-3], [3.3, 2.2, 1.1])),
            (pose([-123.456, 78.9, 0.001], [1.0, 1.0, 1.0]), pose([1e6, -1e-6, 42.0], [-0.3, 0.7, 9.9])),
            (pose([5.0, 5.0, 5.0], [5.0, 5.0, 5.0]), pose([5.0, 5.0, 5.0], [5.0, 5.0, 5.0])),
        ];

        for (start, target) in cases {
            let mut nav = CameraNavigator::default();
            let mut timeline = TweenTimeline::new();
            let mut vp = Viewport::new(start);
            let _ = nav.animate_to_target(&mut timeline, &mut vp, start, target, &tuning());
            let settled = run_to_completion(&mut nav, &mut timeline, &mut vp);

            assert_eq!(settled.pose, target);
            let camera = vp.camera_pose().unwrap();
            assert_eq!(camera.position.to_array(), target.position.to_array());
            assert_eq!(camera.target.to_array(), target.target.to_array());
        }
    }

    #[test]
    fn test_commit_overwrites_tween_residue() {
        let mut nav = CameraNavigator::default();
        let mut animator = DriftingAnimator::default();
        let mut vp = Viewport::default();
        let target = pose([12.5, -3.0, 40.0], [1.0, 2.0, 3.0]);

        let _ = nav.animate_to_target(
            &mut animator,
            &mut vp,
            CameraPose::DEFAULT,
            target,
            &tuning(),
        );
        assert_ne!(vp.camera_pose(), Some(target));

        let settled = nav.poll(&animator, &mut vp).unwrap();
        assert_eq!(settled.pose, target);
        assert_eq!(vp.camera_pose(), Some(target));
    }

    #[test]
    fn test_go_back_on_empty_history_is_a_no_op() {
        let mut nav = CameraNavigator::default();
        let mut timeline = TweenTimeline::new();
        let mut vp = Viewport::default();
        let before = vp.clone();

        let result = nav.go_back(&mut timeline, &mut vp, CameraPose::DEFAULT, &tuning());

        assert!(result.is_none());
        assert_eq!(vp, before);
        assert!(!timeline.is_animating());
    }

    #[test]
    fn test_go_back_walks_history_until_exhausted() {
        let mut nav = CameraNavigator::default();
        let mut animator = ImmediateAnimator::default();
        let mut vp = Viewport::default();
        let a = pose([1.0, 0.0, 0.0], [0.0; 3]);
        let b = pose([2.0, 0.0, 0.0], [0.0; 3]);

        for target in [a, b] {
            let current = vp.camera_pose().unwrap();
            let _ = nav.animate_to_target(&mut animator, &mut vp, current, target, &tuning());
            let _ = nav.poll(&animator, &mut vp);
        }
        // History now holds [DEFAULT, a]; camera sits at b.
        assert_eq!(nav.history().len(), 2);

        let mut visited = Vec::new();
        let mut calls = 0;
        while nav.can_go_back() {
            calls += 1;
            assert!(calls <= 10, "go back did not terminate");
            let current = vp.camera_pose().unwrap();
            assert!(nav.go_back(&mut animator, &mut vp, current, &tuning()).is_some());
            visited.push(nav.poll(&animator, &mut vp).unwrap().pose);
        }
        assert_eq!(visited, vec![a, CameraPose::DEFAULT]);

        let resting = vp.clone();
        let current = vp.camera_pose().unwrap();
        assert!(nav.go_back(&mut animator, &mut vp, current, &tuning()).is_none());
        assert_eq!(vp, resting);
    }

    #[test]
    fn test_new_flight_supersedes_previous() {
        let mut nav = CameraNavigator::default();
        let mut timeline = TweenTimeline::new();
        let mut vp = Viewport::default();
        let first = pose([100.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
        let second = pose([0.0, -50.0, 20.0], [0.0, -5.0, 0.0]);

        let first_id =
            nav.animate_to_target(&mut timeline, &mut vp, CameraPose::DEFAULT, first, &tuning());
        timeline.advance(0.3, &mut vp);
        assert!(!nav.is_resolved(first_id));

        let current = vp.camera_pose().unwrap();
        let second_id = nav.animate_to_target(&mut timeline, &mut vp, current, second, &tuning());
        assert!(second_id > first_id);
        assert!(nav.is_resolved(first_id));
        assert!(!nav.is_resolved(second_id));
        // Only the second flight's six tweens are live.
        assert_eq!(timeline.active_count(), 6);

        let settled = run_to_completion(&mut nav, &mut timeline, &mut vp);
        assert_eq!(settled.id, second_id);
        assert_eq!(vp.camera_pose(), Some(second));
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn test_reset_to_default_saves_and_flies() {
        let mut nav = CameraNavigator::default();
        let mut animator = ImmediateAnimator::default();
        let start = pose([9.0, 9.0, 9.0], [1.0, 1.0, 1.0]);
        let mut vp = Viewport::new(start);

        let _ = nav.reset_to_default(
            &mut animator,
            &mut vp,
            start,
            CameraPose::DEFAULT,
            &tuning(),
        );
        let _ = nav.poll(&animator, &mut vp);

        assert_eq!(vp.camera_pose(), Some(CameraPose::DEFAULT));
        assert_eq!(nav.history().entries().next().unwrap().pose, start);
    }

    #[test]
    fn test_zero_offset_falls_back_to_plus_z() {
        let result = calculate_target_camera_position(
            Vec3::new(10.0, 20.0, 30.0),
            Vec3::ZERO,
            Vec3::ZERO,
            25.0,
        );
        assert_eq!(result, Vec3::new(10.0, 20.0, 55.0));
    }

    #[test]
    fn test_target_position_keeps_viewing_direction() {
        let result = calculate_target_camera_position(
            Vec3::new(10.0, 20.0, 30.0),
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::ZERO,
            25.0,
        );
        assert!((result - Vec3::new(10.0, 20.0, 55.0)).length() < 1e-4);

        let result = calculate_target_camera_position(
            Vec3::ZERO,
            Vec3::new(3.0, 0.0, 4.0),
            Vec3::ZERO,
            10.0,
        );
        assert!((result - Vec3::new(6.0, 0.0, 8.0)).length() < 1e-5);
    }
}
