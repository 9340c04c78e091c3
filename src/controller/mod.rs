//! Scene controller: routes host events into camera and scene motion.
//!
//! The controller owns the animator, both navigators, the auto-rotation
//! state and the inactivity timer. The host drives it with [`SceneEvent`]s
//! (or the matching `on_*` methods) and one [`tick`](SceneController::tick)
//! per frame, then drains [`SceneNotice`]s to update its own UI.
//!
//! # Rotation phases
//!
//! ```text
//!   Idle ──interaction_end──▶ ArmedForAutoRotate ──timer──▶ AutoRotating
//!    ▲                              │                           │
//!    └──────interaction_start───────┴───────────────────────────┘
//! ```
//!
//! Selecting a node or going back also returns to `Idle`, and zeroes the
//! velocity so the group cannot drift away from the computed camera target.

pub mod event;
pub mod timer;

pub use event::{SceneEvent, SceneNotice};
use serde::Serialize;
pub use timer::InactivityTimer;

use crate::animation::tween::secs_to_duration;
use crate::animation::{AnimationTuning, Animator, RotationState, TweenTimeline};
use crate::camera::{
    calculate_target_camera_position, BoundedHistory, CameraNavigator,
    CameraPose, FlightId, PoseHistory,
};
use crate::host::SceneHost;
use crate::options::Options;
use crate::scene::{Layout, NodeLookup, SceneNavigator};

/// Where the auto-rotation sub-machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPhase {
    /// Not spinning and no timer pending.
    Idle,
    /// Waiting for the inactivity timer.
    ArmedForAutoRotate,
    /// Auto-rotation requested; velocity ramps toward the target speed.
    AutoRotating,
}

/// Orchestrates camera flights, layout transitions and auto-rotation.
#[derive(Debug)]
pub struct SceneController<
    A: Animator = TweenTimeline,
    H: PoseHistory = BoundedHistory,
> {
    animator: A,
    camera: CameraNavigator<H>,
    scene: SceneNavigator,
    rotation: RotationState,
    timer: InactivityTimer,
    tuning: AnimationTuning,
    options: Options,
    layout: Layout,
    /// Layout waiting for the camera reset flight to resolve.
    pending_layout: Option<(Layout, FlightId)>,
    last_go_back_token: Option<u64>,
    notices: Vec<SceneNotice>,
}

impl SceneController {
    /// Controller with the default timeline and a history sized from
    /// `options`.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let history = options.history.build();
        Self::new(TweenTimeline::new(), history, options)
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}

impl<A: Animator, H: PoseHistory> SceneController<A, H> {
    /// Compose a controller from its capabilities.
    pub fn new(animator: A, history: H, options: Options) -> Self {
        Self {
            animator,
            camera: CameraNavigator::new(history),
            scene: SceneNavigator::new(
                options.scene.node_scale,
                options.scene.layouts,
            ),
            rotation: options.rotation.state(),
            timer: InactivityTimer::new(),
            tuning: options.animation.tuning(),
            layout: options.scene.initial_layout,
            options,
            pending_layout: None,
            last_go_back_token: None,
            notices: Vec::new(),
        }
    }

    // -- Accessors --

    /// The animation backend.
    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Camera navigator (and through it, the history).
    pub fn camera(&self) -> &CameraNavigator<H> {
        &self.camera
    }

    /// Scene-group navigator.
    pub fn scene(&self) -> &SceneNavigator {
        &self.scene
    }

    /// Auto-rotation state.
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// The inactivity timer.
    pub fn timer(&self) -> &InactivityTimer {
        &self.timer
    }

    /// Options the controller was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Active layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Layout whose transition is waiting on the camera reset.
    pub fn pending_layout(&self) -> Option<Layout> {
        self.pending_layout.map(|(layout, _)| layout)
    }

    /// Whether "go back" would move the camera.
    pub fn can_go_back(&self) -> bool {
        self.camera.can_go_back()
    }

    /// Current auto-rotation phase.
    pub fn phase(&self) -> RotationPhase {
        if self.rotation.is_auto_rotating {
            RotationPhase::AutoRotating
        } else if self.timer.is_armed() {
            RotationPhase::ArmedForAutoRotate
        } else {
            RotationPhase::Idle
        }
    }

    /// Take every notice queued since the last call.
    pub fn drain_notices(&mut self) -> Vec<SceneNotice> {
        std::mem::take(&mut self.notices)
    }

    // -- Event handling --

    /// Dispatch one host event.
    pub fn handle_event<S: SceneHost>(
        &mut self,
        host: &mut S,
        event: SceneEvent<'_>,
    ) {
        match event {
            SceneEvent::SelectionChanged {
                selected,
                positions,
            } => {
                let _ = self.on_selection_change(host, selected, positions);
            }
            SceneEvent::LayoutChanged(layout) => {
                self.on_layout_change(host, layout);
            }
            SceneEvent::GoBackRequested { token } => {
                let _ = self.on_go_back(host, token);
            }
            SceneEvent::HistoryCleared => self.clear_history(),
            SceneEvent::InteractionStarted => self.on_interaction_start(),
            SceneEvent::InteractionEnded => self.on_interaction_end(),
            SceneEvent::Frame { delta } => self.tick(host, delta),
        }
    }

    /// The user grabbed the orbit controls: stop spinning and forget any
    /// pending resume.
    pub fn on_interaction_start(&mut self) {
        self.rotation.stop_auto_rotation();
        self.timer.cancel();
    }

    /// The user let go: start counting idle time.
    pub fn on_interaction_end(&mut self) {
        self.rearm_timer();
    }

    /// Fly the camera to frame the newly selected node.
    ///
    /// A cleared selection, a detached camera or group, or a node without a
    /// known position only re-arms the idle timer. Returns the flight id
    /// when a flight started.
    pub fn on_selection_change<S: SceneHost>(
        &mut self,
        host: &mut S,
        selected: Option<&str>,
        positions: Option<&dyn NodeLookup>,
    ) -> Option<FlightId> {
        let Some(node_id) = selected else {
            self.rearm_timer();
            return None;
        };
        let (Some(camera), Some(group)) =
            (host.camera_pose(), host.scene_transform())
        else {
            log::warn!("Cannot focus {node_id}: camera or scene group not attached");
            self.rearm_timer();
            return None;
        };
        let Some(local) = positions.and_then(|p| p.local_position(node_id))
        else {
            log::warn!("No node position found for {node_id}");
            self.rearm_timer();
            return None;
        };

        self.rotation.halt();
        self.timer.cancel();

        let node_world = self.scene.node_world_position(local, &group);
        let eye = calculate_target_camera_position(
            node_world,
            camera.position,
            camera.target,
            self.options.camera.focus_distance,
        );
        log::debug!("Focusing {node_id} at {node_world}");

        let id = self.camera.animate_to_target(
            &mut self.animator,
            host,
            camera,
            CameraPose::new(eye, node_world),
            &self.tuning,
        );
        self.push_history_notice();
        self.settle(host);
        Some(id)
    }

    /// Switch layouts: reset the camera first, then move the group once the
    /// reset flight has resolved.
    pub fn on_layout_change<S: SceneHost>(
        &mut self,
        host: &mut S,
        layout: Layout,
    ) {
        self.layout = layout;
        let Some(camera) = host.camera_pose() else {
            log::warn!("Layout change to {layout} ignored: camera not attached");
            return;
        };

        let flight = self.camera.reset_to_default(
            &mut self.animator,
            host,
            camera,
            self.options.camera.default_pose(),
            &self.tuning,
        );
        if let Some((previous, _)) = self.pending_layout.replace((layout, flight)) {
            log::debug!("Pending layout {previous} replaced by {layout}");
        }
        self.push_history_notice();
        self.settle(host);
    }

    /// Return to the previous camera pose.
    ///
    /// A token equal to the last one handled is a repeated delivery of the
    /// same trigger and is ignored. Returns whether a flight started.
    pub fn on_go_back<S: SceneHost>(&mut self, host: &mut S, token: u64) -> bool {
        if self.last_go_back_token == Some(token) {
            return false;
        }
        self.last_go_back_token = Some(token);

        self.rotation.halt();
        self.timer.cancel();

        let Some(camera) = host.camera_pose() else {
            log::warn!("Go back ignored: camera not attached");
            return false;
        };
        if self
            .camera
            .go_back(&mut self.animator, host, camera, &self.tuning)
            .is_none()
        {
            log::debug!("Go back requested with empty history");
            self.notices.push(SceneNotice::GoBackUnavailable);
            return false;
        }

        self.notices.push(SceneNotice::SelectionCleared);
        self.push_history_notice();
        self.settle(host);
        true
    }

    /// Forget every saved camera pose. A flight in progress keeps going.
    pub fn clear_history(&mut self) {
        self.camera.clear_history();
        self.push_history_notice();
    }

    /// Advance one frame of `delta` seconds.
    pub fn tick<S: SceneHost>(&mut self, host: &mut S, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

        self.animator.advance(delta, host);
        self.settle(host);

        if self.timer.advance(secs_to_duration(delta))
            && self.options.rotation.resume_on_idle
        {
            log::debug!("Inactivity timeout reached; resuming auto-rotation");
            self.rotation.start_auto_rotation();
            self.notices.push(SceneNotice::AutoRotationResumed);
        }

        self.rotation.update_velocity(delta);
        if let Some(group) = host.scene_transform() {
            let _ = self.scene.update_rotation(
                host,
                &group,
                self.rotation.rotation_velocity,
                delta,
                self.layout,
            );
        }

        host.update_controls();
    }

    /// Release the pending timer. Safe to call more than once.
    pub fn cleanup(&mut self) {
        self.timer.cancel();
    }

    // -- Internals --

    fn rearm_timer(&mut self) {
        self.timer.arm(self.rotation.inactivity_timeout);
    }

    fn push_history_notice(&mut self) {
        self.notices.push(SceneNotice::HistoryChanged {
            can_go_back: self.camera.can_go_back(),
            depth: self.camera.history().len(),
        });
    }

    /// Commit resolved moves and start a layout transition whose camera
    /// reset has resolved.
    fn settle<S: SceneHost>(&mut self, host: &mut S) {
        if let Some(settled) = self.camera.poll(&self.animator, host) {
            self.notices
                .push(SceneNotice::CameraSettled { pose: settled.pose });
        }

        if let Some((layout, flight)) = self.pending_layout {
            if self.camera.is_resolved(flight) {
                self.pending_layout = None;
                self.start_layout_transition(host, layout);
            }
        }

        if let Some(settled) = self.scene.poll(&self.animator, host) {
            self.notices.push(SceneNotice::LayoutSettled {
                layout: settled.layout,
            });
        }
    }

    fn start_layout_transition<S: SceneHost>(
        &mut self,
        host: &mut S,
        layout: Layout,
    ) {
        let Some(group) = host.scene_transform() else {
            log::warn!("Layout transition to {layout} skipped: scene group not attached");
            return;
        };
        let _ = self.scene.animate_layout_change(
            &mut self.animator,
            host,
            &group,
            layout,
            &self.tuning,
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::host::Viewport;
    use crate::scene::{NodeLocalPosition, NodePositions, SceneTransform};

    const FRAME: f32 = 1.0 / 60.0;

    fn options_with_timeout(ms: u64) -> Options {
        let mut options = Options::default();
        options.rotation.inactivity_timeout_ms = ms;
        options
    }

    fn positions() -> NodePositions {
        let mut map = NodePositions::default();
        let _ = map.insert("center".to_owned(), NodeLocalPosition::new(0.5, 0.5, 0.5));
        let _ = map.insert("corner".to_owned(), NodeLocalPosition::new(1.0, 1.0, 1.0));
        map
    }

    /// Tick until nothing is animating or pending.
    fn run_until_idle(ctrl: &mut SceneController, vp: &mut Viewport) {
        for _ in 0..1000 {
            ctrl.tick(vp, FRAME);
            if !ctrl.animator().is_animating() && ctrl.pending_layout().is_none() {
                return;
            }
        }
        panic!("animations never settled");
    }

    #[test]
    fn test_interaction_start_then_end_leaves_one_timer() {
        let mut ctrl = SceneController::with_options(options_with_timeout(1000));
        let mut vp = Viewport::default();

        ctrl.on_interaction_start();
        assert_eq!(ctrl.phase(), RotationPhase::Idle);
        ctrl.on_interaction_end();
        ctrl.tick(&mut vp, 0.5);
        // A second end re-arms rather than stacking.
        ctrl.on_interaction_end();
        assert_eq!(ctrl.phase(), RotationPhase::ArmedForAutoRotate);
        assert_eq!(ctrl.timer().remaining(), Some(std::time::Duration::from_secs(1)));

        for _ in 0..3 {
            ctrl.tick(&mut vp, 0.25);
        }
        assert_eq!(ctrl.phase(), RotationPhase::ArmedForAutoRotate);
        ctrl.tick(&mut vp, 0.25);
        assert_eq!(ctrl.phase(), RotationPhase::AutoRotating);

        let resumed = ctrl
            .drain_notices()
            .into_iter()
            .filter(|n| *n == SceneNotice::AutoRotationResumed)
            .count();
        assert_eq!(resumed, 1);
    }

    #[test]
    fn test_timer_resumes_rotation_and_spins_group() {
        let mut ctrl = SceneController::with_options(options_with_timeout(100));
        let mut vp = Viewport::default();

        ctrl.on_interaction_end();
        for _ in 0..120 {
            ctrl.tick(&mut vp, FRAME);
        }
        assert!(ctrl.rotation().is_auto_rotating);
        assert!(ctrl.rotation().rotation_velocity > 0.0);
        assert!(vp.group.unwrap().rotation.y > 0.0);
        assert!(vp.controls_updates >= 120);
    }

    #[test]
    fn test_timer_without_resume_stays_idle() {
        let mut options = options_with_timeout(100);
        options.rotation.resume_on_idle = false;
        let mut ctrl = SceneController::with_options(options);
        let mut vp = Viewport::default();

        ctrl.on_interaction_end();
        for _ in 0..30 {
            ctrl.tick(&mut vp, FRAME);
        }
        assert_eq!(ctrl.phase(), RotationPhase::Idle);
        assert_eq!(vp.group.unwrap().rotation.y, 0.0);
    }

    #[test]
    fn test_grid_layout_does_not_spin() {
        let mut options = options_with_timeout(100);
        options.scene.initial_layout = Layout::Grid;
        let mut ctrl = SceneController::with_options(options);
        let mut vp = Viewport::default();

        ctrl.on_interaction_end();
        for _ in 0..120 {
            ctrl.tick(&mut vp, FRAME);
        }
        assert!(ctrl.rotation().rotation_velocity > 0.0);
        assert_eq!(vp.group.unwrap().rotation.y, 0.0);
    }

    #[test]
    fn test_interaction_start_lets_velocity_decay() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        ctrl.rotation.start_auto_rotation();
        ctrl.rotation.rotation_velocity = 0.1;

        ctrl.on_interaction_start();
        assert!(!ctrl.rotation().is_auto_rotating);
        assert_eq!(ctrl.rotation().rotation_velocity, 0.1);

        ctrl.tick(&mut vp, FRAME);
        let v = ctrl.rotation().rotation_velocity;
        assert!(v > 0.0 && v < 0.1);
    }

    #[test]
    fn test_selection_flies_camera_to_node() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        let nodes = positions();

        ctrl.rotation.start_auto_rotation();
        ctrl.rotation.rotation_velocity = 0.1;
        let flight = ctrl.on_selection_change(&mut vp, Some("center"), Some(&nodes));
        assert!(flight.is_some());
        assert_eq!(ctrl.phase(), RotationPhase::Idle);
        assert_eq!(ctrl.rotation().rotation_velocity, 0.0);
        // Saved before the move resolved.
        assert_eq!(ctrl.camera().history().len(), 1);

        run_until_idle(&mut ctrl, &mut vp);
        let expected = CameraPose::new(Vec3::new(0.0, 0.0, 25.0), Vec3::ZERO);
        assert_eq!(vp.camera, Some(expected));

        let notices = ctrl.drain_notices();
        assert_eq!(
            notices,
            vec![
                SceneNotice::HistoryChanged { can_go_back: true, depth: 1 },
                SceneNotice::CameraSettled { pose: expected },
            ]
        );
    }

    #[test]
    fn test_selection_accounts_for_group_rotation() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        vp.group = Some(SceneTransform::new(
            Vec3::new(0.0, 0.0, -300.0),
            Vec3::new(0.0, std::f32::consts::PI, 0.0),
        ));
        let nodes = positions();

        let _ = ctrl.on_selection_change(&mut vp, Some("corner"), Some(&nodes));
        run_until_idle(&mut ctrl, &mut vp);

        let camera = vp.camera.unwrap();
        // Half turn mirrors x and z: (300, 300, 300) -> (-300, 300, -300 - 300).
        assert!((camera.target - Vec3::new(-300.0, 300.0, -600.0)).length() < 1e-2);
        // The eye keeps the original viewing direction (+Z from the old target).
        let offset = camera.position - camera.target;
        assert!((offset - Vec3::new(0.0, 0.0, 25.0)).length() < 1e-3);
    }

    #[test]
    fn test_missing_data_only_rearms_timer() {
        let mut ctrl = SceneController::default();
        let nodes = positions();

        let mut vp = Viewport::default();
        let before = vp.clone();
        assert!(ctrl.on_selection_change(&mut vp, None, Some(&nodes)).is_none());
        assert!(ctrl.on_selection_change(&mut vp, Some("missing"), Some(&nodes)).is_none());
        assert!(ctrl.on_selection_change(&mut vp, Some("center"), None).is_none());
        assert_eq!(vp, before);

        let mut detached = Viewport::detached();
        assert!(ctrl
            .on_selection_change(&mut detached, Some("center"), Some(&nodes))
            .is_none());

        assert_eq!(ctrl.phase(), RotationPhase::ArmedForAutoRotate);
        assert!(!ctrl.can_go_back());
        assert!(ctrl.drain_notices().is_empty());
    }

    #[test]
    fn test_layout_transition_waits_for_camera_reset() {
        let mut ctrl = SceneController::default();
        let start = CameraPose::new(Vec3::new(50.0, 0.0, 100.0), Vec3::new(10.0, 0.0, 0.0));
        let mut vp = Viewport::new(start);
        vp.group = Some(SceneTransform::new(Vec3::ZERO, Vec3::new(0.0, 0.7, 0.0)));

        ctrl.on_layout_change(&mut vp, Layout::Grid);
        assert_eq!(ctrl.layout(), Layout::Grid);
        assert_eq!(ctrl.pending_layout(), Some(Layout::Grid));

        let mut camera_done = false;
        for _ in 0..1000 {
            ctrl.tick(&mut vp, FRAME);
            let notices = ctrl.drain_notices();
            if notices.iter().any(|n| matches!(n, SceneNotice::CameraSettled { .. })) {
                camera_done = true;
                break;
            }
            // Group stays put while the camera is still resetting.
            assert!(ctrl.scene().in_flight().is_none());
            assert_eq!(vp.group.unwrap().position.z, 0.0);
        }
        assert!(camera_done);
        assert_eq!(vp.camera, Some(CameraPose::DEFAULT));
        assert!(ctrl.scene().in_flight().is_some());

        run_until_idle(&mut ctrl, &mut vp);
        let notices = ctrl.drain_notices();
        assert_eq!(
            notices,
            vec![SceneNotice::LayoutSettled { layout: Layout::Grid }]
        );
        let group = vp.group.unwrap();
        assert_eq!(group.position.z, 150.0);
        assert_eq!(group.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_superseded_reset_still_runs_layout() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::new(CameraPose::new(Vec3::new(0.0, 0.0, 80.0), Vec3::ZERO));
        let nodes = positions();

        ctrl.on_layout_change(&mut vp, Layout::Cluster3d);
        ctrl.tick(&mut vp, FRAME);
        // A selection supersedes the reset flight mid-way.
        let _ = ctrl.on_selection_change(&mut vp, Some("center"), Some(&nodes));
        assert!(ctrl.pending_layout().is_none());
        assert!(ctrl.scene().in_flight().is_some());

        run_until_idle(&mut ctrl, &mut vp);
        assert_eq!(vp.group.unwrap().position.z, -300.0);
    }

    #[test]
    fn test_instant_layout_change_completes_in_call() {
        let mut options = Options::default();
        options.animation.duration_secs = 0.0;
        let mut ctrl = SceneController::with_options(options);
        let mut vp = Viewport::new(CameraPose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE));

        ctrl.on_layout_change(&mut vp, Layout::Cluster3d);
        assert_eq!(vp.camera, Some(CameraPose::DEFAULT));
        assert_eq!(vp.group.unwrap().position.z, -300.0);
        assert!(ctrl.pending_layout().is_none());
    }

    #[test]
    fn test_layout_change_without_camera_is_ignored() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::detached();
        ctrl.on_layout_change(&mut vp, Layout::Grid);
        assert_eq!(ctrl.layout(), Layout::Grid);
        assert!(ctrl.pending_layout().is_none());
        assert!(!ctrl.can_go_back());
    }

    #[test]
    fn test_go_back_ignores_repeated_token() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        let nodes = positions();

        let _ = ctrl.on_selection_change(&mut vp, Some("center"), Some(&nodes));
        run_until_idle(&mut ctrl, &mut vp);
        let _ = ctrl.drain_notices();

        assert!(ctrl.on_go_back(&mut vp, 1));
        assert!(!ctrl.on_go_back(&mut vp, 1));
        run_until_idle(&mut ctrl, &mut vp);
        assert_eq!(vp.camera, Some(CameraPose::DEFAULT));

        let notices = ctrl.drain_notices();
        assert_eq!(
            notices,
            vec![
                SceneNotice::SelectionCleared,
                SceneNotice::HistoryChanged { can_go_back: false, depth: 0 },
                SceneNotice::CameraSettled { pose: CameraPose::DEFAULT },
            ]
        );

        // Fresh token, empty history.
        assert!(!ctrl.on_go_back(&mut vp, 2));
        assert_eq!(ctrl.drain_notices(), vec![SceneNotice::GoBackUnavailable]);
    }

    #[test]
    fn test_go_back_halts_rotation() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        ctrl.on_interaction_end();
        ctrl.rotation.start_auto_rotation();
        ctrl.rotation.rotation_velocity = 0.05;

        let _ = ctrl.on_go_back(&mut vp, 7);
        assert_eq!(ctrl.phase(), RotationPhase::Idle);
        assert_eq!(ctrl.rotation().rotation_velocity, 0.0);
    }

    #[test]
    fn test_handle_event_dispatches() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        let nodes = positions();

        ctrl.handle_event(&mut vp, SceneEvent::InteractionStarted);
        ctrl.handle_event(&mut vp, SceneEvent::InteractionEnded);
        assert_eq!(ctrl.phase(), RotationPhase::ArmedForAutoRotate);

        ctrl.handle_event(
            &mut vp,
            SceneEvent::SelectionChanged {
                selected: Some("center"),
                positions: Some(&nodes),
            },
        );
        assert!(ctrl.camera().in_flight().is_some());

        ctrl.handle_event(&mut vp, SceneEvent::Frame { delta: FRAME });
        assert_eq!(vp.controls_updates, 1);

        ctrl.handle_event(&mut vp, SceneEvent::LayoutChanged(Layout::Grid));
        assert_eq!(ctrl.pending_layout(), Some(Layout::Grid));

        ctrl.handle_event(&mut vp, SceneEvent::GoBackRequested { token: 1 });
        assert!(ctrl.pending_layout().is_none());
    }

    #[test]
    fn test_clear_history_empties_stack_and_keeps_flight() {
        let mut ctrl = SceneController::default();
        let mut vp = Viewport::default();
        let nodes = positions();

        let _ = ctrl.on_selection_change(&mut vp, Some("center"), Some(&nodes));
        run_until_idle(&mut ctrl, &mut vp);
        let _ = ctrl.on_selection_change(&mut vp, Some("corner"), Some(&nodes));
        assert_eq!(ctrl.camera().history().len(), 2);
        let _ = ctrl.drain_notices();

        ctrl.handle_event(&mut vp, SceneEvent::HistoryCleared);
        assert!(!ctrl.can_go_back());
        assert_eq!(ctrl.camera().history().len(), 0);
        assert_eq!(
            ctrl.drain_notices(),
            vec![SceneNotice::HistoryChanged { can_go_back: false, depth: 0 }]
        );

        // The flight to "corner" still lands.
        assert!(ctrl.camera().in_flight().is_some());
        run_until_idle(&mut ctrl, &mut vp);
        assert!(ctrl.camera().in_flight().is_none());
        assert_ne!(vp.camera, Some(CameraPose::DEFAULT));

        assert!(!ctrl.on_go_back(&mut vp, 1));
        assert_eq!(
            ctrl.drain_notices().last(),
            Some(&SceneNotice::GoBackUnavailable)
        );
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let mut ctrl = SceneController::default();
        ctrl.on_interaction_end();
        ctrl.cleanup();
        ctrl.cleanup();
        assert!(!ctrl.timer().is_armed());
        assert_eq!(ctrl.phase(), RotationPhase::Idle);
    }
}
