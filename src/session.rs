//! Scripted sessions: replay host events against an in-memory viewport.
//!
//! A script lists node positions and a sequence of steps (select, layout,
//! go back, interactions, waits). The runner feeds them to a
//! [`SceneController`] at a fixed frame rate and reports where the camera
//! and scene group ended up, plus every notice the controller emitted.
//!
//! ```toml
//! frame_rate = 60
//!
//! [nodes]
//! beach = [0.2, 0.8, 0.4]
//! forest = [0.7, 0.3]
//!
//! [[steps]]
//! kind = "select"
//! node = "beach"
//!
//! [[steps]]
//! kind = "wait"
//! seconds = 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::Animator;
use crate::camera::{CameraPose, PoseHistory};
use crate::controller::{RotationPhase, SceneController, SceneNotice};
use crate::error::NavError;
use crate::host::Viewport;
use crate::options::Options;
use crate::scene::{Layout, NodePositions, SceneTransform};

/// Default simulated frame rate.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on frames spent letting animations finish after the last
/// step.
const MAX_SETTLE_FRAMES: u64 = 10_000;

/// One scripted host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Select a node by id.
    Select {
        /// Node id.
        node: String,
    },
    /// Clear the selection.
    Deselect,
    /// Switch layout.
    Layout {
        /// Layout to show.
        layout: Layout,
    },
    /// Press "go back".
    GoBack,
    /// Forget the saved camera poses.
    ClearHistory,
    /// Grab the orbit controls.
    InteractionStart,
    /// Release the orbit controls.
    InteractionEnd,
    /// Let frames run.
    Wait {
        /// Simulated seconds to run.
        seconds: f32,
    },
}

/// A replayable sequence of host events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionScript {
    /// Simulated frames per second.
    pub frame_rate: f32,
    /// Camera pose at the start; the configured home pose when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_camera: Option<CameraPose>,
    /// Normalized node positions by id.
    pub nodes: NodePositions,
    /// Steps, in order.
    pub steps: Vec<Step>,
}

impl Default for SessionScript {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            initial_camera: None,
            nodes: NodePositions::default(),
            steps: Vec::new(),
        }
    }
}

/// A notice tagged with the frame it was drained on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoticeRecord {
    /// Frames elapsed when the notice was collected.
    pub frame: u64,
    /// The notice.
    #[serde(flatten)]
    pub notice: SceneNotice,
}

/// Outcome of a replayed session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    /// Frames simulated, including the settle tail.
    pub frames: u64,
    /// Simulated seconds.
    pub elapsed_secs: f32,
    /// Final camera pose.
    pub camera: Option<CameraPose>,
    /// Final scene-group transform.
    pub group: Option<SceneTransform>,
    /// Active layout at the end.
    pub layout: Layout,
    /// Auto-rotation phase at the end.
    pub phase: RotationPhase,
    /// Saved poses left in the history.
    pub history_depth: usize,
    /// Every notice, in order.
    pub notices: Vec<NoticeRecord>,
}

impl SessionScript {
    /// Parse a JSON script.
    pub fn from_json(content: &str) -> Result<Self, NavError> {
        let script: Self = serde_json::from_str(content)
            .map_err(|e| NavError::ScriptParse(e.to_string()))?;
        script.validate()
    }

    /// Parse a TOML script.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| NavError::ScriptParse(e.to_string()))?;
        script.validate()
    }

    /// Load a script, picking the format from the file extension
    /// (`.json` or `.toml`).
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            other => Err(NavError::ScriptParse(format!(
                "unsupported script extension {other:?} for {}",
                path.display()
            ))),
        }
    }

    fn validate(self) -> Result<Self, NavError> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(NavError::ScriptParse(format!(
                "frame_rate must be positive, got {}",
                self.frame_rate
            )));
        }
        if let Some(seconds) = self.steps.iter().find_map(|step| match step {
            Step::Wait { seconds } if !seconds.is_finite() || *seconds < 0.0 => {
                Some(*seconds)
            }
            _ => None,
        }) {
            return Err(NavError::ScriptParse(format!(
                "wait must be a non-negative number of seconds, got {seconds}"
            )));
        }
        Ok(self)
    }

    /// Replay the script with `options`.
    #[must_use]
    pub fn run(&self, options: &Options) -> SessionReport {
        let camera = self
            .initial_camera
            .unwrap_or_else(|| options.camera.default_pose());
        let mut runner = Runner {
            controller: SceneController::with_options(options.clone()),
            viewport: Viewport::new(camera),
            frame_rate: self.frame_rate,
            delta: 1.0 / self.frame_rate,
            frames: 0,
            go_back_token: 0,
            notices: Vec::new(),
        };

        for step in &self.steps {
            runner.apply(step, &self.nodes);
        }
        runner.settle();
        runner.controller.cleanup();
        runner.report()
    }
}

struct Runner {
    controller: SceneController,
    viewport: Viewport,
    frame_rate: f32,
    delta: f32,
    frames: u64,
    go_back_token: u64,
    notices: Vec<NoticeRecord>,
}

impl Runner {
    fn apply(&mut self, step: &Step, nodes: &NodePositions) {
        log::debug!("frame {}: {step:?}", self.frames);
        let vp = &mut self.viewport;
        match step {
            Step::Select { node } => {
                let _ = self.controller.on_selection_change(
                    vp,
                    Some(node.as_str()),
                    Some(nodes),
                );
            }
            Step::Deselect => {
                let _ = self.controller.on_selection_change(vp, None, Some(nodes));
            }
            Step::Layout { layout } => self.controller.on_layout_change(vp, *layout),
            Step::GoBack => {
                self.go_back_token += 1;
                let _ = self.controller.on_go_back(vp, self.go_back_token);
            }
            Step::ClearHistory => self.controller.clear_history(),
            Step::InteractionStart => self.controller.on_interaction_start(),
            Step::InteractionEnd => self.controller.on_interaction_end(),
            Step::Wait { seconds } => {
                let frames = (seconds * self.frame_rate).ceil() as u64;
                for _ in 0..frames {
                    self.frame();
                }
            }
        }
        self.collect();
    }

    fn frame(&mut self) {
        self.controller.tick(&mut self.viewport, self.delta);
        self.frames += 1;
        self.collect();
    }

    /// Run frames until no tween or layout is pending.
    fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.controller.animator().is_animating()
                && self.controller.pending_layout().is_none()
            {
                return;
            }
            self.frame();
        }
        log::warn!("Session did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    fn collect(&mut self) {
        let frame = self.frames;
        self.notices.extend(
            self.controller
                .drain_notices()
                .into_iter()
                .map(|notice| NoticeRecord { frame, notice }),
        );
    }

    fn report(self) -> SessionReport {
        SessionReport {
            frames: self.frames,
            elapsed_secs: self.frames as f32 * self.delta,
            camera: self.viewport.camera,
            group: self.viewport.group,
            layout: self.controller.layout(),
            phase: self.controller.phase(),
            history_depth: self.controller.camera().history().len(),
            notices: self.notices,
        }
    }
}
