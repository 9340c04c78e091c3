//! Events the host feeds in and notices the controller hands back.

use serde::Serialize;

use crate::camera::CameraPose;
use crate::scene::{Layout, NodeLookup};

/// Input to [`SceneController::handle_event`](super::SceneController::handle_event).
#[derive(Clone, Copy)]
pub enum SceneEvent<'a> {
    /// The selected node changed (or was cleared).
    SelectionChanged {
        /// Id of the newly selected node.
        selected: Option<&'a str>,
        /// Local positions of the nodes currently in the scene.
        positions: Option<&'a dyn NodeLookup>,
    },
    /// The user picked a layout.
    LayoutChanged(Layout),
    /// The "go back" trigger fired; repeated tokens are ignored.
    GoBackRequested {
        /// Monotonic trigger counter from the host.
        token: u64,
    },
    /// The host asked to forget every saved camera pose.
    HistoryCleared,
    /// Pointer or touch interaction with the orbit controls began.
    InteractionStarted,
    /// The interaction ended.
    InteractionEnded,
    /// A frame elapsed.
    Frame {
        /// Seconds since the previous frame.
        delta: f32,
    },
}

impl std::fmt::Debug for SceneEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectionChanged {
                selected,
                positions,
            } => f
                .debug_struct("SelectionChanged")
                .field("selected", selected)
                .field("has_positions", &positions.is_some())
                .finish(),
            Self::LayoutChanged(layout) => {
                f.debug_tuple("LayoutChanged").field(layout).finish()
            }
            Self::GoBackRequested { token } => f
                .debug_struct("GoBackRequested")
                .field("token", token)
                .finish(),
            Self::HistoryCleared => f.write_str("HistoryCleared"),
            Self::InteractionStarted => f.write_str("InteractionStarted"),
            Self::InteractionEnded => f.write_str("InteractionEnded"),
            Self::Frame { delta } => {
                f.debug_struct("Frame").field("delta", delta).finish()
            }
        }
    }
}

/// Something the host may want to react to, queued by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNotice {
    /// A camera flight committed its exact pose.
    CameraSettled {
        /// The committed pose.
        pose: CameraPose,
    },
    /// A layout transition committed.
    LayoutSettled {
        /// Layout now shown.
        layout: Layout,
    },
    /// The history stack grew or shrank.
    HistoryChanged {
        /// Whether "go back" would move the camera.
        can_go_back: bool,
        /// Number of saved poses.
        depth: usize,
    },
    /// The host should clear its selected node (a go-back left it).
    SelectionCleared,
    /// A go-back was requested with nothing to go back to.
    GoBackUnavailable,
    /// The idle timer fired and the group started spinning again.
    AutoRotationResumed,
}
