//! Camera poses, navigation history and camera flights.
//!
//! Flights move the host camera between poses with eased tweens; every move
//! records the pose it leaves so the user can retrace their steps.

/// Camera pose value type.
pub mod core;
/// Bounded LIFO history of camera poses.
pub mod history;
/// Flight planning and execution.
pub mod navigator;

pub use self::core::CameraPose;
pub use history::{BoundedHistory, PoseHistory};
pub use navigator::{
    calculate_target_camera_position, CameraNavigator, FlightId, SettledFlight,
};
