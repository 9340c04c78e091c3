//! Animation system for camera flights, layout transitions and auto-rotation.

pub mod easing;
pub mod rotation;
pub mod timeline;
pub mod tween;

pub use easing::EasingFunction;
pub use rotation::RotationState;
pub use timeline::TweenTimeline;
pub use tween::{AnimationTuning, Animator, Track, TweenHandle, TweenSet};
