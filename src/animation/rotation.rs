//! Idle auto-rotation state.

use std::time::Duration;

/// Default auto-rotation speed in radians per second.
pub const DEFAULT_TARGET_SPEED: f32 = 0.1;
/// Default relaxation rate of the velocity toward its target, per second.
pub const DEFAULT_ACCELERATION: f32 = 0.5;
/// Default idle time before auto-rotation resumes.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_millis(33_333);

/// Auto-rotation flag and the velocity that follows it.
///
/// The velocity never jumps when the flag flips (except on [`halt`]); it
/// relaxes toward `target_speed` or zero on every frame, which gives the
/// spin a soft start and a soft stop.
///
/// [`halt`]: Self::halt
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    /// Whether auto-rotation is requested.
    pub is_auto_rotating: bool,
    /// Current angular velocity about the group's Y axis (rad/s).
    pub rotation_velocity: f32,
    /// Velocity reached while auto-rotating (rad/s).
    pub target_speed: f32,
    /// Fraction of the remaining velocity gap closed per second.
    pub acceleration: f32,
    /// Idle time after an interaction ends before auto-rotation resumes.
    pub inactivity_timeout: Duration,
}

impl RotationState {
    /// Rotation state with explicit tuning, initially stopped.
    #[must_use]
    pub fn new(
        target_speed: f32,
        acceleration: f32,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            is_auto_rotating: false,
            rotation_velocity: 0.0,
            target_speed,
            acceleration,
            inactivity_timeout,
        }
    }

    /// Request auto-rotation; the velocity ramps up over following frames.
    pub fn start_auto_rotation(&mut self) {
        self.is_auto_rotating = true;
    }

    /// Clear the auto-rotation request; the velocity decays over following
    /// frames.
    pub fn stop_auto_rotation(&mut self) {
        self.is_auto_rotating = false;
    }

    /// Clear the request and zero the velocity at once.
    ///
    /// Used before camera flights so the focused node does not drift away
    /// from the computed target while the group spins down.
    pub fn halt(&mut self) {
        self.is_auto_rotating = false;
        self.rotation_velocity = 0.0;
    }

    /// Velocity the state is relaxing toward.
    #[must_use]
    pub fn target_velocity(&self) -> f32 {
        if self.is_auto_rotating {
            self.target_speed
        } else {
            0.0
        }
    }

    /// Relax the velocity toward its target over `delta` seconds.
    ///
    /// The step is capped at the full gap so large frame gaps cannot
    /// overshoot.
    pub fn update_velocity(&mut self, delta: f32) {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let step = (self.acceleration * delta).clamp(0.0, 1.0);
        self.rotation_velocity +=
            (self.target_velocity() - self.rotation_velocity) * step;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(
            DEFAULT_TARGET_SPEED,
            DEFAULT_ACCELERATION,
            DEFAULT_INACTIVITY_TIMEOUT,
        )
    }
}
