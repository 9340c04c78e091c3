//! Single-slot inactivity timer.

use std::time::Duration;

/// One-shot countdown advanced by frame deltas.
///
/// There is only ever one pending deadline: arming replaces whatever was
/// armed before, so an interaction-end burst never stacks timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InactivityTimer {
    remaining: Option<Duration>,
}

impl InactivityTimer {
    /// Disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { remaining: None }
    }

    /// Start (or restart) the countdown.
    pub fn arm(&mut self, timeout: Duration) {
        self.remaining = Some(timeout);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the timer fires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Count down by `delta`. Returns `true` exactly once, on the frame the
    /// deadline is reached, and disarms itself.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        match remaining.checked_sub(delta) {
            Some(left) if !left.is_zero() => {
                self.remaining = Some(left);
                false
            }
            _ => {
                self.remaining = None;
                true
            }
        }
    }
}
