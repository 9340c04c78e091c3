//! Scalar tweens and the animation capability trait.
//!
//! A tween moves one host field ([`Channel`]) from a start value to an end
//! value over a duration. Callers that drive several fields at once group
//! the handles in a [`TweenSet`] and wait for the whole set to settle.

use std::time::Duration;

use super::easing::EasingFunction;
use crate::host::{Channel, TweenSink};

/// Default tween duration in seconds.
pub const DEFAULT_TWEEN_SECS: f32 = 0.8;

/// Duration and easing for one animated move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTuning {
    /// How long the move takes. Zero resolves immediately.
    pub duration: Duration,
    /// Easing curve applied to normalized progress.
    pub easing: EasingFunction,
}

impl AnimationTuning {
    /// Tuning from a duration in seconds. Negative or NaN durations clamp
    /// to zero.
    #[must_use]
    pub fn from_secs(secs: f32, easing: EasingFunction) -> Self {
        Self {
            duration: secs_to_duration(secs),
            easing,
        }
    }

    /// Tuning that completes within the call that starts it.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: EasingFunction::Linear,
        }
    }
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self::from_secs(DEFAULT_TWEEN_SECS, EasingFunction::DEFAULT)
    }
}

/// Convert seconds to a `Duration`, mapping negative, NaN and overflowing
/// inputs to zero.
#[must_use]
pub fn secs_to_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::ZERO)
}

/// Opaque id of a tween started by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenHandle(pub(crate) u64);

/// One field to animate in a [`TweenSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Host field driven by the tween.
    pub channel: Channel,
    /// Start value.
    pub from: f32,
    /// End value.
    pub to: f32,
}

impl Track {
    /// Track moving `channel` from `from` to `to`.
    #[must_use]
    pub const fn new(channel: Channel, from: f32, to: f32) -> Self {
        Self { channel, from, to }
    }
}

/// Animation capability: tween a scalar from A to B over time.
///
/// Values reach the host only through the [`TweenSink`] passed to
/// [`animate`](Self::animate) and [`advance`](Self::advance). A tween is
/// resolved once it reaches its end value or is cancelled; both report
/// `true` from [`is_finished`](Self::is_finished).
pub trait Animator {
    /// Start a tween. A zero duration writes `to` into `sink` before
    /// returning and yields an already-finished handle.
    fn animate(
        &mut self,
        track: Track,
        tuning: &AnimationTuning,
        sink: &mut dyn TweenSink,
    ) -> TweenHandle;

    /// Step every live tween forward by `dt` seconds, writing the new values
    /// into `sink`.
    fn advance(&mut self, dt: f32, sink: &mut dyn TweenSink);

    /// Whether the tween has finished or been cancelled.
    fn is_finished(&self, handle: TweenHandle) -> bool;

    /// Stop a tween without writing anything further.
    fn cancel(&mut self, handle: TweenHandle);

    /// Number of live tweens.
    fn active_count(&self) -> usize;

    /// Whether any tween is live.
    fn is_animating(&self) -> bool {
        self.active_count() > 0
    }
}

/// Handles of tweens launched together; settles once all of them resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TweenSet {
    handles: Vec<TweenHandle>,
}

impl TweenSet {
    /// Launch one tween per track with shared tuning.
    pub fn launch<A: Animator + ?Sized>(
        animator: &mut A,
        tracks: &[Track],
        tuning: &AnimationTuning,
        sink: &mut dyn TweenSink,
    ) -> Self {
        let handles = tracks
            .iter()
            .map(|track| animator.animate(*track, tuning, sink))
            .collect();
        Self { handles }
    }

    /// Whether every tween in the set has resolved.
    pub fn is_settled<A: Animator + ?Sized>(&self, animator: &A) -> bool {
        self.handles.iter().all(|h| animator.is_finished(*h))
    }

    /// Cancel every tween in the set.
    pub fn cancel<A: Animator + ?Sized>(&self, animator: &mut A) {
        for handle in &self.handles {
            animator.cancel(*handle);
        }
    }
}
