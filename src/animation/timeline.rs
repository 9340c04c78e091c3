//! Frame-driven tween timeline.
//!
//! The timeline holds every live tween and advances them together once per
//! frame. Tweens are few (six per camera flight, four per layout change), so
//! lookups are linear scans over a small vector.

use super::easing::EasingFunction;
use super::tween::{AnimationTuning, Animator, Track, TweenHandle};
use crate::host::{Channel, TweenSink};

/// A tween being played.
#[derive(Debug, Clone)]
struct ActiveTween {
    handle: TweenHandle,
    channel: Channel,
    from: f32,
    to: f32,
    /// Total duration in seconds (> 0).
    duration: f32,
    /// Seconds elapsed so far.
    elapsed: f32,
    easing: EasingFunction,
}

impl ActiveTween {
    /// Normalized progress (0.0 to 1.0).
    #[inline]
    fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }

    /// Interpolated value at the current progress. The last frame lands on
    /// `to` exactly.
    #[inline]
    fn value(&self) -> f32 {
        let t = self.progress();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.evaluate(t)
    }
}

/// Default [`Animator`]: a list of tweens stepped by [`advance`](Animator::advance).
#[derive(Debug, Default)]
pub struct TweenTimeline {
    active: Vec<ActiveTween>,
    next_id: u64,
}

impl TweenTimeline {
    /// Empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Vec::with_capacity(16),
            next_id: 0,
        }
    }

    fn next_handle(&mut self) -> TweenHandle {
        self.next_id += 1;
        TweenHandle(self.next_id)
    }
}

impl Animator for TweenTimeline {
    fn animate(
        &mut self,
        track: Track,
        tuning: &AnimationTuning,
        sink: &mut dyn TweenSink,
    ) -> TweenHandle {
        let handle = self.next_handle();

        if !track.from.is_finite() || !track.to.is_finite() {
            log::warn!(
                "Tween on {:?} has non-finite endpoints ({} -> {}); \
                 resolving immediately",
                track.channel,
                track.from,
                track.to,
            );
            if track.to.is_finite() {
                sink.apply(track.channel, track.to);
            }
            return handle;
        }

        let duration = tuning.duration.as_secs_f32();
        if duration <= 0.0 {
            sink.apply(track.channel, track.to);
            return handle;
        }

        self.active.push(ActiveTween {
            handle,
            channel: track.channel,
            from: track.from,
            to: track.to,
            duration,
            elapsed: 0.0,
            easing: tuning.easing,
        });
        handle
    }

    fn advance(&mut self, dt: f32, sink: &mut dyn TweenSink) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        for tween in &mut self.active {
            tween.elapsed += dt;
            sink.apply(tween.channel, tween.value());
        }

        self.active.retain(|t| t.progress() < 1.0);
    }

    fn is_finished(&self, handle: TweenHandle) -> bool {
        !self.active.iter().any(|t| t.handle == handle)
    }

    fn cancel(&mut self, handle: TweenHandle) {
        self.active.retain(|t| t.handle != handle);
    }

    fn active_count(&self) -> usize {
        self.active.len()
    }
}
