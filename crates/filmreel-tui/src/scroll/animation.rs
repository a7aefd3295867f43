//! L3 Molecular Layer: Frame-stepped value interpolation
//!
//! Combines easing and timing into a tween that is advanced with frame
//! timestamps. The reel controller owns one for smoothing offset changes and
//! stops it on every mode change.

use std::time::Duration;

use super::easing::EasingType;
use super::timing::{lerp, progress};

#[derive(Debug, Clone)]
struct ActiveTween {
    /// Timestamp of the first frame, recorded lazily
    start: Option<Duration>,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Value produced by one animator step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenFrame {
    pub value: f64,
    /// Set on the final frame; the animator is idle afterwards
    pub finished: bool,
}

/// Interpolates a single value from `from` to `to` over `duration`.
///
/// The first `step()` after `start()` emits `from` and pins the start time;
/// later steps emit eased values until progress reaches 1.
#[derive(Debug, Clone, Default)]
pub struct ValueAnimator {
    tween: Option<ActiveTween>,
}

impl ValueAnimator {
    /// Shortest duration a tween may have
    const MIN_DURATION: Duration = Duration::from_micros(100);

    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a tween, replacing any running one
    pub fn start(&mut self, from: f64, to: f64, duration: Duration, easing: EasingType) {
        self.tween = Some(ActiveTween {
            start: None,
            from,
            to,
            duration: duration.max(Self::MIN_DURATION),
            easing,
        });
    }

    /// Drop the running tween without emitting a final value
    pub fn stop(&mut self) {
        self.tween = None;
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Advance to `timestamp`. Returns `None` when idle.
    pub fn step(&mut self, timestamp: Duration) -> Option<TweenFrame> {
        let tween = self.tween.as_mut()?;

        let Some(start) = tween.start else {
            tween.start = Some(timestamp);
            return Some(TweenFrame {
                value: tween.from,
                finished: false,
            });
        };

        let t = progress(timestamp.saturating_sub(start), tween.duration);
        let value = lerp(tween.from, tween.to, tween.easing.apply(t));
        let finished = t >= 1.0;
        if finished {
            self.tween = None;
        }
        Some(TweenFrame { value, finished })
    }
}
