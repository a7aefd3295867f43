//! L4 Atomic Layer: Clocks and time arithmetic
//!
//! The reel never reads wall-clock time directly. Everything goes through a
//! [`Clock`], so tests can swap in a [`ManualClock`] and step time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source, measured from an arbitrary origin
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get() + dt);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Per-frame tick source: turns frame timestamps into elapsed deltas.
///
/// The first frame after `start()` only records its timestamp; every frame
/// after that yields the time since the previous one. A stopped driver
/// yields nothing.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    running: bool,
    last_timestamp: Option<Duration>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start from scratch; safe to call while running
    pub fn start(&mut self) {
        self.stop();
        self.running = true;
    }

    /// Idempotent
    pub fn stop(&mut self) {
        self.running = false;
        self.last_timestamp = None;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed one frame timestamp; returns the delta to the previous frame
    pub fn step(&mut self, timestamp: Duration) -> Option<Duration> {
        if !self.running {
            return None;
        }
        match self.last_timestamp.replace(timestamp) {
            None => None,
            Some(last) => Some(timestamp.saturating_sub(last)),
        }
    }
}

/// Animation progress (0.0 to 1.0) after `elapsed` of `duration`
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
