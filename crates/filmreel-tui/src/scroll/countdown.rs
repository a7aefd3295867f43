//! L4 Atomic Layer: One-shot cancelable timer
//!
//! Polled from the frame loop instead of firing a callback, which keeps all
//! state changes on the single UI control flow.

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Countdown {
    deadline: Option<Duration>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
        tracing::debug!(delay_ms = delay.as_millis(), "Countdown scheduled");
    }

    /// Idempotent; a canceled timer never fires
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before firing, if armed
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    /// Returns true exactly once, on the first poll at or after the deadline
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
