//! One-shot cancellable timers driven by the event loop clock.

use std::time::{Duration, Instant};

/// A single pending deadline.
///
/// The owner arms it, polls it with the current time, and cancels it by
/// calling [`Timer::cancel`] or simply by dropping it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Create an idle timer
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any earlier deadline
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Cancel the pending deadline. Returns whether one was pending.
    pub const fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is pending
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the deadline has been reached at `now`
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Consume the deadline if it is due. Returns the deadline that fired.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        if self.is_due(now) {
            self.deadline.take()
        } else {
            None
        }
    }
}
