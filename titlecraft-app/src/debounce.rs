use std::time::{Duration, Instant};

/// Quiet window after the last form edit before the edit is committed.
pub(crate) const EDIT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Single pending deadline, restarted by every trigger (last write wins).
///
/// Polled from the frame loop; there is no timer thread.
#[derive(Debug, Clone)]
pub(crate) struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Start (or restart) the quiet window at `now`.
    pub(crate) fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline without firing.
    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the window has elapsed.
    pub(crate) fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending deadline fires.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(EDIT_DEBOUNCE)
    }
}
