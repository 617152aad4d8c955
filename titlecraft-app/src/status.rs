use std::time::{Duration, Instant};

/// How long a status message stays on screen.
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(2);

/// Transient feedback after copy/save.
#[derive(Debug, Clone)]
pub(crate) struct StatusMessage {
    pub(crate) text: String,
    pub(crate) is_error: bool,
    shown_at: Instant,
}

impl StatusMessage {
    pub(crate) fn info(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            shown_at: now,
        }
    }

    pub(crate) fn error(text: impl Into<String>, now: Instant) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            shown_at: now,
        }
    }

    /// Time left on screen; zero once expired.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        STATUS_TTL.saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }
}
