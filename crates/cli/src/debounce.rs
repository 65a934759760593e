use std::time::Duration;

use tokio::time::Instant;

/// Schedules the best-effort state flush: every mutation restarts the
/// quiescence window, and a deadline only exists while state is dirty.
#[derive(Debug)]
pub struct FlushDebouncer {
    window: Duration,
    dirty_since: Option<Instant>,
}

impl FlushDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            dirty_since: None,
        }
    }

    /// Restart the quiescence window from now.
    pub fn mark_dirty(&mut self) {
        self.dirty_since = Some(Instant::now());
    }

    /// When the pending flush should fire, `None` while clean.
    pub fn deadline(&self) -> Option<Instant> {
        self.dirty_since.map(|since| since + self.window)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Mark the pending flush as done.
    pub fn reset(&mut self) {
        self.dirty_since = None;
    }
}
