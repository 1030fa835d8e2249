//! Message bar state
//! A single timed status message shown below the status bar
//!
//! ## status/ Invariants
//!
//! - Only the most recent message is kept.
//! - A message is shown until its time-to-live elapses.
//! - Status content never influences editor behavior.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    timestamp: Instant,
    ttl: Duration,
}

impl StatusMessage {
    /// Create an empty message with the given time-to-live
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            text: String::new(),
            timestamp: Instant::now(),
            ttl,
        }
    }

    /// Replace the message and restart its timer
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.timestamp = Instant::now();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text to draw at `now`, if it has not expired
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> Option<&str> {
        let fresh = now.saturating_duration_since(self.timestamp) < self.ttl;
        (fresh && !self.text.is_empty()).then_some(self.text.as_str())
    }
}
