//! Checkpoint records

use std::time::Instant;

/// A named point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: String,
    timestamp: Instant,
}

impl Event {
    /// Record `name` at `timestamp`
    pub fn new(name: impl Into<String>, timestamp: Instant) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }

    /// Checkpoint label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the checkpoint was captured
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }
}
