//! Session activity log
//!
//! Human-readable, timestamped record of what the session did. This is
//! the user-facing log; diagnostics go through `tracing`.

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One activity log line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded
    pub timestamp: DateTime<Local>,
    /// Log message
    pub message: String,
}

impl LogEntry {
    /// Local wall-clock time as `HH:MM:SS`
    pub fn time_of_day(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.time_of_day(), self.message)
    }
}

/// Bounded activity log, oldest entries dropped first
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl ActivityLog {
    /// Create a log keeping at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    /// Append a message stamped with the current time
    pub fn push(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
        });
    }

    /// Entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
