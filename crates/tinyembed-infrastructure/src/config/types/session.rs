//! Session configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tinyembed_application::SessionOptions;
use tinyembed_domain::constants::{ACTIVITY_LOG_CAPACITY, PROGRESS_THROTTLE_MS};

use crate::constants::DEFAULT_SEARCH_LIMIT;

/// Session tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum interval between displayed download notifications (ms)
    pub progress_throttle_ms: u64,

    /// Maximum retained activity log entries
    pub log_capacity: usize,

    /// Default number of search results
    pub search_limit: usize,
}

impl SessionConfig {
    /// Options for constructing an `EmbeddingSession`
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            progress_throttle: Duration::from_millis(self.progress_throttle_ms),
            log_capacity: self.log_capacity,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            progress_throttle_ms: PROGRESS_THROTTLE_MS,
            log_capacity: ACTIVITY_LOG_CAPACITY,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
