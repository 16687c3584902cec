//! Timing instrumentation helpers
//!
//! Provides reusable timing patterns for operation tracking.

use std::time::{Duration, Instant};

/// Timing instrumentation helper - tracks operation elapsed time
///
/// # Example
///
/// ```
/// use tinyembed_application::TimedOperation;
///
/// let timer = TimedOperation::start();
/// // Perform operation
/// let elapsed = timer.elapsed_ms();
/// assert!(elapsed < 60_000);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start a new timed operation
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time in whole milliseconds, rounded to nearest
    pub fn elapsed_ms(&self) -> u64 {
        (self.start.elapsed().as_secs_f64() * 1000.0).round() as u64
    }

    /// Get elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
