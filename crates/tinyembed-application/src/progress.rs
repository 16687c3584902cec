//! Model loading progress tracking
//!
//! The tracker holds the latest accepted notification only. Percentages are
//! shown as reported, so a value lower than the previous one is displayed
//! as-is. Bursts of download notifications are thinned by a throttle
//! interval; any other phase always gets through.

use std::time::{Duration, Instant};

use serde::Serialize;
use tinyembed_domain::value_objects::{FileProgress, ProgressEvent, ProgressPhase};

use crate::formatting::{format_bytes, format_duration, format_speed};

/// Latest-known loading progress
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    throttle: Duration,
    latest: Option<ProgressEvent>,
    last_download_at: Option<Instant>,
}

impl ProgressTracker {
    /// Tracker dropping download notifications closer than `throttle`
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            latest: None,
            last_download_at: None,
        }
    }

    /// Accept a notification received now
    pub fn accept(&mut self, event: ProgressEvent) -> bool {
        self.accept_at(event, Instant::now())
    }

    /// Accept a notification received at `now`
    ///
    /// Returns whether the notification replaced the displayed state.
    pub fn accept_at(&mut self, event: ProgressEvent, now: Instant) -> bool {
        match event.phase() {
            ProgressPhase::Offloaded => {
                self.reset();
                return true;
            }
            ProgressPhase::Downloading => {
                let same_phase = self
                    .latest
                    .as_ref()
                    .is_some_and(|e| e.phase() == ProgressPhase::Downloading);
                let too_soon = self
                    .last_download_at
                    .is_some_and(|at| now.saturating_duration_since(at) < self.throttle);
                if same_phase && too_soon {
                    return false;
                }
                self.last_download_at = Some(now);
            }
            _ => self.last_download_at = None,
        }
        self.latest = Some(event);
        true
    }

    /// Forget all progress
    pub fn reset(&mut self) {
        self.latest = None;
        self.last_download_at = None;
    }

    /// Latest accepted notification
    pub fn latest(&self) -> Option<&ProgressEvent> {
        self.latest.as_ref()
    }

    /// Display view of the latest notification
    pub fn view(&self) -> Option<ProgressView> {
        self.latest.as_ref().map(ProgressView::from_event)
    }

    /// Configured throttle interval
    pub fn throttle(&self) -> Duration {
        self.throttle
    }
}

/// Display-ready progress
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub phase: ProgressPhase,
    pub percent: f64,
    pub message: String,
    /// `"{loaded} / {total}"`
    pub transferred: Option<String>,
    pub speed: Option<String>,
    /// Remaining time, `"--"` when unknown
    pub remaining: Option<String>,
    pub files: Vec<FileLine>,
}

/// Display-ready progress of one file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileLine {
    pub name: String,
    pub percent: f64,
    pub transferred: Option<String>,
    pub speed: Option<String>,
    pub eta: Option<String>,
}

impl ProgressView {
    /// Format a notification for display
    pub fn from_event(event: &ProgressEvent) -> Self {
        let (transferred, speed, remaining, files) = match event {
            ProgressEvent::Downloading { overall, files, .. } => {
                let (transferred, speed, remaining) = overall.as_ref().map_or(
                    (None, None, None),
                    |o| {
                        let remaining = format_duration(o.time_remaining);
                        (
                            Some(format!(
                                "{} / {}",
                                format_bytes(o.bytes_loaded),
                                format_bytes(o.bytes_total)
                            )),
                            Some(format_speed(o.speed)),
                            Some(if remaining.is_empty() {
                                "--".to_string()
                            } else {
                                remaining
                            }),
                        )
                    },
                );
                (
                    transferred,
                    speed,
                    remaining,
                    files.iter().map(FileLine::from_progress).collect(),
                )
            }
            _ => (None, None, None, Vec::new()),
        };

        Self {
            phase: event.phase(),
            percent: event.percent(),
            message: event.message(),
            transferred,
            speed,
            remaining,
            files,
        }
    }

    /// One-line summary, e.g. `"Loading model... 45.0% (61.65 MB / 137.00 MB, 12.00 MB/s, 7s)"`
    pub fn status_line(&self) -> String {
        let mut line = format!("{} {:.1}%", self.message, self.percent);
        if let (Some(transferred), Some(speed), Some(remaining)) =
            (&self.transferred, &self.speed, &self.remaining)
        {
            line.push_str(&format!(" ({transferred}, {speed}, {remaining})"));
        }
        line
    }
}

impl FileLine {
    fn from_progress(file: &FileProgress) -> Self {
        let transferred = match (file.bytes_loaded, file.bytes_total) {
            (Some(loaded), Some(total)) => {
                Some(format!("{} / {}", format_bytes(loaded), format_bytes(total)))
            }
            _ => None,
        };
        Self {
            name: file.name.clone(),
            percent: file.percent,
            transferred,
            speed: file
                .speed
                .filter(|s| *s > 0.0)
                .map(format_speed),
            eta: file
                .time_remaining
                .map(format_duration)
                .filter(|s| !s.is_empty()),
        }
    }
}
