//! Model loading progress events
//!
//! Progress notifications are a tagged union over loading phases. Each phase
//! carries only the fields that are meaningful for it.

use serde::{Deserialize, Serialize};

/// Loading phase of a progress notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressPhase {
    /// Request accepted, nothing transferred yet
    Queued,
    /// Model files are being transferred
    Downloading,
    /// Model is ready for inference
    Ready,
    /// Loading failed
    Error,
    /// Model was released
    Offloaded,
}

impl ProgressPhase {
    /// Wire name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Downloading => "downloading",
            Self::Ready => "ready",
            Self::Error => "error",
            Self::Offloaded => "offloaded",
        }
    }
}

/// Transfer progress of a single model file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProgress {
    /// Stable identifier of the file (digest, path, ...)
    pub id: String,
    /// Display name
    pub name: String,
    /// Percent complete (0-100)
    pub percent: f64,
    /// Bytes transferred so far
    pub bytes_loaded: Option<u64>,
    /// Total bytes of the file
    pub bytes_total: Option<u64>,
    /// Transfer rate in bytes per second
    pub speed: Option<f64>,
    /// Estimated remaining time in seconds
    pub time_remaining: Option<f64>,
}

/// Aggregate transfer progress across all files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferProgress {
    /// Bytes transferred so far
    pub bytes_loaded: u64,
    /// Total bytes to transfer
    pub bytes_total: u64,
    /// Transfer rate in bytes per second
    pub speed: f64,
    /// Estimated remaining time in seconds
    pub time_remaining: f64,
}

/// Progress notification emitted by a model lifecycle provider
///
/// Notifications may arrive out of order or repeat a phase. Consumers treat
/// each one as the latest-known state and never accumulate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ProgressEvent {
    /// Load request queued
    Queued {
        /// Model being loaded
        model: String,
    },
    /// Files are being transferred
    Downloading {
        /// Model being loaded
        model: String,
        /// Overall percent complete (0-100), not guaranteed monotonic
        percent: f64,
        /// Optional status message from the runtime
        message: Option<String>,
        /// Per-file progress
        files: Vec<FileProgress>,
        /// Aggregate progress
        overall: Option<TransferProgress>,
    },
    /// Model loaded
    Ready {
        /// Model that finished loading
        model: String,
    },
    /// Loading failed
    Error {
        /// Model that failed
        model: String,
        /// Opaque runtime message
        message: String,
    },
    /// Model released
    Offloaded {
        /// Model that was released
        model: String,
    },
}

impl ProgressEvent {
    /// Phase of this notification
    pub fn phase(&self) -> ProgressPhase {
        match self {
            Self::Queued { .. } => ProgressPhase::Queued,
            Self::Downloading { .. } => ProgressPhase::Downloading,
            Self::Ready { .. } => ProgressPhase::Ready,
            Self::Error { .. } => ProgressPhase::Error,
            Self::Offloaded { .. } => ProgressPhase::Offloaded,
        }
    }

    /// Model the notification refers to
    pub fn model(&self) -> &str {
        match self {
            Self::Queued { model }
            | Self::Downloading { model, .. }
            | Self::Ready { model }
            | Self::Error { model, .. }
            | Self::Offloaded { model } => model,
        }
    }

    /// Percent complete implied by the phase
    pub fn percent(&self) -> f64 {
        match self {
            Self::Queued { .. } | Self::Offloaded { .. } | Self::Error { .. } => 0.0,
            Self::Downloading { percent, .. } => *percent,
            Self::Ready { .. } => 100.0,
        }
    }

    /// Human-readable message for the phase
    pub fn message(&self) -> String {
        match self {
            Self::Queued { model } => format!("Queued {model}"),
            Self::Downloading { message, .. } => message
                .clone()
                .unwrap_or_else(|| "Loading model...".to_string()),
            Self::Ready { model } => format!("{model} ready"),
            Self::Error { message, .. } => message.clone(),
            Self::Offloaded { model } => format!("{model} offloaded"),
        }
    }
}
