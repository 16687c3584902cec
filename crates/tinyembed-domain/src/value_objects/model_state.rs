//! Session model state

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::EncodingFormat;

/// State of the model held by an embedding session
///
/// Transitions are driven only by the session's load and unload operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModelState {
    /// Session created, runtime not yet probed
    #[default]
    Uninitialized,
    /// Capabilities known, no model loaded
    CapabilityChecked,
    /// A model load is in progress
    Loading {
        /// Model being loaded
        model: String,
    },
    /// A model is loaded and accepts embedding requests
    Ready {
        /// Loaded model
        model: String,
        /// Encoding requested for user-facing embeddings
        format: EncodingFormat,
    },
    /// The last load failed
    Failed {
        /// Opaque failure message
        message: String,
    },
}

impl ModelState {
    /// Short state name for logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::CapabilityChecked => "capability-checked",
            Self::Loading { .. } => "model-loading",
            Self::Ready { .. } => "model-ready",
            Self::Failed { .. } => "model-error",
        }
    }

    /// Loaded model, if any
    pub fn loaded_model(&self) -> Option<&str> {
        match self {
            Self::Ready { model, .. } => Some(model),
            _ => None,
        }
    }

    /// Whether a model is ready
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Whether a load may be started from this state
    pub fn can_load(&self) -> bool {
        matches!(
            self,
            Self::CapabilityChecked | Self::Ready { .. } | Self::Failed { .. }
        )
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
