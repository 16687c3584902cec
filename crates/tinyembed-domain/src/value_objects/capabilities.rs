//! Hardware capability snapshot

use serde::{Deserialize, Serialize};

/// Value Object: One-time snapshot of runtime acceleration support
///
/// `None` means the runtime could not tell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareCapabilities {
    /// Whether a hardware accelerator (GPU) is available
    pub accelerator_available: Option<bool>,
    /// Whether half-precision inference is supported
    pub fp16_supported: Option<bool>,
    /// Backend identifier reported by the runtime
    pub backend: String,
}

impl HardwareCapabilities {
    /// Snapshot for a runtime that reports nothing but its backend name
    pub fn unknown(backend: impl Into<String>) -> Self {
        Self {
            accelerator_available: None,
            fp16_supported: None,
            backend: backend.into(),
        }
    }

    /// Display status of the accelerator flag
    pub fn accelerator_status(&self) -> &'static str {
        match self.accelerator_available {
            Some(true) => "available",
            Some(false) => "not available",
            None => "unknown",
        }
    }

    /// Display status of the fp16 flag
    pub fn fp16_status(&self) -> &'static str {
        match self.fp16_supported {
            Some(true) => "supported",
            Some(false) => "not supported",
            None => "unknown",
        }
    }
}
