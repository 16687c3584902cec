//! Static capability probe

use async_trait::async_trait;
use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::ports::providers::CapabilityProbe;
use tinyembed_domain::value_objects::HardwareCapabilities;

use crate::constants::NULL_BACKEND;

/// Capability probe returning a fixed snapshot
#[derive(Debug, Clone)]
pub struct StaticCapabilityProbe {
    outcome: std::result::Result<HardwareCapabilities, String>,
}

impl StaticCapabilityProbe {
    /// Probe that always reports `capabilities`
    pub fn new(capabilities: HardwareCapabilities) -> Self {
        Self {
            outcome: Ok(capabilities),
        }
    }

    /// Probe that always fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl Default for StaticCapabilityProbe {
    fn default() -> Self {
        Self::new(HardwareCapabilities {
            accelerator_available: Some(false),
            fp16_supported: Some(false),
            backend: NULL_BACKEND.to_string(),
        })
    }
}

#[async_trait]
impl CapabilityProbe for StaticCapabilityProbe {
    async fn check(&self) -> Result<HardwareCapabilities> {
        self.outcome.clone().map_err(Error::capability)
    }
}
