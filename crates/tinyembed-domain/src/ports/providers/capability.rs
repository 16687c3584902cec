use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::HardwareCapabilities;

/// Hardware Capability Probe Interface
///
/// Consulted once when a session initializes; never re-polled.
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    /// Take a snapshot of the runtime's acceleration support
    async fn check(&self) -> Result<HardwareCapabilities>;
}
