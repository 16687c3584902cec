use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{EncodingFormat, ProgressEvent};

/// Receiver of model loading progress
///
/// Implementations must tolerate repeated and out-of-order notifications.
#[async_trait]
pub trait ProgressListener: Send + Sync {
    /// Handle one progress notification
    async fn on_progress(&self, event: ProgressEvent);
}

/// Result of an unload request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnloadOutcome {
    /// The runtime confirmed the model resources were released
    Released,
    /// The runtime cannot unload models; resources may still be held
    Unsupported,
}

/// Model Lifecycle Interface
///
/// Loads and unloads named models in the embedding runtime, reporting
/// loading progress asynchronously through a [`ProgressListener`].
#[async_trait]
pub trait ModelLifecycleProvider: Send + Sync {
    /// Load a model, emitting progress notifications while it loads
    async fn load(
        &self,
        model: &str,
        format: EncodingFormat,
        listener: &dyn ProgressListener,
    ) -> Result<()>;

    /// Release a loaded model
    async fn unload(&self, model: &str) -> Result<UnloadOutcome>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
