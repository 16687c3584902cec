//! Runtime provider resolution
//!
//! Maps `runtime.provider` to concrete port implementations.

use std::sync::Arc;
use std::time::Duration;

use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::ports::providers::{
    CapabilityProbe, EmbeddingProvider, ModelLifecycleProvider,
};
use tinyembed_providers::capability::StaticCapabilityProbe;
use tinyembed_providers::embedding::NullEmbeddingProvider;
use tinyembed_providers::lifecycle::NullModelLifecycle;
use tinyembed_providers::ollama::OllamaRuntime;
use tracing::debug;

use crate::config::RuntimeConfig;
use crate::constants::{CONNECTION_TIMEOUT_SECS, PROVIDER_NULL, PROVIDER_OLLAMA};
use crate::error_ext::ErrorContext;

/// The three collaborators a session needs from its runtime
#[derive(Clone)]
pub struct RuntimeProviders {
    pub embedding: Arc<dyn EmbeddingProvider>,
    pub lifecycle: Arc<dyn ModelLifecycleProvider>,
    pub probe: Arc<dyn CapabilityProbe>,
}

impl RuntimeProviders {
    /// Use one runtime for all three roles
    pub fn from_runtime<R>(runtime: Arc<R>) -> Self
    where
        R: EmbeddingProvider + ModelLifecycleProvider + CapabilityProbe + 'static,
    {
        Self {
            embedding: runtime.clone(),
            lifecycle: runtime.clone(),
            probe: runtime,
        }
    }

    /// Name reported by the embedding provider
    pub fn provider_name(&self) -> &str {
        self.embedding.provider_name()
    }
}

impl std::fmt::Debug for RuntimeProviders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeProviders")
            .field("embedding", &self.embedding.provider_name())
            .field("lifecycle", &self.lifecycle.provider_name())
            .finish_non_exhaustive()
    }
}

/// Build the providers selected by `config`
pub fn resolve_runtime(config: &RuntimeConfig) -> Result<RuntimeProviders> {
    debug!(provider = %config.provider, "Resolving runtime providers");
    match config.provider.as_str() {
        PROVIDER_NULL => Ok(RuntimeProviders {
            embedding: Arc::new(NullEmbeddingProvider::new()),
            lifecycle: Arc::new(NullModelLifecycle::new()),
            probe: Arc::new(StaticCapabilityProbe::default()),
        }),
        PROVIDER_OLLAMA => {
            let client = reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(CONNECTION_TIMEOUT_SECS))
                .build()
                .network_context("Failed to build HTTP client")?;
            let runtime = OllamaRuntime::new(config.base_url.clone(), config.timeout(), client);
            Ok(RuntimeProviders::from_runtime(Arc::new(runtime)))
        }
        other => Err(Error::configuration(format!("Unknown runtime provider '{other}'"))),
    }
}
