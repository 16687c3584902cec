//! Session bootstrap
//!
//! Builds an [`EmbeddingSession`] from configuration and keeps the pieces a
//! caller needs next to it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tinyembed_infrastructure::{AppConfig, init_app};
//!
//! # async fn run() -> tinyembed_domain::Result<()> {
//! let context = init_app(AppConfig::default())?;
//! let session = context.session();
//! session.initialize().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tinyembed_application::EmbeddingSession;
use tinyembed_domain::error::Result;
use tinyembed_providers::events::TokioEventBus;
use tracing::info;

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::di::resolver::{RuntimeProviders, resolve_runtime};

/// Application context: configuration plus the wired session
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    session: Arc<EmbeddingSession>,
    event_bus: Arc<TokioEventBus>,
}

impl AppContext {
    /// The embedding session
    pub fn session(&self) -> Arc<EmbeddingSession> {
        Arc::clone(&self.session)
    }

    /// Event bus the session publishes to
    pub fn event_bus(&self) -> Arc<TokioEventBus> {
        Arc::clone(&self.event_bus)
    }
}

/// Validate `config` and wire a session over the configured runtime
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    validate_app_config(&config)?;
    let providers = resolve_runtime(&config.runtime)?;
    Ok(init_app_with_providers(config, providers))
}

/// Wire a session over explicitly supplied providers
pub fn init_app_with_providers(config: AppConfig, providers: RuntimeProviders) -> AppContext {
    info!(
        provider = providers.provider_name(),
        model = %config.runtime.model,
        format = %config.runtime.encoding_format,
        "Initializing application context"
    );

    let event_bus = TokioEventBus::new_shared();
    let session = Arc::new(EmbeddingSession::new(
        providers.embedding,
        providers.lifecycle,
        providers.probe,
        event_bus.clone(),
        config.session.session_options(),
    ));

    AppContext {
        config: Arc::new(config),
        session,
        event_bus,
    }
}
