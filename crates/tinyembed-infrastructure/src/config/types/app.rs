//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RuntimeConfig, SessionConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Embedding runtime configuration
    pub runtime: RuntimeConfig,

    /// Session tuning
    pub session: SessionConfig,
}
