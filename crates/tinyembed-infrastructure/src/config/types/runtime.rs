//! Embedding runtime configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tinyembed_domain::value_objects::EncodingFormat;
use tinyembed_providers::constants::{
    HTTP_REQUEST_TIMEOUT_SECS, OLLAMA_DEFAULT_MODEL, OLLAMA_DEFAULT_URL,
};

use crate::constants::PROVIDER_OLLAMA;

/// Which runtime serves embeddings and how to reach it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Provider name (`null` or `ollama`)
    pub provider: String,

    /// Server URL for HTTP runtimes
    pub base_url: String,

    /// Model loaded by default
    pub model: String,

    /// Encoding of user-facing embeddings
    pub encoding_format: EncodingFormat,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl RuntimeConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            provider: PROVIDER_OLLAMA.to_string(),
            base_url: OLLAMA_DEFAULT_URL.to_string(),
            model: OLLAMA_DEFAULT_MODEL.to_string(),
            encoding_format: EncodingFormat::Float,
            timeout_secs: HTTP_REQUEST_TIMEOUT_SECS,
        }
    }
}
