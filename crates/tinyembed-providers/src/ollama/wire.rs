//! Ollama API wire types

use serde::{Deserialize, Serialize};

/// Body of `POST /api/embed`
#[derive(Debug, Serialize)]
pub struct EmbedRequest<'a> {
    pub model: &'a str,
    pub input: &'a [String],
    /// Seconds to keep the model resident, `0` releases it immediately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<i64>,
}

/// Response of `POST /api/embed`
#[derive(Debug, Deserialize)]
pub struct EmbedResponse {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub embeddings: Vec<Vec<f64>>,
    #[serde(default)]
    pub prompt_eval_count: Option<u64>,
}

/// Body of `POST /api/pull`
#[derive(Debug, Serialize)]
pub struct PullRequest<'a> {
    pub model: &'a str,
    pub stream: bool,
}

/// One NDJSON line of a streamed pull
#[derive(Debug, Default, Deserialize)]
pub struct PullStatus {
    #[serde(default)]
    pub status: String,
    pub digest: Option<String>,
    pub total: Option<u64>,
    pub completed: Option<u64>,
    pub error: Option<String>,
}

/// Response of `GET /api/version`
#[derive(Debug, Deserialize)]
pub struct VersionResponse {
    pub version: String,
}
