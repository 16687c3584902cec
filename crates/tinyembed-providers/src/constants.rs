//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in tinyembed-domain) and infrastructure
//! constants.

// ============================================================================
// NULL PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Backend identifier reported by the null runtime
pub const NULL_BACKEND: &str = "null";

/// Simulated model size reported by the null lifecycle provider
pub const NULL_MODEL_BYTES: u64 = 137_000_000;

// ============================================================================
// OLLAMA CONSTANTS
// ============================================================================

/// Ollama server default URL
pub const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";

/// Default embedding model on Ollama
pub const OLLAMA_DEFAULT_MODEL: &str = "nomic-embed-text";

/// Batch embedding endpoint
pub const OLLAMA_EMBED_PATH: &str = "/api/embed";

/// Model pull endpoint (streaming NDJSON)
pub const OLLAMA_PULL_PATH: &str = "/api/pull";

/// Runtime version endpoint
pub const OLLAMA_VERSION_PATH: &str = "/api/version";

/// Pull status line marking a completed pull
pub const OLLAMA_PULL_SUCCESS: &str = "success";

// ============================================================================
// EVENTS PROVIDER CONSTANTS
// ============================================================================

/// Default tokio broadcast channel capacity
pub const EVENT_BUS_CAPACITY: usize = 1024;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP request timeout in seconds (for embedding API calls)
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP request timeout error message prefix
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";
