//! # TinyEmbed - Provider Implementations
//!
//! Runtime adapters implementing the ports defined in `tinyembed-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | Ollama, Null |
//! | Model lifecycle | `ModelLifecycleProvider` | Ollama, Null |
//! | Capabilities | `CapabilityProbe` | Ollama, Static |
//! | Events | `EventPublisher` | Tokio, Null |
//!
//! ## Usage
//!
//! ```ignore
//! use tinyembed_providers::embedding::NullEmbeddingProvider;
//! use tinyembed_providers::ollama::OllamaRuntime;
//! use tinyembed_providers::events::TokioEventBus;
//! ```

// Re-export tinyembed-domain types commonly used with providers
pub use tinyembed_domain::error::{Error, Result};
pub use tinyembed_domain::ports::providers::{
    CapabilityProbe, EmbeddingProvider, ModelLifecycleProvider, ProgressListener, UnloadOutcome,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Model lifecycle provider implementations
pub mod lifecycle;

/// Capability probe implementations
pub mod capability;

/// Ollama HTTP runtime
///
/// One adapter implementing the embedding, lifecycle and capability ports.
pub mod ollama;

/// Event publisher implementations
pub mod events;

// Internal tests module (can access crate internals)
#[cfg(test)]
mod tests;
