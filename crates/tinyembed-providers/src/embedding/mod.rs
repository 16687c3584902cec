//! Embedding Provider Implementations
//!
//! Converts text into embeddings for search and comparison.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | OllamaRuntime | Local | Complete (see [`crate::ollama`]) |

pub mod null;

pub use null::NullEmbeddingProvider;
