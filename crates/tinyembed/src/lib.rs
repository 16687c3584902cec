//! # TinyEmbed
//!
//! Text embeddings, semantic search and similarity comparison over a local
//! embedding runtime.
//!
//! This crate is the public facade: it re-exports every layer and hosts the
//! `tinyembed` command line interface.
//!
//! ## Example
//!
//! ```
//! use tinyembed::domain::SimilarityEngine;
//!
//! let similarity = SimilarityEngine::compute_similarity(&[0.6, 0.8], &[0.6, 0.8]).unwrap();
//! assert!((similarity - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - similarity engine, value objects, ports and errors
//! - `application` - the embedding session, progress tracking, formatting
//! - `providers` - null and Ollama runtimes, event buses
//! - `infrastructure` - configuration, logging and wiring
//! - `cli` - the command line front end

/// Domain layer - similarity engine, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tinyembed_domain::*;
}

/// Application layer - embedding session and display helpers
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use tinyembed_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use tinyembed_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tinyembed_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the session at the crate root
pub use application::{EmbeddingSession, SessionOptions};
