//! External Provider Ports
//!
//! Contracts for the embedding runtime collaborators.
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation |
//! | ModelLifecycleProvider | Model load/unload with progress |
//! | CapabilityProbe | One-time hardware capability snapshot |

/// Capability probe port
pub mod capability;
/// Embedding provider port
pub mod embedding;
/// Model lifecycle provider port
pub mod lifecycle;

pub use capability::CapabilityProbe;
pub use embedding::EmbeddingProvider;
pub use lifecycle::{ModelLifecycleProvider, ProgressListener, UnloadOutcome};
