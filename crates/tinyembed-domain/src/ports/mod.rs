//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the embedding runtime. The
//! domain defines the interfaces; provider crates implement them.

/// External service provider ports
pub mod providers;

pub use providers::{
    CapabilityProbe, EmbeddingProvider, ModelLifecycleProvider, ProgressListener, UnloadOutcome,
};
