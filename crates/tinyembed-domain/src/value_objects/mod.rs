//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`EmbeddingData`] | Embedding as raw vector or compact encoding |
//! | [`EmbeddingBatch`] | One provider response |
//! | [`Document`] | Searchable text with its embedding |
//! | [`SearchResult`] | Ranked result of a semantic search |
//! | [`ComparisonResult`] | Outcome of comparing two embeddings |
//! | [`ProgressEvent`] | Model loading progress notification |
//! | [`HardwareCapabilities`] | Runtime acceleration snapshot |
//! | [`ModelState`] | Session model state |

/// Hardware capability snapshot
pub mod capabilities;
/// Similarity interpretation value objects
pub mod comparison;
/// Document value objects
pub mod document;
/// Embedding value objects
pub mod embedding;
/// Session model state
pub mod model_state;
/// Progress notification value objects
pub mod progress;
/// Search-related value objects
pub mod search;

// Re-export commonly used value objects
pub use capabilities::HardwareCapabilities;
pub use comparison::{ComparisonResult, SimilarityBand};
pub use document::Document;
pub use embedding::{EmbeddingBatch, EmbeddingData, EncodingFormat};
pub use model_state::ModelState;
pub use progress::{FileProgress, ProgressEvent, ProgressPhase, TransferProgress};
pub use search::SearchResult;
