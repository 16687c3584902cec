//! Operation results kept by the session

use serde::{Deserialize, Serialize};
use tinyembed_domain::value_objects::{ComparisonResult, EmbeddingData, SearchResult};

/// Outcome of embedding one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleEmbeddingResult {
    /// Embedding in the session encoding
    pub embedding: EmbeddingData,
    /// Vector length, `None` for encoded payloads
    pub dimensions: Option<usize>,
    /// Prompt tokens reported by the runtime
    pub token_count: u64,
    /// Wall-clock time of the provider call
    pub elapsed_ms: u64,
}

/// Outcome of embedding several texts in one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEmbeddingResult {
    /// Embeddings in input order
    pub embeddings: Vec<EmbeddingData>,
    /// Vector length of the first embedding, `None` for encoded payloads
    pub dimensions: Option<usize>,
    /// Prompt tokens reported by the runtime for the whole batch
    pub token_count: u64,
    /// Wall-clock time of the provider call
    pub elapsed_ms: u64,
    /// Number of embeddings
    pub count: usize,
}

impl BatchEmbeddingResult {
    /// Average time per embedding in milliseconds
    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.elapsed_ms as f64 / self.count as f64
        }
    }

    /// Average tokens per text
    pub fn average_tokens(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.token_count as f64 / self.count as f64
        }
    }
}

/// Latest result of every session operation
///
/// Cleared as a whole when the model is unloaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionResults {
    pub single: Option<SingleEmbeddingResult>,
    pub batch: Option<BatchEmbeddingResult>,
    pub search: Vec<SearchResult>,
    pub comparison: Option<ComparisonResult>,
}

impl SessionResults {
    /// Whether no operation has produced a result yet
    pub fn is_empty(&self) -> bool {
        self.single.is_none()
            && self.batch.is_none()
            && self.search.is_empty()
            && self.comparison.is_none()
    }
}
