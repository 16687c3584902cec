//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::time::Duration;

use async_trait::async_trait;
use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::ports::providers::EmbeddingProvider;
use tinyembed_domain::value_objects::{EmbeddingBatch, EmbeddingData, EncodingFormat};

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider for testing
///
/// Each lowercase word of the input is hashed into one bucket of a
/// fixed-size vector, so texts sharing words score as similar and identical
/// texts score exactly 1.0. Token count is the number of words.
///
/// # Example
///
/// ```rust
/// use tinyembed_providers::embedding::NullEmbeddingProvider;
/// use tinyembed_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone)]
pub struct NullEmbeddingProvider {
    dimensions: usize,
    delay: Option<Duration>,
    failure: Option<String>,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self {
            dimensions: EMBEDDING_DIMENSION_NULL,
            delay: None,
            failure: None,
        }
    }

    /// Produce vectors of a different size
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions.max(1);
        self
    }

    /// Sleep before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every request with the given message
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Size of the produced vectors
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Deterministic vector for a text
    pub fn vector_for(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dimensions];
        let mut words = 0usize;
        for word in text.split_whitespace() {
            let hash = fnv1a(word.to_lowercase().as_bytes());
            let bucket = (hash % self.dimensions as u64) as usize;
            // Sign bit spreads unrelated words across both half-spaces
            vector[bucket] += if hash & (1 << 63) == 0 { 1.0 } else { -1.0 };
            words += 1;
        }
        if words == 0 || vector.iter().all(|v| *v == 0.0) {
            let bucket = (fnv1a(text.as_bytes()) % self.dimensions as u64) as usize;
            vector[bucket] = 1.0;
        }
        vector
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(
        &self,
        model: &str,
        texts: &[String],
        format: EncodingFormat,
    ) -> Result<EmbeddingBatch> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.failure {
            return Err(Error::embedding(message.clone()));
        }

        let embeddings = texts
            .iter()
            .map(|text| EmbeddingData::from_floats(&self.vector_for(text), format))
            .collect();
        let prompt_tokens = texts
            .iter()
            .map(|text| text.split_whitespace().count() as u64)
            .sum();

        Ok(EmbeddingBatch {
            model: model.to_string(),
            embeddings,
            prompt_tokens,
        })
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// 64-bit FNV-1a
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0100_0000_01b3)
    })
}
