use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::{EmbeddingBatch, EmbeddingData, EncodingFormat};

/// Text Embedding Interface
///
/// Defines the contract for runtimes that turn text into embeddings. The
/// session calls through to it directly: no caching, no load balancing and
/// no automatic retry. Provider errors are surfaced verbatim.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()`.
///
/// # Example
///
/// ```ignore
/// use tinyembed_domain::ports::providers::EmbeddingProvider;
/// use tinyembed_domain::value_objects::EncodingFormat;
///
/// let embedding = provider.embed("nomic-embed-text", "hello", EncodingFormat::Float).await?;
/// let batch = provider
///     .embed_batch("nomic-embed-text", &["a".into(), "b".into()], EncodingFormat::Base64)
///     .await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embeddings for multiple texts, one per text, in input order
    async fn embed_batch(
        &self,
        model: &str,
        texts: &[String],
        format: EncodingFormat,
    ) -> Result<EmbeddingBatch>;

    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, model: &str, text: &str, format: EncodingFormat) -> Result<EmbeddingData> {
        let batch = self.embed_batch(model, &[text.to_string()], format).await?;
        if batch.embeddings.len() != 1 {
            return Err(Error::embedding(format!(
                "Expected 1 embedding, provider returned {}",
                batch.embeddings.len()
            )));
        }
        batch.into_first()
    }

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
