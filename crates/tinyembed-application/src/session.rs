//! Embedding session
//!
//! The session is the single owner of everything a user builds up while
//! working with a model: the loaded model handle, the document set, the
//! latest results and the activity log. It replaces any notion of a global
//! model instance; callers hold an `Arc<EmbeddingSession>` and pass it
//! where needed.
//!
//! ## State machine
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | `Uninitialized` | `initialize` | `CapabilityChecked` |
//! | `CapabilityChecked`, `Ready`, `Failed` | `load_model` | `Loading` → `Ready` or `Failed` |
//! | `Ready` | `unload_model` | `CapabilityChecked` (stays `Ready` if the runtime fails) |
//!
//! Every transition is published as [`DomainEvent::ModelStateChanged`].
//! Progress notifications update the displayed progress only; they never
//! change the session state.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tinyembed_domain::constants::{
    ACTIVITY_LOG_CAPACITY, LOG_PREVIEW_DOCUMENT_CHARS, LOG_PREVIEW_EMBED_CHARS,
    PROGRESS_THROTTLE_MS,
};
use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::events::{DomainEvent, SharedEventPublisher};
use tinyembed_domain::ports::providers::{
    CapabilityProbe, EmbeddingProvider, ModelLifecycleProvider, ProgressListener, UnloadOutcome,
};
use tinyembed_domain::similarity::SimilarityEngine;
use tinyembed_domain::value_objects::{
    ComparisonResult, Document, EmbeddingBatch, EmbeddingData, EncodingFormat,
    HardwareCapabilities, ModelState, ProgressEvent, SearchResult,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::activity_log::{ActivityLog, LogEntry};
use crate::formatting::{format_dimensions, preview_text};
use crate::gate::RequestGate;
use crate::progress::{ProgressTracker, ProgressView};
use crate::results::{BatchEmbeddingResult, SessionResults, SingleEmbeddingResult};
use crate::timing::TimedOperation;

/// Session tuning
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Minimum interval between displayed download notifications
    pub progress_throttle: Duration,
    /// Maximum retained activity log entries
    pub log_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            progress_throttle: Duration::from_millis(PROGRESS_THROTTLE_MS),
            log_capacity: ACTIVITY_LOG_CAPACITY,
        }
    }
}

/// Embedding session over an external runtime
pub struct EmbeddingSession {
    embedding: Arc<dyn EmbeddingProvider>,
    lifecycle: Arc<dyn ModelLifecycleProvider>,
    probe: Arc<dyn CapabilityProbe>,
    events: SharedEventPublisher,
    gate: RequestGate,
    state: RwLock<ModelState>,
    capabilities: RwLock<Option<HardwareCapabilities>>,
    documents: RwLock<Vec<Document>>,
    results: RwLock<SessionResults>,
    progress: RwLock<ProgressTracker>,
    log: RwLock<ActivityLog>,
}

impl EmbeddingSession {
    /// Create an uninitialized session with injected collaborators
    pub fn new(
        embedding: Arc<dyn EmbeddingProvider>,
        lifecycle: Arc<dyn ModelLifecycleProvider>,
        probe: Arc<dyn CapabilityProbe>,
        events: SharedEventPublisher,
        options: SessionOptions,
    ) -> Self {
        let mut log = ActivityLog::new(options.log_capacity);
        log.push("Initializing TinyEmbed session...");
        Self {
            embedding,
            lifecycle,
            probe,
            events,
            gate: RequestGate::new(),
            state: RwLock::new(ModelState::Uninitialized),
            capabilities: RwLock::new(None),
            documents: RwLock::new(Vec::new()),
            results: RwLock::new(SessionResults::default()),
            progress: RwLock::new(ProgressTracker::new(options.progress_throttle)),
            log: RwLock::new(log),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Probe hardware capabilities once and become ready to load a model
    ///
    /// A probe failure is logged and leaves the session uninitialized.
    pub async fn initialize(&self) -> Result<HardwareCapabilities> {
        {
            let state = self.state.read().await;
            if *state != ModelState::Uninitialized {
                return Err(Error::invalid_state("initialize", state.name()));
            }
        }

        self.record("Checking hardware capabilities...").await;
        let caps = match self.probe.check().await {
            Ok(caps) => caps,
            Err(e) => return self.fail("initializing session", e).await,
        };

        info!(
            accelerator = caps.accelerator_status(),
            fp16 = caps.fp16_status(),
            backend = %caps.backend,
            "Hardware capabilities checked"
        );
        self.record(format!(
            "Hardware check: accelerator {}, FP16 {}, backend {}",
            caps.accelerator_status(),
            caps.fp16_status(),
            caps.backend
        ))
        .await;
        *self.capabilities.write().await = Some(caps.clone());
        self.transition(ModelState::CapabilityChecked).await;
        self.record("Initialization complete. Ready to load model.")
            .await;
        Ok(caps)
    }

    /// Load `model`, producing embeddings in `format` once ready
    ///
    /// Loading over a ready model discards the document set and results,
    /// since their embeddings came from the previous model.
    pub async fn load_model(&self, model: &str, format: EncodingFormat) -> Result<()> {
        let model = model.trim();
        if model.is_empty() {
            return Err(Error::invalid_argument("Model id cannot be empty"));
        }
        let _permit = self.gate.try_acquire()?;

        let previous = {
            let mut state = self.state.write().await;
            if !state.can_load() {
                return Err(Error::invalid_state("load a model", state.name()));
            }
            std::mem::replace(
                &mut *state,
                ModelState::Loading {
                    model: model.to_string(),
                },
            )
        };
        self.publish(DomainEvent::ModelStateChanged {
            state: ModelState::Loading {
                model: model.to_string(),
            },
            previous: previous.clone(),
        })
        .await;
        if previous.is_ready() {
            self.discard_session_data().await;
        }
        self.progress.write().await.reset();

        info!(
            model,
            format = %format,
            provider = self.lifecycle.provider_name(),
            "Loading model"
        );
        self.record(format!("Loading embedding model: {model}")).await;

        let listener = SessionProgress { session: self };
        match self.lifecycle.load(model, format, &listener).await {
            Ok(()) => {
                self.transition(ModelState::Ready {
                    model: model.to_string(),
                    format,
                })
                .await;
                self.record(format!("Model {model} loaded successfully!"))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.transition(ModelState::Failed {
                    message: e.to_string(),
                })
                .await;
                self.fail("loading model", e).await
            }
        }
    }

    /// Release the loaded model and discard everything derived from it
    ///
    /// If the runtime cannot release models, the session still detaches
    /// and reports [`UnloadOutcome::Unsupported`].
    pub async fn unload_model(&self) -> Result<UnloadOutcome> {
        let _permit = self.gate.try_acquire()?;
        let (model, _) = self.ready_model().await?;

        self.record(format!("Unloading embedding model: {model}"))
            .await;
        let outcome = match self.lifecycle.unload(&model).await {
            Ok(outcome) => outcome,
            Err(e) => return self.fail("unloading model", e).await,
        };

        self.discard_session_data().await;
        self.handle_progress(ProgressEvent::Offloaded {
            model: model.clone(),
        })
        .await;
        self.transition(ModelState::CapabilityChecked).await;

        match outcome {
            UnloadOutcome::Released => {
                self.record(format!("Model {model} unloaded successfully."))
                    .await;
            }
            UnloadOutcome::Unsupported => {
                warn!(
                    model = %model,
                    provider = self.lifecycle.provider_name(),
                    "Runtime cannot unload models; resources may still be held"
                );
                self.record(format!(
                    "Model {model} detached from session. The runtime cannot unload models, resources may still be held."
                ))
                .await;
            }
        }
        Ok(outcome)
    }

    // ========================================================================
    // Embedding operations
    // ========================================================================

    /// Embed one text in the session encoding
    pub async fn generate_embedding(&self, text: &str) -> Result<SingleEmbeddingResult> {
        require_text(text, "Text")?;
        let _permit = self.gate.try_acquire()?;
        let (model, format) = self.ready_model().await?;

        self.record(format!(
            "Generating embedding for text: \"{}\"",
            preview_text(text, LOG_PREVIEW_EMBED_CHARS)
        ))
        .await;

        let result = self
            .logged("generating embedding", async {
                let timer = TimedOperation::start();
                let batch = self
                    .embedding
                    .embed_batch(&model, &[text.to_string()], format)
                    .await?;
                let elapsed_ms = timer.elapsed_ms();
                let token_count = batch.prompt_tokens;
                let embedding = exactly(batch, 1)?.remove(0);
                Ok(SingleEmbeddingResult {
                    dimensions: embedding.dimensions(),
                    embedding,
                    token_count,
                    elapsed_ms,
                })
            })
            .await?;

        self.record(format!(
            "Embedding generated successfully: {} dimensions, {} tokens, {}ms",
            format_dimensions(result.dimensions),
            result.token_count,
            result.elapsed_ms
        ))
        .await;
        self.results.write().await.single = Some(result.clone());
        Ok(result)
    }

    /// Embed several texts in one request, in the session encoding
    ///
    /// Texts are trimmed and blank ones dropped before the request.
    pub async fn generate_batch(&self, texts: &[String]) -> Result<BatchEmbeddingResult> {
        let texts: Vec<String> = texts
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if texts.is_empty() {
            return Err(Error::invalid_argument("Batch contains no texts"));
        }
        let _permit = self.gate.try_acquire()?;
        let (model, format) = self.ready_model().await?;

        self.record(format!("Generating embeddings for {} texts", texts.len()))
            .await;

        let result = self
            .logged("generating batch embeddings", async {
                let timer = TimedOperation::start();
                let batch = self.embedding.embed_batch(&model, &texts, format).await?;
                let elapsed_ms = timer.elapsed_ms();
                let token_count = batch.prompt_tokens;
                let dimensions = batch.dimensions();
                let embeddings = exactly(batch, texts.len())?;
                Ok(BatchEmbeddingResult {
                    count: embeddings.len(),
                    embeddings,
                    dimensions,
                    token_count,
                    elapsed_ms,
                })
            })
            .await?;

        self.record(format!(
            "Batch embeddings generated successfully: {} embeddings, {} dimensions, {} tokens, {}ms",
            result.count,
            format_dimensions(result.dimensions),
            result.token_count,
            result.elapsed_ms
        ))
        .await;
        self.results.write().await.batch = Some(result.clone());
        Ok(result)
    }

    // ========================================================================
    // Document set and search
    // ========================================================================

    /// Embed `text` and append it to the document set, returning its index
    pub async fn add_document(&self, text: &str) -> Result<usize> {
        require_text(text, "Document text")?;
        let _permit = self.gate.try_acquire()?;
        let (model, _) = self.ready_model().await?;

        self.record(format!(
            "Adding document: \"{}\"",
            preview_text(text, LOG_PREVIEW_DOCUMENT_CHARS)
        ))
        .await;

        let document = self
            .logged("adding document", async {
                let embedding = self
                    .embedding
                    .embed(&model, text, EncodingFormat::Float)
                    .await?
                    .into_vector()?;
                Document::new(text, embedding)
            })
            .await?;

        let (index, total) = {
            let mut documents = self.documents.write().await;
            documents.push(document);
            (documents.len() - 1, documents.len())
        };
        debug!(index, total, "Document added");
        self.record(format!(
            "Document added successfully. Total documents: {total}"
        ))
        .await;
        self.publish(DomainEvent::DocumentAdded { index, total })
            .await;
        Ok(index)
    }

    /// Empty the document set and the search results
    ///
    /// Waits for no request: a clear issued while a request is in flight
    /// fails with [`Error::Busy`].
    pub async fn clear_documents(&self) -> Result<usize> {
        let _permit = self.gate.try_acquire()?;
        let removed = {
            let mut documents = self.documents.write().await;
            let removed = documents.len();
            documents.clear();
            removed
        };
        self.results.write().await.search.clear();
        self.record("All documents cleared").await;
        self.publish(DomainEvent::DocumentsCleared { removed }).await;
        Ok(removed)
    }

    /// Rank the document set against `query`, best first
    ///
    /// An empty document set yields an empty ranking without a provider
    /// call. `limit` keeps only the best results.
    pub async fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        require_text(query, "Query")?;
        let _permit = self.gate.try_acquire()?;
        let (model, _) = self.ready_model().await?;

        if self.documents.read().await.is_empty() {
            debug!("Search over empty document set");
            self.results.write().await.search.clear();
            return Ok(Vec::new());
        }

        self.record(format!("Searching for: \"{query}\"")).await;

        let results = self
            .logged("searching documents", async {
                let query_vector = self
                    .embedding
                    .embed(&model, query, EncodingFormat::Float)
                    .await?
                    .into_vector()?;
                let documents = self.documents.read().await;
                match limit {
                    Some(limit) => {
                        SimilarityEngine::rank_documents_top_k(&query_vector, &documents, limit)
                    }
                    None => SimilarityEngine::rank_documents(&query_vector, &documents),
                }
            })
            .await?;

        self.record(format!(
            "Search completed. Found {} results.",
            results.len()
        ))
        .await;
        self.results.write().await.search = results.clone();
        Ok(results)
    }

    /// Embed two texts in one request and compare them
    pub async fn compare_texts(&self, first: &str, second: &str) -> Result<ComparisonResult> {
        require_text(first, "First text")?;
        require_text(second, "Second text")?;
        let _permit = self.gate.try_acquire()?;
        let (model, _) = self.ready_model().await?;

        self.record("Comparing texts for similarity...").await;

        let comparison = self
            .logged("comparing texts", async {
                let batch = self
                    .embedding
                    .embed_batch(
                        &model,
                        &[first.to_string(), second.to_string()],
                        EncodingFormat::Float,
                    )
                    .await?;
                let mut embeddings = exactly(batch, 2)?.into_iter();
                let (Some(a), Some(b)) = (embeddings.next(), embeddings.next()) else {
                    return Err(Error::internal("comparison batch lost an embedding"));
                };
                SimilarityEngine::compare(&a.into_vector()?, &b.into_vector()?)
            })
            .await?;

        self.record(format!(
            "Comparison complete. Similarity: {:.1}%",
            comparison.percent
        ))
        .await;
        self.results.write().await.comparison = Some(comparison.clone());
        Ok(comparison)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current session state
    pub async fn state(&self) -> ModelState {
        self.state.read().await.clone()
    }

    /// Capability snapshot taken at initialization
    pub async fn capabilities(&self) -> Option<HardwareCapabilities> {
        self.capabilities.read().await.clone()
    }

    /// Documents in insertion order
    pub async fn documents(&self) -> Vec<Document> {
        self.documents.read().await.clone()
    }

    /// Number of documents in the set
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Latest result of every operation
    pub async fn results(&self) -> SessionResults {
        self.results.read().await.clone()
    }

    /// Activity log, oldest first
    pub async fn activity_log(&self) -> Vec<LogEntry> {
        self.log.read().await.entries().cloned().collect()
    }

    /// Displayed loading progress
    pub async fn progress(&self) -> Option<ProgressView> {
        self.progress.read().await.view()
    }

    /// Whether a provider request is in flight
    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn handle_progress(&self, event: ProgressEvent) {
        if !self.progress.write().await.accept(event.clone()) {
            return;
        }
        debug!(
            phase = event.phase().as_str(),
            percent = event.percent(),
            model = event.model(),
            "Model progress"
        );
        self.record(format!("[{}] {}", event.phase().as_str(), event.message()))
            .await;
        self.publish(DomainEvent::ModelProgress(event)).await;
    }

    async fn ready_model(&self) -> Result<(String, EncodingFormat)> {
        match &*self.state.read().await {
            ModelState::Ready { model, format } => Ok((model.clone(), *format)),
            _ => Err(Error::ModelNotLoaded),
        }
    }

    async fn transition(&self, next: ModelState) {
        let previous = std::mem::replace(&mut *self.state.write().await, next.clone());
        debug!(from = previous.name(), to = next.name(), "Session state changed");
        self.publish(DomainEvent::ModelStateChanged {
            state: next,
            previous,
        })
        .await;
    }

    async fn discard_session_data(&self) {
        let removed = {
            let mut documents = self.documents.write().await;
            let removed = documents.len();
            documents.clear();
            removed
        };
        *self.results.write().await = SessionResults::default();
        if removed > 0 {
            self.publish(DomainEvent::DocumentsCleared { removed }).await;
        }
    }

    async fn publish(&self, event: DomainEvent) {
        if let Err(e) = self.events.publish(event).await {
            warn!(error = %e, "Failed to publish session event");
        }
    }

    async fn record(&self, message: impl Into<String>) {
        self.log.write().await.push(message);
    }

    async fn logged<T, F>(&self, action: &str, work: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match work.await {
            Ok(value) => Ok(value),
            Err(e) => self.fail(action, e).await,
        }
    }

    async fn fail<T>(&self, action: &str, err: Error) -> Result<T> {
        error!(action, error = %err, "Session operation failed");
        self.record(format!("Error {action}: {err}")).await;
        Err(err)
    }
}

/// Forwards lifecycle progress into a session
struct SessionProgress<'a> {
    session: &'a EmbeddingSession,
}

#[async_trait]
impl<'a> ProgressListener for SessionProgress<'a> {
    async fn on_progress(&self, event: ProgressEvent) {
        self.session.handle_progress(event).await;
    }
}

fn require_text(text: &str, what: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{what} cannot be empty")));
    }
    Ok(())
}

/// Embeddings of a batch that must hold exactly `expected` entries
fn exactly(batch: EmbeddingBatch, expected: usize) -> Result<Vec<EmbeddingData>> {
    if batch.embeddings.len() != expected {
        return Err(Error::embedding(format!(
            "Expected {expected} embeddings, provider returned {}",
            batch.embeddings.len()
        )));
    }
    Ok(batch.embeddings)
}
