//! Ollama runtime adapter

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::ports::providers::{
    CapabilityProbe, EmbeddingProvider, ModelLifecycleProvider, ProgressListener, UnloadOutcome,
};
use tinyembed_domain::value_objects::{
    EmbeddingBatch, EmbeddingData, EncodingFormat, HardwareCapabilities, ProgressEvent,
};
use tracing::{debug, info, warn};

use super::pull::PullProgressMapper;
use super::wire::{EmbedRequest, EmbedResponse, PullRequest, VersionResponse};
use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, OLLAMA_EMBED_PATH, OLLAMA_PULL_PATH,
    OLLAMA_VERSION_PATH,
};
use crate::utils::HttpResponseUtils;
use crate::utils::http_response::ErrorFactory;

const PROVIDER: &str = "Ollama";

/// Ollama runtime
///
/// Receives its HTTP client via constructor injection. The client should
/// not carry a total request timeout: pulls can take minutes, so `timeout`
/// is applied per request to every call except the pull stream.
///
/// ## Example
///
/// ```rust,no_run
/// use tinyembed_providers::ollama::OllamaRuntime;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let runtime = OllamaRuntime::new(
///     "http://localhost:11434".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct OllamaRuntime {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl OllamaRuntime {
    /// Create a new Ollama runtime adapter
    ///
    /// # Arguments
    /// * `base_url` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `timeout` - Timeout for non-streaming requests
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url,
            timeout,
            http_client,
        }
    }

    /// Server URL this runtime talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    fn send_error(&self, make: ErrorFactory, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            make(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
        } else {
            make(format!("{PROVIDER} HTTP request failed: {err}"))
        }
    }

    async fn post_embed(
        &self,
        request: &EmbedRequest<'_>,
        make: ErrorFactory,
    ) -> Result<EmbedResponse> {
        let response = self
            .http_client
            .post(self.url(OLLAMA_EMBED_PATH))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| self.send_error(make, &e))?;

        HttpResponseUtils::check_and_parse(response, PROVIDER, make).await
    }

    /// Stream `/api/pull`, forwarding each status line as progress
    async fn pull(&self, model: &str, listener: &dyn ProgressListener) -> Result<()> {
        let mut response = self
            .http_client
            .post(self.url(OLLAMA_PULL_PATH))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .json(&PullRequest {
                model,
                stream: true,
            })
            .send()
            .await
            .map_err(|e| self.send_error(Error::model_lifecycle, &e))?;
        response = HttpResponseUtils::check_status(response, PROVIDER, Error::model_lifecycle).await?;

        let started = Instant::now();
        let mut mapper = PullProgressMapper::new(model);
        let mut buffer: Vec<u8> = Vec::new();

        loop {
            let chunk = response
                .chunk()
                .await
                .map_err(|e| self.send_error(Error::model_lifecycle, &e))?;
            let done = chunk.is_none();
            if let Some(bytes) = chunk {
                buffer.extend_from_slice(&bytes);
            }

            while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                self.forward_line(&mut mapper, &line, started, listener)
                    .await?;
            }

            if done {
                if !buffer.is_empty() {
                    let line = std::mem::take(&mut buffer);
                    self.forward_line(&mut mapper, &line, started, listener)
                        .await?;
                }
                return Ok(());
            }
        }
    }

    async fn forward_line(
        &self,
        mapper: &mut PullProgressMapper,
        line: &[u8],
        started: Instant,
        listener: &dyn ProgressListener,
    ) -> Result<()> {
        let text = String::from_utf8_lossy(line);
        match mapper.map_line(&text, started.elapsed().as_secs_f64()) {
            Ok(Some(event)) => {
                listener.on_progress(event).await;
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(Error::Json { source }) => {
                warn!(error = %source, "Skipping malformed pull status line");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaRuntime {
    async fn embed_batch(
        &self,
        model: &str,
        texts: &[String],
        format: EncodingFormat,
    ) -> Result<EmbeddingBatch> {
        let response = self
            .post_embed(
                &EmbedRequest {
                    model,
                    input: texts,
                    keep_alive: None,
                },
                Error::embedding,
            )
            .await?;

        if response.embeddings.len() != texts.len() {
            return Err(Error::embedding(format!(
                "{PROVIDER} returned {} embeddings for {} inputs",
                response.embeddings.len(),
                texts.len()
            )));
        }

        // Ollama only speaks floats; the compact encoding is produced here
        let embeddings = response
            .embeddings
            .iter()
            .map(|values| EmbeddingData::from_floats(values, format))
            .collect();

        Ok(EmbeddingBatch {
            model: if response.model.is_empty() {
                model.to_string()
            } else {
                response.model
            },
            embeddings,
            prompt_tokens: response.prompt_eval_count.unwrap_or(0),
        })
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

#[async_trait]
impl ModelLifecycleProvider for OllamaRuntime {
    async fn load(
        &self,
        model: &str,
        format: EncodingFormat,
        listener: &dyn ProgressListener,
    ) -> Result<()> {
        info!(model, format = %format, url = %self.base_url, "Pulling model");
        listener
            .on_progress(ProgressEvent::Queued {
                model: model.to_string(),
            })
            .await;

        let outcome = async {
            self.pull(model, listener).await?;
            debug!(model, "Warming up model");
            self.post_embed(
                &EmbedRequest {
                    model,
                    input: &[],
                    keep_alive: None,
                },
                Error::model_lifecycle,
            )
            .await
            .map(|_| ())
        }
        .await;

        match outcome {
            Ok(()) => {
                listener
                    .on_progress(ProgressEvent::Ready {
                        model: model.to_string(),
                    })
                    .await;
                Ok(())
            }
            Err(e) => {
                listener
                    .on_progress(ProgressEvent::Error {
                        model: model.to_string(),
                        message: e.to_string(),
                    })
                    .await;
                Err(e)
            }
        }
    }

    async fn unload(&self, model: &str) -> Result<UnloadOutcome> {
        self.post_embed(
            &EmbedRequest {
                model,
                input: &[],
                keep_alive: Some(0),
            },
            Error::model_lifecycle,
        )
        .await?;
        info!(model, "Model released");
        Ok(UnloadOutcome::Released)
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

#[async_trait]
impl CapabilityProbe for OllamaRuntime {
    async fn check(&self) -> Result<HardwareCapabilities> {
        let response = self
            .http_client
            .get(self.url(OLLAMA_VERSION_PATH))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.send_error(Error::capability, &e))?;
        let version: VersionResponse =
            HttpResponseUtils::check_and_parse(response, PROVIDER, Error::capability).await?;

        // Ollama does not expose accelerator details over HTTP
        Ok(HardwareCapabilities::unknown(format!(
            "ollama {}",
            version.version
        )))
    }
}
