//! Null model lifecycle provider
//!
//! Simulates a model download without touching the network. Every load
//! emits queued, three download steps and ready, in that order.

use std::time::Duration;

use async_trait::async_trait;
use tinyembed_domain::error::{Error, Result};
use tinyembed_domain::ports::providers::{ModelLifecycleProvider, ProgressListener, UnloadOutcome};
use tinyembed_domain::value_objects::{
    EncodingFormat, FileProgress, ProgressEvent, TransferProgress,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::constants::NULL_MODEL_BYTES;

const DOWNLOAD_STEPS: [f64; 3] = [0.0, 50.0, 100.0];

/// Null model lifecycle provider for testing
///
/// ## Example
///
/// ```rust
/// use tinyembed_providers::lifecycle::NullModelLifecycle;
/// use tinyembed_domain::ports::providers::ModelLifecycleProvider;
///
/// let lifecycle = NullModelLifecycle::new().without_unload();
/// assert_eq!(lifecycle.provider_name(), "null");
/// ```
#[derive(Debug, Default)]
pub struct NullModelLifecycle {
    loaded: RwLock<Option<String>>,
    unload_unsupported: bool,
    load_failure: Option<String>,
    step_delay: Option<Duration>,
}

impl NullModelLifecycle {
    /// Create a lifecycle provider that loads and unloads successfully
    pub fn new() -> Self {
        Self::default()
    }

    /// Report [`UnloadOutcome::Unsupported`] on unload
    pub fn without_unload(mut self) -> Self {
        self.unload_unsupported = true;
        self
    }

    /// Fail every load after the first download step
    pub fn with_load_failure(mut self, message: impl Into<String>) -> Self {
        self.load_failure = Some(message.into());
        self
    }

    /// Wait between progress notifications
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = Some(delay);
        self
    }

    /// Model currently held, if any
    pub async fn loaded_model(&self) -> Option<String> {
        self.loaded.read().await.clone()
    }

    async fn pause(&self) {
        if let Some(delay) = self.step_delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn download_step(model: &str, percent: f64) -> ProgressEvent {
        let bytes_loaded = (NULL_MODEL_BYTES as f64 * percent / 100.0) as u64;
        let remaining = NULL_MODEL_BYTES - bytes_loaded;
        ProgressEvent::Downloading {
            model: model.to_string(),
            percent,
            message: None,
            files: vec![FileProgress {
                id: format!("{model}/model.onnx"),
                name: "model.onnx".to_string(),
                percent,
                bytes_loaded: Some(bytes_loaded),
                bytes_total: Some(NULL_MODEL_BYTES),
                speed: None,
                time_remaining: None,
            }],
            overall: Some(TransferProgress {
                bytes_loaded,
                bytes_total: NULL_MODEL_BYTES,
                speed: NULL_MODEL_BYTES as f64 / 2.0,
                time_remaining: remaining as f64 / (NULL_MODEL_BYTES as f64 / 2.0),
            }),
        }
    }
}

#[async_trait]
impl ModelLifecycleProvider for NullModelLifecycle {
    async fn load(
        &self,
        model: &str,
        format: EncodingFormat,
        listener: &dyn ProgressListener,
    ) -> Result<()> {
        debug!(model, format = %format, "Simulating model load");
        listener
            .on_progress(ProgressEvent::Queued {
                model: model.to_string(),
            })
            .await;

        for (step, percent) in DOWNLOAD_STEPS.iter().enumerate() {
            self.pause().await;
            listener
                .on_progress(Self::download_step(model, *percent))
                .await;

            if step == 0 {
                if let Some(message) = &self.load_failure {
                    listener
                        .on_progress(ProgressEvent::Error {
                            model: model.to_string(),
                            message: message.clone(),
                        })
                        .await;
                    return Err(Error::model_lifecycle(message.clone()));
                }
            }
        }

        *self.loaded.write().await = Some(model.to_string());
        listener
            .on_progress(ProgressEvent::Ready {
                model: model.to_string(),
            })
            .await;
        Ok(())
    }

    async fn unload(&self, model: &str) -> Result<UnloadOutcome> {
        if self.unload_unsupported {
            return Ok(UnloadOutcome::Unsupported);
        }
        let mut loaded = self.loaded.write().await;
        match loaded.as_deref() {
            Some(current) if current == model => {
                *loaded = None;
                Ok(UnloadOutcome::Released)
            }
            _ => Err(Error::model_lifecycle(format!("Model {model} is not loaded"))),
        }
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
