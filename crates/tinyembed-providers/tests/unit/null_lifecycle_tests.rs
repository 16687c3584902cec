//! Tests for the null model lifecycle provider

use async_trait::async_trait;
use tinyembed_domain::{EncodingFormat, Error, ProgressEvent, ProgressPhase};
use tinyembed_providers::lifecycle::NullModelLifecycle;
use tinyembed_providers::{ModelLifecycleProvider, ProgressListener, UnloadOutcome};
use tokio::sync::Mutex;

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<ProgressEvent>>,
}

#[async_trait]
impl ProgressListener for Recorder {
    async fn on_progress(&self, event: ProgressEvent) {
        self.events.lock().await.push(event);
    }
}

impl Recorder {
    async fn phases(&self) -> Vec<ProgressPhase> {
        self.events.lock().await.iter().map(ProgressEvent::phase).collect()
    }
}

#[tokio::test]
async fn test_load_emits_scripted_progress() {
    let lifecycle = NullModelLifecycle::new();
    let recorder = Recorder::default();

    lifecycle
        .load("nomic-embed-text", EncodingFormat::Float, &recorder)
        .await
        .unwrap();

    assert_eq!(
        recorder.phases().await,
        vec![
            ProgressPhase::Queued,
            ProgressPhase::Downloading,
            ProgressPhase::Downloading,
            ProgressPhase::Downloading,
            ProgressPhase::Ready,
        ]
    );
    let percents: Vec<f64> = recorder
        .events
        .lock()
        .await
        .iter()
        .filter(|e| e.phase() == ProgressPhase::Downloading)
        .map(ProgressEvent::percent)
        .collect();
    assert_eq!(percents, vec![0.0, 50.0, 100.0]);
    assert_eq!(lifecycle.loaded_model().await.as_deref(), Some("nomic-embed-text"));
}

#[tokio::test]
async fn test_unload_releases_loaded_model() {
    let lifecycle = NullModelLifecycle::new();
    lifecycle
        .load("m", EncodingFormat::Float, &Recorder::default())
        .await
        .unwrap();

    assert_eq!(lifecycle.unload("m").await.unwrap(), UnloadOutcome::Released);
    assert!(lifecycle.loaded_model().await.is_none());
    assert!(matches!(
        lifecycle.unload("m").await,
        Err(Error::ModelLifecycle { .. })
    ));
}

#[tokio::test]
async fn test_unload_can_be_unsupported() {
    let lifecycle = NullModelLifecycle::new().without_unload();
    lifecycle
        .load("m", EncodingFormat::Base64, &Recorder::default())
        .await
        .unwrap();
    assert_eq!(lifecycle.unload("m").await.unwrap(), UnloadOutcome::Unsupported);
}

#[tokio::test]
async fn test_load_failure_reports_error_event() {
    let lifecycle = NullModelLifecycle::new().with_load_failure("out of memory");
    let recorder = Recorder::default();

    let err = lifecycle
        .load("m", EncodingFormat::Float, &recorder)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ModelLifecycle { ref message } if message == "out of memory"));
    assert_eq!(
        recorder.phases().await.last().copied(),
        Some(ProgressPhase::Error)
    );
    assert!(lifecycle.loaded_model().await.is_none());
}
