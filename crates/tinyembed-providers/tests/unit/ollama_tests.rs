//! Tests for the Ollama runtime that need no server

use std::time::Duration;

use reqwest::Client;
use tinyembed_domain::{EncodingFormat, Error};
use tinyembed_providers::ollama::{EmbedRequest, OllamaRuntime};
use tinyembed_providers::{CapabilityProbe, EmbeddingProvider};

fn unreachable_runtime() -> OllamaRuntime {
    // Port 9 (discard) is closed on test machines
    OllamaRuntime::new(
        "http://127.0.0.1:9/".to_string(),
        Duration::from_secs(2),
        Client::new(),
    )
}

#[test]
fn test_embed_request_wire_format() {
    let input = vec!["a".to_string()];
    let body = serde_json::to_value(EmbedRequest {
        model: "nomic-embed-text",
        input: &input,
        keep_alive: None,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"model": "nomic-embed-text", "input": ["a"]}));

    let unload = serde_json::to_value(EmbedRequest {
        model: "m",
        input: &[],
        keep_alive: Some(0),
    })
    .unwrap();
    assert_eq!(unload, serde_json::json!({"model": "m", "input": [], "keep_alive": 0}));
}

#[tokio::test]
async fn test_connection_failure_is_embedding_error() {
    let runtime = unreachable_runtime();
    let err = runtime
        .embed("m", "text", EncodingFormat::Float)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Embedding { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_connection_failure_is_capability_error() {
    let err = unreachable_runtime().check().await.unwrap_err();
    assert!(matches!(err, Error::Capability { .. }), "got {err:?}");
}
