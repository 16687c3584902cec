//! Tests for session result types

use tinyembed_application::{BatchEmbeddingResult, SessionResults};

#[test]
fn test_batch_averages() {
    let result = BatchEmbeddingResult {
        embeddings: vec![],
        dimensions: Some(768),
        token_count: 30,
        elapsed_ms: 120,
        count: 4,
    };
    assert_eq!(result.average_ms(), 30.0);
    assert_eq!(result.average_tokens(), 7.5);
}

#[test]
fn test_empty_batch_averages_are_zero() {
    let result = BatchEmbeddingResult {
        embeddings: vec![],
        dimensions: None,
        token_count: 0,
        elapsed_ms: 5,
        count: 0,
    };
    assert_eq!(result.average_ms(), 0.0);
    assert_eq!(result.average_tokens(), 0.0);
}

#[test]
fn test_default_results_are_empty() {
    assert!(SessionResults::default().is_empty());
}
