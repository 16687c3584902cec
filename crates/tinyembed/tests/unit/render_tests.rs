//! Output rendering tests

use tinyembed::application::{BatchEmbeddingResult, SingleEmbeddingResult};
use tinyembed::cli::{
    render_batch, render_capabilities, render_comparison, render_search, render_single,
};
use tinyembed::domain::{
    EmbeddingData, HardwareCapabilities, SearchResult, SimilarityEngine,
};

#[test]
fn test_render_capabilities() {
    let caps = HardwareCapabilities {
        accelerator_available: Some(true),
        fp16_supported: None,
        backend: "ollama 0.5.1".to_string(),
    };
    assert_eq!(
        render_capabilities(&caps),
        "Accelerator: available\nFP16: unknown\nBackend: ollama 0.5.1"
    );
}

#[test]
fn test_render_single_encoded() {
    let result = SingleEmbeddingResult {
        embedding: EmbeddingData::Base64("AACAPw==".to_string()),
        dimensions: None,
        token_count: 3,
        elapsed_ms: 12,
    };
    assert_eq!(
        render_single(&result),
        "Dimensions: unknown\nTokens: 3\nTime: 12ms\nVector: Base64 encoded (8 characters):\nAACAPw==..."
    );
}

#[test]
fn test_render_batch_lists_every_embedding() {
    let result = BatchEmbeddingResult {
        embeddings: vec![
            EmbeddingData::Float(vec![1.0, 0.0]),
            EmbeddingData::Float(vec![0.0, 1.0]),
        ],
        dimensions: Some(2),
        token_count: 5,
        elapsed_ms: 9,
        count: 2,
    };
    let rendered = render_batch(&result);
    assert!(rendered.contains("Tokens: 5 (2.5 per text)"));
    assert!(rendered.contains("Time: 9ms (4.5ms per text)"));
    assert!(rendered.ends_with("#1 [1.0,0.0]\n#2 [0.0,1.0]"));
}

#[test]
fn test_render_search() {
    let results = vec![
        SearchResult {
            index: 1,
            text: "best".to_string(),
            similarity: 0.91,
        },
        SearchResult {
            index: 0,
            text: "x".repeat(70),
            similarity: -0.2,
        },
    ];
    let rendered = render_search(&results);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "1.  91.0%  best");
    assert_eq!(lines[1], format!("2.   0.0%  {}...", "x".repeat(60)));
    assert_eq!(render_search(&[]), "No documents to search.");
}

#[test]
fn test_render_comparison() {
    let comparison = SimilarityEngine::compare(&[1.0, 0.0], &[1.0, 1.0]).unwrap();
    assert_eq!(
        render_comparison(&comparison),
        "Similarity: 70.7%\nThese texts are moderately similar."
    );
}
