//! Plain-text rendering of command results

use std::fmt::Write;

use tinyembed_application::formatting::{
    format_dimensions, format_percent, format_vector, preview_text,
};
use tinyembed_application::{BatchEmbeddingResult, SingleEmbeddingResult};
use tinyembed_domain::constants::LISTING_PREVIEW_CHARS;
use tinyembed_domain::value_objects::{ComparisonResult, HardwareCapabilities, SearchResult};

/// Capability snapshot, one flag per line
pub fn render_capabilities(caps: &HardwareCapabilities) -> String {
    format!(
        "Accelerator: {}\nFP16: {}\nBackend: {}",
        caps.accelerator_status(),
        caps.fp16_status(),
        caps.backend
    )
}

/// Summary and vector preview of one embedding
pub fn render_single(result: &SingleEmbeddingResult) -> String {
    format!(
        "Dimensions: {}\nTokens: {}\nTime: {}ms\nVector: {}",
        format_dimensions(result.dimensions),
        result.token_count,
        result.elapsed_ms,
        format_vector(&result.embedding)
    )
}

/// Batch totals, per-text averages and a preview of every embedding
pub fn render_batch(result: &BatchEmbeddingResult) -> String {
    let mut out = format!(
        "Embeddings: {}\nDimensions: {}\nTokens: {} ({:.1} per text)\nTime: {}ms ({:.1}ms per text)",
        result.count,
        format_dimensions(result.dimensions),
        result.token_count,
        result.average_tokens(),
        result.elapsed_ms,
        result.average_ms()
    );
    for (i, embedding) in result.embeddings.iter().enumerate() {
        let _ = write!(out, "\n#{} {}", i + 1, format_vector(embedding));
    }
    out
}

/// Ranked results, best first
pub fn render_search(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No documents to search.".to_string();
    }
    results
        .iter()
        .enumerate()
        .map(|(rank, r)| {
            format!(
                "{}. {:>6}  {}",
                rank + 1,
                format_percent(r.similarity),
                preview_text(&r.text, LISTING_PREVIEW_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Similarity percentage and its interpretation
pub fn render_comparison(comparison: &ComparisonResult) -> String {
    format!(
        "Similarity: {}\n{}",
        format_percent(comparison.similarity),
        comparison.interpretation.sentence()
    )
}
