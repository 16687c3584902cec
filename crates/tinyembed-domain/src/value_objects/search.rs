//! Search-Related Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Result
///
/// Derived from a document set on every search and never persisted.
///
/// ## Business Rules
///
/// - `index` is the position of the document in the set that was searched
/// - `similarity` is the raw cosine similarity (higher is better)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Position of the matched document in the searched set
    pub index: usize,
    /// Text of the matched document
    pub text: String,
    /// Cosine similarity against the query
    pub similarity: f64,
}

impl SearchResult {
    /// Similarity scaled to a percentage
    pub fn percent(&self) -> f64 {
        self.similarity * 100.0
    }
}
