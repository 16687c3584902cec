//! Similarity Engine
//!
//! Pure, synchronous vector similarity: pairwise cosine scoring, stable
//! ranking of a document set against a query, and interpretation of a
//! percentage score.
//!
//! ## Example
//!
//! ```rust
//! use tinyembed_domain::similarity::SimilarityEngine;
//! use tinyembed_domain::value_objects::{Document, SimilarityBand};
//!
//! let docs = vec![
//!     Document::new("a", vec![1.0, 0.0]).unwrap(),
//!     Document::new("b", vec![0.0, 1.0]).unwrap(),
//! ];
//! let ranked = SimilarityEngine::rank_documents(&[1.0, 0.0], &docs).unwrap();
//! assert_eq!(ranked[0].text, "a");
//! assert_eq!(SimilarityEngine::interpret(95.0), SimilarityBand::NearlyIdentical);
//! ```

use crate::error::{Error, Result};
use crate::value_objects::{ComparisonResult, Document, SearchResult, SimilarityBand};

/// Stateless similarity computations
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityEngine;

impl SimilarityEngine {
    /// Cosine similarity of two equal-length, non-zero, finite vectors
    ///
    /// Each vector is divided by its largest absolute component before the
    /// dot product and both squared norms are accumulated in a single pass,
    /// so magnitudes near the limits of `f64` neither overflow nor vanish.
    /// The result may fall fractionally outside [-1, 1] through rounding.
    pub fn compute_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
        if a.len() != b.len() {
            return Err(Error::dimension_mismatch(a.len(), b.len()));
        }
        if a.is_empty() {
            return Err(Error::EmptyVector);
        }

        let scale_a = max_abs_component(a, "left")?;
        let scale_b = max_abs_component(b, "right")?;

        let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
            (0.0_f64, 0.0_f64, 0.0_f64),
            |(dot, na, nb), (x, y)| {
                let (x, y) = (x / scale_a, y / scale_b);
                (dot + x * y, na + x * x, nb + y * y)
            },
        );

        let similarity = dot / (norm_a.sqrt() * norm_b.sqrt());
        if !similarity.is_finite() {
            return Err(Error::internal("similarity computation produced a non-finite score"));
        }
        Ok(similarity)
    }

    /// Rank documents by similarity to `query`, most similar first
    ///
    /// Ties keep the input order of the tied documents. Any document that
    /// cannot be compared aborts the whole ranking.
    pub fn rank_documents(query: &[f64], documents: &[Document]) -> Result<Vec<SearchResult>> {
        let mut results = documents
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                let similarity = Self::compute_similarity(query, &doc.embedding)
                    .map_err(|err| relabel_query_error(err, index))?;
                Ok(SearchResult {
                    index,
                    text: doc.text.clone(),
                    similarity,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        // sort_by is stable
        results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        Ok(results)
    }

    /// Rank documents and keep only the `limit` best
    pub fn rank_documents_top_k(
        query: &[f64],
        documents: &[Document],
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let mut results = Self::rank_documents(query, documents)?;
        results.truncate(limit);
        Ok(results)
    }

    /// Interpretation band of a percentage similarity
    ///
    /// Values outside [0, 100] fall into the outermost bands; NaN falls into
    /// the lowest.
    pub fn interpret(percent: f64) -> SimilarityBand {
        if percent >= 90.0 {
            SimilarityBand::NearlyIdentical
        } else if percent >= 75.0 {
            SimilarityBand::VerySimilar
        } else if percent >= 50.0 {
            SimilarityBand::ModeratelySimilar
        } else if percent >= 25.0 {
            SimilarityBand::SomeSimilarity
        } else {
            SimilarityBand::VeryLittle
        }
    }

    /// Compare two vectors and interpret the result
    pub fn compare(a: &[f64], b: &[f64]) -> Result<ComparisonResult> {
        let similarity = Self::compute_similarity(a, b)?;
        let percent = similarity * 100.0;
        Ok(ComparisonResult {
            similarity,
            percent,
            interpretation: Self::interpret(percent),
        })
    }
}

/// Largest absolute component of `v`
///
/// Rejects NaN and infinite components, and vectors whose components are
/// all exactly zero.
fn max_abs_component(v: &[f64], argument: &str) -> Result<f64> {
    let mut max = 0.0_f64;
    for x in v {
        if !x.is_finite() {
            return Err(Error::non_finite_vector(argument));
        }
        max = max.max(x.abs());
    }
    if max == 0.0 {
        return Err(Error::zero_vector(argument));
    }
    Ok(max)
}

/// Name the offending side in ranking errors
fn relabel_query_error(err: Error, index: usize) -> Error {
    match err {
        Error::ZeroVector { argument } if argument == "left" => Error::zero_vector("query"),
        Error::ZeroVector { .. } => Error::zero_vector(format!("document {index}")),
        Error::NonFiniteVector { argument } if argument == "left" => {
            Error::non_finite_vector("query")
        }
        Error::NonFiniteVector { .. } => Error::non_finite_vector(format!("document {index}")),
        other => other,
    }
}
