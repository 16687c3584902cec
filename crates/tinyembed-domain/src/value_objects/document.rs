//! Document Value Objects
//!
//! A document pairs a source text with its embedding vector. Documents are
//! owned by a session's document set and never mutated after creation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value Object: Searchable document
///
/// ## Business Rules
///
/// - Text must contain at least one non-whitespace character
/// - Embedding must contain at least one element
///
/// ## Example
///
/// ```rust
/// use tinyembed_domain::value_objects::Document;
///
/// let doc = Document::new("Rust is a systems language", vec![0.1, 0.9]).unwrap();
/// assert_eq!(doc.dimensions(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document text
    pub text: String,
    /// Numeric embedding of the text
    pub embedding: Vec<f64>,
}

impl Document {
    /// Create a validated document
    pub fn new(text: impl Into<String>, embedding: Vec<f64>) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::invalid_argument("Document text cannot be empty"));
        }
        if embedding.is_empty() {
            return Err(Error::EmptyVector);
        }
        Ok(Self { text, embedding })
    }

    /// Dimensionality of the document embedding
    pub fn dimensions(&self) -> usize {
        self.embedding.len()
    }
}
