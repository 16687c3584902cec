//! # TinyEmbed Domain
//!
//! Core types for TinyEmbed: the similarity engine, the value objects it
//! works on, and the ports through which the embedding runtime is reached.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`similarity`] | Cosine similarity, stable ranking, interpretation |
//! | [`value_objects`] | Embeddings, documents, results, progress, state |
//! | [`ports`] | Embedding, lifecycle and capability provider traits |
//! | [`events`] | Session events and publisher port |
//! | [`error`] | Error taxonomy |

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod similarity;
pub mod value_objects;

pub use error::{Error, Result};
pub use similarity::SimilarityEngine;
pub use value_objects::*;
