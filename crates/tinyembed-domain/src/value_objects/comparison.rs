//! Similarity interpretation value objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable similarity band
///
/// Bands are half-open intervals on the percentage scale, evaluated from the
/// highest threshold down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityBand {
    /// 90% and above
    NearlyIdentical,
    /// [75%, 90%)
    VerySimilar,
    /// [50%, 75%)
    ModeratelySimilar,
    /// [25%, 50%)
    SomeSimilarity,
    /// Below 25%
    VeryLittle,
}

impl SimilarityBand {
    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NearlyIdentical => "nearly identical",
            Self::VerySimilar => "very similar",
            Self::ModeratelySimilar => "moderately similar",
            Self::SomeSimilarity => "some similarity, mostly different",
            Self::VeryLittle => "very little semantic similarity",
        }
    }

    /// Full interpretation sentence for display
    pub fn sentence(&self) -> &'static str {
        match self {
            Self::NearlyIdentical => "These texts are semantically nearly identical.",
            Self::VerySimilar => "These texts are very similar in meaning.",
            Self::ModeratelySimilar => "These texts are moderately similar.",
            Self::SomeSimilarity => "These texts have some similarity, but are mostly different.",
            Self::VeryLittle => "These texts have very little semantic similarity.",
        }
    }
}

impl fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value Object: Outcome of comparing two embeddings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Raw cosine similarity
    pub similarity: f64,
    /// Similarity scaled to a percentage
    pub percent: f64,
    /// Interpretation band of `percent`
    pub interpretation: SimilarityBand,
}
