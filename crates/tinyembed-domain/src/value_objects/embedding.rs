//! Semantic Embedding Value Objects
//!
//! Value objects representing text embeddings as returned by an embedding
//! runtime, either as raw numbers or as an opaque compact encoding.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Output representation requested from an embedding provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingFormat {
    /// Raw numeric vector
    #[default]
    Float,
    /// Little-endian `f32` bytes, base64 encoded
    Base64,
}

impl EncodingFormat {
    /// Wire name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Base64 => "base64",
        }
    }
}

impl fmt::Display for EncodingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "float" => Ok(Self::Float),
            "base64" => Ok(Self::Base64),
            other => Err(Error::invalid_argument(format!(
                "Unknown encoding format '{other}'. Use float or base64"
            ))),
        }
    }
}

/// Value Object: Embedding payload
///
/// An embedding as produced by a provider. Only the `Float` form can be used
/// for similarity computation; a `Base64` payload must be decoded first.
///
/// ## Example
///
/// ```rust
/// use tinyembed_domain::value_objects::EmbeddingData;
///
/// let data = EmbeddingData::from_floats(&[0.5, -0.25], tinyembed_domain::value_objects::EncodingFormat::Base64);
/// assert!(data.as_vector().is_none());
/// assert_eq!(data.decode().unwrap().as_vector(), Some(&[0.5, -0.25][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingData {
    /// Raw numeric vector
    Float(Vec<f64>),
    /// Opaque compact encoding
    Base64(String),
}

impl EmbeddingData {
    /// Build a payload in the requested encoding from raw values
    pub fn from_floats(values: &[f64], format: EncodingFormat) -> Self {
        match format {
            EncodingFormat::Float => Self::Float(values.to_vec()),
            EncodingFormat::Base64 => {
                let bytes: Vec<u8> = values
                    .iter()
                    .flat_map(|v| (*v as f32).to_le_bytes())
                    .collect();
                Self::Base64(STANDARD.encode(bytes))
            }
        }
    }

    /// Encoding of this payload
    pub fn format(&self) -> EncodingFormat {
        match self {
            Self::Float(_) => EncodingFormat::Float,
            Self::Base64(_) => EncodingFormat::Base64,
        }
    }

    /// Numeric view, `None` for opaque payloads
    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            Self::Float(values) => Some(values),
            Self::Base64(_) => None,
        }
    }

    /// Number of dimensions, `None` when the payload is opaque
    pub fn dimensions(&self) -> Option<usize> {
        self.as_vector().map(<[f64]>::len)
    }

    /// Decode into the `Float` form
    pub fn decode(&self) -> Result<Self> {
        match self {
            Self::Float(values) => Ok(Self::Float(values.clone())),
            Self::Base64(encoded) => {
                let bytes = STANDARD.decode(encoded.trim())?;
                if bytes.len() % 4 != 0 {
                    return Err(Error::invalid_encoding(format!(
                        "decoded length {} is not a multiple of 4 bytes",
                        bytes.len()
                    )));
                }
                let values = bytes
                    .chunks_exact(4)
                    .map(|chunk| f64::from(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])))
                    .collect();
                Ok(Self::Float(values))
            }
        }
    }

    /// Consume into a numeric vector, decoding if necessary
    pub fn into_vector(self) -> Result<Vec<f64>> {
        match self {
            Self::Float(values) => Ok(values),
            encoded @ Self::Base64(_) => match encoded.decode()? {
                Self::Float(values) => Ok(values),
                Self::Base64(_) => Err(Error::internal("decode returned an encoded payload")),
            },
        }
    }
}

/// Value Object: Provider response for one embedding request
///
/// One embedding per input text, in input order, plus the prompt token
/// count reported by the runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingBatch {
    /// Model that produced the embeddings
    pub model: String,
    /// Embeddings in input order
    pub embeddings: Vec<EmbeddingData>,
    /// Number of prompt tokens consumed
    pub prompt_tokens: u64,
}

impl EmbeddingBatch {
    /// Dimensions of the first embedding, `None` when empty or opaque
    pub fn dimensions(&self) -> Option<usize> {
        self.embeddings.first().and_then(EmbeddingData::dimensions)
    }

    /// Take the first embedding of the batch
    pub fn into_first(self) -> Result<EmbeddingData> {
        self.embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }
}
