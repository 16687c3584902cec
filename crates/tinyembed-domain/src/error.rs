//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for TinyEmbed
#[derive(Error, Debug)]
pub enum Error {
    /// Two vectors with different lengths were compared
    #[error("Dimension mismatch: left vector has {left} dimensions, right vector has {right}")]
    DimensionMismatch {
        /// Length of the left-hand vector
        left: usize,
        /// Length of the right-hand vector
        right: usize,
    },

    /// A vector with zero magnitude was supplied to similarity computation
    #[error("Zero vector: {argument} has zero magnitude, similarity is undefined")]
    ZeroVector {
        /// Which argument was the zero vector ("left", "right", "query", ...)
        argument: String,
    },

    /// A vector contains a NaN or infinite component
    #[error("Non-finite vector: {argument} contains a NaN or infinite component")]
    NonFiniteVector {
        /// Which argument held the non-finite component
        argument: String,
    },

    /// A vector with no components was supplied
    #[error("Empty vector: similarity requires at least one dimension")]
    EmptyVector,

    /// An encoded embedding could not be decoded into numbers
    #[error("Invalid embedding encoding: {message}")]
    InvalidEncoding {
        /// Description of the encoding problem
        message: String,
    },

    /// Another embedding request is already in flight
    #[error("Busy: another embedding request is already in progress")]
    Busy,

    /// Operation requires a loaded model
    #[error("No embedding model is loaded")]
    ModelNotLoaded,

    /// Operation is not permitted in the current session state
    #[error("Cannot {operation} while session is {state}")]
    InvalidState {
        /// The rejected operation
        operation: String,
        /// Name of the current session state
        state: String,
    },

    /// Embedding provider error (opaque, displayed verbatim)
    #[error("Embedding provider error: {message}")]
    Embedding {
        /// Description of the embedding error
        message: String,
    },

    /// Model lifecycle provider error (opaque, displayed verbatim)
    #[error("Model lifecycle error: {message}")]
    ModelLifecycle {
        /// Description of the lifecycle error
        message: String,
    },

    /// Capability probe error (opaque, displayed verbatim)
    #[error("Capability probe error: {message}")]
    Capability {
        /// Description of the probe error
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration error with optional source
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Network-related error
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure error with optional source
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Base64 decoding error
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Internal error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Similarity engine error creation methods
impl Error {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }

    /// Create a zero vector error
    pub fn zero_vector<S: Into<String>>(argument: S) -> Self {
        Self::ZeroVector {
            argument: argument.into(),
        }
    }

    /// Create a non-finite vector error
    pub fn non_finite_vector<S: Into<String>>(argument: S) -> Self {
        Self::NonFiniteVector {
            argument: argument.into(),
        }
    }

    /// Create an invalid encoding error
    pub fn invalid_encoding<S: Into<String>>(message: S) -> Self {
        Self::InvalidEncoding {
            message: message.into(),
        }
    }
}

// Session error creation methods
impl Error {
    /// Create an invalid state error
    pub fn invalid_state<O: Into<String>, S: Into<String>>(operation: O, state: S) -> Self {
        Self::InvalidState {
            operation: operation.into(),
            state: state.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Collaborator error creation methods
impl Error {
    /// Create an embedding provider error
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a model lifecycle error
    pub fn model_lifecycle<S: Into<String>>(message: S) -> Self {
        Self::ModelLifecycle {
            message: message.into(),
        }
    }

    /// Create a capability probe error
    pub fn capability<S: Into<String>>(message: S) -> Self {
        Self::Capability {
            message: message.into(),
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
