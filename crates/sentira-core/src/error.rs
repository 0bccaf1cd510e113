//! Error types for Sentira

/// Result type alias using Sentira's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Sentira operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pre-trained artifact (vectorizer or classifier) could not be read,
    /// deserialized, or validated
    #[error("artifact load error: {0}")]
    ArtifactLoad(String),

    /// Stop-word or lemma reference data could not be loaded
    #[error("reference data error: {0}")]
    ReferenceData(String),

    /// Feature width disagrees between the vectorizer and the classifier
    #[error("feature width mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A classify call arrived before the service finished loading
    #[error("classification service is not ready")]
    NotReady,

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A classify call exceeded its latency budget
    #[error("operation timed out")]
    Timeout,
}

impl Error {
    /// Create a new artifact load error
    pub fn artifact_load(msg: impl Into<String>) -> Self {
        Self::ArtifactLoad(msg.into())
    }

    /// Create a new reference data error
    pub fn reference_data(msg: impl Into<String>) -> Self {
        Self::ReferenceData(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error must keep the service out of the ready state.
    ///
    /// Fatal errors are startup failures the operator resolves by fixing the
    /// deployment and restarting; non-fatal errors are per-call and the
    /// caller may retry.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ArtifactLoad(_)
                | Self::ReferenceData(_)
                | Self::ShapeMismatch { .. }
                | Self::Config(_)
        )
    }
}
