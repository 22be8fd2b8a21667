//! Error taxonomy. Subsystem enums convert into [`AttestError`] via `?`.

mod attribution_error;
mod config_error;
mod retrieval_error;

pub use attribution_error::AttributionError;
pub use config_error::ConfigError;
pub use retrieval_error::RetrievalError;

/// Top-level error for the attest engine.
#[derive(Debug, thiserror::Error)]
pub enum AttestError {
    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("attribution error: {0}")]
    AttributionError(#[from] AttributionError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AttestResult<T> = Result<T, AttestError>;
