/// Retrieval subsystem errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("retriever {retriever} unavailable: {reason}")]
    Unavailable { retriever: String, reason: String },

    #[error("retriever {retriever} timed out after {timeout_ms}ms")]
    Timeout { retriever: String, timeout_ms: u64 },

    #[error("all retrievers failed: dense: {dense}; sparse: {sparse}")]
    Exhausted { dense: String, sparse: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("no retrieval signal enabled for this query")]
    NoSignals,

    #[error("retrieval cancelled")]
    Cancelled,
}

impl RetrievalError {
    /// Per-retriever failures are absorbed by fusion as an empty contribution.
    /// Exhaustion, a query with every signal switched off, and cancellation
    /// end the query cycle.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Unavailable { .. } | Self::Timeout { .. } | Self::DimensionMismatch { .. }
        )
    }
}
