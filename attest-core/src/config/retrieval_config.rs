use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// RRF k-value for rank fusion.
    pub rrf_k: u32,
    /// Number of candidates handed to generation/attribution.
    pub top_k: usize,
    /// Per-retriever result bound.
    pub candidate_k: usize,
    /// Independent deadline for each retriever call (milliseconds).
    pub retriever_timeout_ms: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            rrf_k: defaults::DEFAULT_RRF_K,
            top_k: defaults::DEFAULT_TOP_K,
            candidate_k: defaults::DEFAULT_CANDIDATE_K,
            retriever_timeout_ms: defaults::DEFAULT_RETRIEVER_TIMEOUT_MS,
        }
    }
}
