use serde::{Deserialize, Serialize};

use super::{ConflictFlag, DegradationEvent, FusedResult, ScoredHit};

/// Which retrieval signals contributed to a query cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMode {
    Hybrid,
    DenseOnly,
    SparseOnly,
}

/// Everything the retrieval half of a cycle produces, handed to generation and attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalOutcome {
    /// Full fused ranking (active hits only).
    pub fused: Vec<FusedResult>,
    /// Tier-resolved candidate set, authoritative first.
    pub candidates: Vec<ScoredHit>,
    /// Side channel; never used to filter `candidates`.
    pub conflicts: Vec<ConflictFlag>,
    pub mode: RetrievalMode,
    pub degradations: Vec<DegradationEvent>,
    pub from_cache: bool,
}

impl RetrievalOutcome {
    /// Terminal "no external sources used" state. Not an error.
    pub fn no_sources(&self) -> bool {
        self.candidates.is_empty()
    }
}
