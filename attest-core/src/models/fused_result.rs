use serde::{Deserialize, Serialize};

use super::ScoredHit;

/// Positions a document held in each input list (1-based). `None` = absent from that list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributingRanks {
    pub dense_rank: Option<usize>,
    pub sparse_rank: Option<usize>,
}

impl ContributingRanks {
    pub fn in_both(&self) -> bool {
        self.dense_rank.is_some() && self.sparse_rank.is_some()
    }
}

/// A document after Reciprocal Rank Fusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedResult {
    pub id: String,
    /// Fused RRF score (higher = more relevant).
    pub rrf_score: f64,
    pub contributing_ranks: ContributingRanks,
    /// Source metadata. Taken from the dense hit when the id appears in both lists.
    pub hit: ScoredHit,
}
