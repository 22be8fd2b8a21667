//! Reciprocal Rank Fusion: score = Σ 1/(k + rank_i)
//!
//! Combines the dense and sparse lists into one ranking using list positions
//! only. Native retriever scores are never read.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use attest_core::config::defaults::DEFAULT_RRF_K;
use attest_core::models::{ContributingRanks, FusedResult, ScoredHit};
use tracing::debug;

/// RRF contribution of a single 1-based rank.
pub fn rrf_contribution(k: u32, rank: usize) -> f64 {
    1.0 / (k as f64 + rank.max(1) as f64)
}

/// Fuses two ranked lists with Reciprocal Rank Fusion.
#[derive(Debug, Clone, Copy)]
pub struct RankFuser {
    /// Smoothing constant. Higher k flattens the advantage of top positions.
    k: u32,
}

impl Default for RankFuser {
    fn default() -> Self {
        Self::new(DEFAULT_RRF_K)
    }
}

impl RankFuser {
    pub fn new(k: u32) -> Self {
        Self { k }
    }

    pub fn k(&self) -> u32 {
        self.k
    }

    /// Fuse both lists into one ranking of every unique active id.
    ///
    /// Order: RRF score descending, then lower tier, then more recent
    /// `last_verified`, then id ascending. An id marked inactive in either
    /// list is excluded. Two empty lists give an empty result.
    pub fn fuse(&self, dense: &[ScoredHit], sparse: &[ScoredHit]) -> Vec<FusedResult> {
        let inactive: HashSet<&str> = dense
            .iter()
            .chain(sparse)
            .filter(|h| !h.is_active)
            .map(|h| h.id.as_str())
            .collect();

        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut fused: Vec<FusedResult> = Vec::new();

        for (hit, from_dense) in dense
            .iter()
            .map(|h| (h, true))
            .chain(sparse.iter().map(|h| (h, false)))
        {
            if inactive.contains(hit.id.as_str()) {
                continue;
            }
            let slot = *slots.entry(hit.id.clone()).or_insert_with(|| {
                fused.push(FusedResult {
                    id: hit.id.clone(),
                    rrf_score: 0.0,
                    contributing_ranks: ContributingRanks::default(),
                    hit: hit.clone(),
                });
                fused.len() - 1
            });
            let ranks = &mut fused[slot].contributing_ranks;
            let held = if from_dense {
                &mut ranks.dense_rank
            } else {
                &mut ranks.sparse_rank
            };
            // A repeated id within one list keeps its best position.
            *held = Some(held.map_or(hit.rank, |r| r.min(hit.rank)));
        }

        for result in &mut fused {
            let ranks = result.contributing_ranks;
            result.rrf_score = ranks
                .dense_rank
                .into_iter()
                .chain(ranks.sparse_rank)
                .map(|rank| rrf_contribution(self.k, rank))
                .sum();
        }

        fused.sort_by(fused_order);

        debug!(
            dense = dense.len(),
            sparse = sparse.len(),
            fused = fused.len(),
            k = self.k,
            "rrf fusion complete"
        );
        fused
    }

    /// Fuse and keep the first `limit` results. No padding when fewer exist.
    pub fn fuse_top(
        &self,
        dense: &[ScoredHit],
        sparse: &[ScoredHit],
        limit: usize,
    ) -> Vec<FusedResult> {
        let mut fused = self.fuse(dense, sparse);
        fused.truncate(limit);
        fused
    }
}

/// Total order over fused results; the final id comparison makes it deterministic.
fn fused_order(a: &FusedResult, b: &FusedResult) -> Ordering {
    b.rrf_score
        .total_cmp(&a.rrf_score)
        .then_with(|| a.hit.source_priority_tier.cmp(&b.hit.source_priority_tier))
        .then_with(|| b.hit.last_verified.cmp(&a.hit.last_verified))
        .then_with(|| a.id.cmp(&b.id))
}
