//! Two-phase selection: authoritative sources first, auxiliary sources fill the remainder.
//!
//! Candidates are partitioned into tier buckets and concatenated. No comparator
//! mixes tier and score, so an auxiliary hit can never displace an official one.

use attest_core::config::defaults::DEFAULT_TOP_K;
use attest_core::models::{FusedResult, ScoredHit};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct SourcePriorityResolver {
    top_k: usize,
}

impl Default for SourcePriorityResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

impl SourcePriorityResolver {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Build the candidate set from a fused ranking.
    ///
    /// Phase 1 takes up to `top_k` active tier-1 results in fused order.
    /// Phase 2 runs only when phase 1 comes up short and appends active tier ≥ 2
    /// results, again in fused order. An empty result means "no sources".
    pub fn resolve(&self, fused: &[FusedResult]) -> Vec<ScoredHit> {
        let (authoritative, auxiliary): (Vec<&FusedResult>, Vec<&FusedResult>) = fused
            .iter()
            .filter(|f| f.hit.is_active)
            .partition(|f| f.hit.source_priority_tier.is_authoritative());

        let mut candidates: Vec<ScoredHit> = authoritative
            .into_iter()
            .take(self.top_k)
            .map(|f| f.hit.clone())
            .collect();
        let phase_one = candidates.len();

        if phase_one < self.top_k {
            candidates.extend(
                auxiliary
                    .into_iter()
                    .take(self.top_k - phase_one)
                    .map(|f| f.hit.clone()),
            );
        }

        debug!(
            fused = fused.len(),
            authoritative = phase_one,
            auxiliary = candidates.len() - phase_one,
            top_k = self.top_k,
            "source priority resolved"
        );
        candidates
    }
}
