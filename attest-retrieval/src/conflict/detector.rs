//! Groups candidates by service category and flags disagreeing pairs.
//!
//! Flags are a side channel. The candidate set is never filtered or reordered here.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use attest_core::models::{ConflictAssessment, ConflictFlag, ConflictResolution, ScoredHit};
use attest_core::traits::IConflictPredicate;
use attest_observability::tracing_setup::events;
use tracing::debug;

use super::FactMismatchPredicate;

pub struct ConflictDetector {
    predicate: Arc<dyn IConflictPredicate>,
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new(Arc::new(FactMismatchPredicate::new()))
    }
}

impl ConflictDetector {
    pub fn new(predicate: Arc<dyn IConflictPredicate>) -> Self {
        Self { predicate }
    }

    pub fn predicate_name(&self) -> &str {
        self.predicate.name()
    }

    /// Compare every pair within each category group, in candidate order.
    ///
    /// Candidates without a category have no topical scope and are not compared.
    pub fn detect(&self, candidates: &[ScoredHit]) -> Vec<ConflictFlag> {
        let mut group_of: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<Vec<&ScoredHit>> = Vec::new();
        for candidate in candidates {
            let key = candidate.category_key();
            if key.is_empty() {
                continue;
            }
            let slot = *group_of.entry(key).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(candidate);
        }

        let mut flags = Vec::new();
        for group in &groups {
            for (i, a) in group.iter().enumerate() {
                for b in &group[i + 1..] {
                    if let ConflictAssessment::Flagged { reason } = self.predicate.assess(a, b) {
                        let flag = build_flag(a, b, reason);
                        events::conflict_flagged(&flag.document_id_a, &flag.document_id_b, &flag.reason);
                        flags.push(flag);
                    }
                }
            }
        }

        debug!(
            candidates = candidates.len(),
            groups = groups.len(),
            flags = flags.len(),
            predicate = self.predicate.name(),
            "conflict detection complete"
        );
        flags
    }
}

/// Order the pair so `document_id_a` is the primary: higher tier, then newer verification.
fn build_flag(a: &ScoredHit, b: &ScoredHit, reason: String) -> ConflictFlag {
    let precedence = a
        .source_priority_tier
        .cmp(&b.source_priority_tier)
        .then_with(|| b.last_verified.cmp(&a.last_verified));

    let (first, second, resolution) = match precedence {
        Ordering::Less => (a, b, primary(a)),
        Ordering::Greater => (b, a, primary(b)),
        Ordering::Equal => (a, b, ConflictResolution::Unresolved),
    };

    ConflictFlag {
        document_id_a: first.id.clone(),
        document_id_b: second.id.clone(),
        reason,
        resolution,
    }
}

fn primary(hit: &ScoredHit) -> ConflictResolution {
    ConflictResolution::Primary {
        document_id: hit.id.clone(),
    }
}
