use crate::models::{ConflictAssessment, ScoredHit};

/// Decides whether two candidates in the same topical scope disagree.
pub trait IConflictPredicate: Send + Sync {
    fn assess(&self, a: &ScoredHit, b: &ScoredHit) -> ConflictAssessment;

    fn name(&self) -> &str;
}
