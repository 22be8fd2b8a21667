use crate::models::ScoredHit;

/// Similarity between a generated sentence and a candidate passage.
///
/// Must be a pure function of its inputs. Values outside [0.0, 1.0] are clamped
/// by the caller; NaN is treated as 0.0.
pub trait IAttributionScorer: Send + Sync {
    fn score(&self, sentence: &str, candidate: &ScoredHit) -> f64;

    fn name(&self) -> &str;
}
