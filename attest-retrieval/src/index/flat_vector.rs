//! Brute-force cosine similarity index.

use async_trait::async_trait;
use attest_core::errors::{AttestResult, RetrievalError};
use attest_core::models::ScoredHit;
use attest_core::traits::IVectorIndex;

/// Exhaustive scan over stored embeddings. Similarities are clamped to [0.0, 1.0].
pub struct FlatVectorIndex {
    dimensions: usize,
    entries: Vec<(Vec<f32>, ScoredHit)>,
}

impl FlatVectorIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            entries: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `hit` under `embedding`, replacing any entry with the same id.
    pub fn insert(&mut self, hit: ScoredHit, embedding: Vec<f32>) -> AttestResult<()> {
        self.check_dimensions(embedding.len())?;
        self.entries.retain(|(_, h)| h.id != hit.id);
        self.entries.push((embedding, hit));
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(_, h)| h.id != id);
        self.entries.len() != before
    }

    /// Synchronous nearest-neighbour scan; ties keep insertion order.
    pub fn nearest(&self, embedding: &[f32], k: usize) -> AttestResult<Vec<ScoredHit>> {
        self.check_dimensions(embedding.len())?;

        let mut scored: Vec<(f64, &ScoredHit)> = self
            .entries
            .iter()
            .map(|(stored, hit)| (cosine_similarity(embedding, stored), hit))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(k)
            .enumerate()
            .map(|(i, (score, hit))| hit.clone().with_rank(i + 1).with_score(score))
            .collect())
    }

    fn check_dimensions(&self, actual: usize) -> AttestResult<()> {
        if actual != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual,
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl IVectorIndex for FlatVectorIndex {
    async fn search(&self, embedding: &[f32], k: usize) -> AttestResult<Vec<ScoredHit>> {
        self.nearest(embedding, k)
    }

    fn name(&self) -> &str {
        "flat_cosine"
    }
}

/// Cosine similarity clamped to [0.0, 1.0]. A zero vector scores 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}
