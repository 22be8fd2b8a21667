use async_trait::async_trait;

use crate::errors::AttestResult;
use crate::models::ScoredHit;

/// Read-only vector index (dense retrieval backend).
#[async_trait]
pub trait IVectorIndex: Send + Sync {
    /// Up to `k` hits, most similar first.
    async fn search(&self, embedding: &[f32], k: usize) -> AttestResult<Vec<ScoredHit>>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Read-only lexical index (sparse retrieval backend).
#[async_trait]
pub trait ILexicalIndex: Send + Sync {
    /// Up to `k` hits, most relevant first.
    async fn search(&self, query: &str, k: usize) -> AttestResult<Vec<ScoredHit>>;

    fn name(&self) -> &str;
}

/// External embedding service that turns query text into a vector.
#[async_trait]
pub trait IQueryEmbedder: Send + Sync {
    async fn embed_query(&self, text: &str) -> AttestResult<Vec<f32>>;

    fn name(&self) -> &str;
}
