//! Dense (vector similarity) retriever over an external vector index.

use std::sync::Arc;
use std::time::Duration;

use attest_core::constants::DENSE_RETRIEVER;
use attest_core::errors::RetrievalError;
use attest_core::models::ScoredHit;
use attest_core::traits::IVectorIndex;

use super::bounded_search;

/// Queries a vector index with a query embedding under a fixed deadline.
#[derive(Clone)]
pub struct DenseRetriever {
    index: Arc<dyn IVectorIndex>,
    timeout: Duration,
}

impl DenseRetriever {
    pub fn new(index: Arc<dyn IVectorIndex>, timeout: Duration) -> Self {
        Self { index, timeout }
    }

    pub fn backend_name(&self) -> &str {
        self.index.name()
    }

    /// Up to `k` hits, most similar first, ranks 1..=n.
    ///
    /// An empty embedding or `k == 0` short-circuits to an empty list.
    pub async fn search(
        &self,
        embedding: &[f32],
        k: usize,
    ) -> Result<Vec<ScoredHit>, RetrievalError> {
        if embedding.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        bounded_search(
            DENSE_RETRIEVER,
            self.timeout,
            k,
            self.index.search(embedding, k),
        )
        .await
    }
}
