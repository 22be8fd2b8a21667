//! Sparse (lexical) retriever over an external BM25-style index.

use std::sync::Arc;
use std::time::Duration;

use attest_core::constants::SPARSE_RETRIEVER;
use attest_core::errors::RetrievalError;
use attest_core::models::ScoredHit;
use attest_core::traits::ILexicalIndex;

use super::bounded_search;

/// Queries a lexical index with raw query text under a fixed deadline.
#[derive(Clone)]
pub struct SparseRetriever {
    index: Arc<dyn ILexicalIndex>,
    timeout: Duration,
}

impl SparseRetriever {
    pub fn new(index: Arc<dyn ILexicalIndex>, timeout: Duration) -> Self {
        Self { index, timeout }
    }

    pub fn backend_name(&self) -> &str {
        self.index.name()
    }

    /// Up to `k` hits, most relevant first, ranks 1..=n.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredHit>, RetrievalError> {
        if query.trim().is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        bounded_search(SPARSE_RETRIEVER, self.timeout, k, self.index.search(query, k)).await
    }
}
