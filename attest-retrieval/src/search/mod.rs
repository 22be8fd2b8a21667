//! Dense and sparse retriever adapters plus RRF fusion.

pub mod dense;
pub mod rrf_fusion;
pub mod sparse;

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use attest_core::errors::{AttestResult, RetrievalError};
use attest_core::models::ScoredHit;
use tracing::debug;

pub use dense::DenseRetriever;
pub use rrf_fusion::RankFuser;
pub use sparse::SparseRetriever;

/// Run one backend call under its deadline and normalize the returned list.
///
/// Backend errors and elapsed deadlines both become per-retriever failures;
/// a partial or garbage list is never returned.
pub(crate) async fn bounded_search<F>(
    retriever: &str,
    timeout: Duration,
    k: usize,
    call: F,
) -> Result<Vec<ScoredHit>, RetrievalError>
where
    F: Future<Output = AttestResult<Vec<ScoredHit>>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(hits)) => {
            let hits = normalize_hits(hits, k);
            debug!(retriever, hits = hits.len(), "retriever returned");
            Ok(hits)
        }
        Ok(Err(e)) => Err(RetrievalError::Unavailable {
            retriever: retriever.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Err(RetrievalError::Timeout {
            retriever: retriever.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }),
    }
}

/// Drop repeated ids (first wins), bound to `k`, and set `rank` to the 1-based list position.
pub(crate) fn normalize_hits(hits: Vec<ScoredHit>, k: usize) -> Vec<ScoredHit> {
    let mut seen: HashSet<String> = HashSet::new();
    hits.into_iter()
        .filter(|h| seen.insert(h.id.clone()))
        .take(k)
        .enumerate()
        .map(|(position, mut hit)| {
            hit.rank = position + 1;
            hit
        })
        .collect()
}

/// Keep only hits whose category key equals `category`, renumbering ranks.
///
/// `None` leaves the list untouched.
pub(crate) fn scope_to_category(hits: Vec<ScoredHit>, category: Option<&str>) -> Vec<ScoredHit> {
    let Some(category) = category else {
        return hits;
    };
    hits.into_iter()
        .filter(|h| h.category_key() == category)
        .enumerate()
        .map(|(position, mut hit)| {
            hit.rank = position + 1;
            hit
        })
        .collect()
}
