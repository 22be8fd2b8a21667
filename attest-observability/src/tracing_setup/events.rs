//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a retriever failure that fusion absorbed as an empty contribution.
pub fn retriever_degraded(retriever: &str, failure: &str) {
    tracing::warn!(
        event = "retriever_degraded",
        retriever = %retriever,
        failure = %failure,
        "retriever degraded, continuing with remaining signal"
    );
}

/// Log both retrievers failing for one query.
pub fn retrieval_exhausted(dense_failure: &str, sparse_failure: &str) {
    tracing::error!(
        event = "retrieval_exhausted",
        dense = %dense_failure,
        sparse = %sparse_failure,
        "all retrievers failed"
    );
}

/// Log a flagged conflict between two candidates.
pub fn conflict_flagged(document_id_a: &str, document_id_b: &str, reason: &str) {
    tracing::warn!(
        event = "conflict_flagged",
        document_id_a = %document_id_a,
        document_id_b = %document_id_b,
        reason = %reason,
        "conflicting sources flagged"
    );
}

/// Log a result-cache hit.
pub fn cache_hit(cache: &str, key: &str) {
    tracing::debug!(event = "cache_hit", cache = %cache, key = %key, "cache hit");
}

/// Log completion of a citation list.
pub fn citations_built(sentences: usize, attributed: usize, citations: usize) {
    tracing::info!(
        event = "citations_built",
        sentences = sentences,
        attributed = attributed,
        citations = citations,
        "citation list built"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
