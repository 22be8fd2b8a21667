//! RetrievalEngine: orchestrates the retrieval half of a response cycle.
//!
//! Stage 1: dense + sparse fan-out under independent deadlines, fused with RRF.
//! Stage 2: source-tier resolution into the candidate set, then conflict flagging.

use std::sync::Arc;
use std::time::Duration;

use attest_core::config::{AttestConfig, RetrievalConfig};
use attest_core::constants::{DENSE_RETRIEVER, QUERY_EMBEDDER, SPARSE_RETRIEVER};
use attest_core::errors::{AttestResult, RetrievalError};
use attest_core::models::{DegradationEvent, FusedResult, RetrievalMode, RetrievalOutcome, ScoredHit};
use attest_core::traits::{IConflictPredicate, ILexicalIndex, IQueryEmbedder, IVectorIndex};
use attest_observability::tracing_setup::events;
use chrono::Utc;
use tracing::{debug, info};

use crate::cache::{EmbeddingCache, ResultCache};
use crate::cancellation::CancellationToken;
use crate::conflict::ConflictDetector;
use crate::ranking::SourcePriorityResolver;
use crate::search::{scope_to_category, DenseRetriever, RankFuser, SparseRetriever};

/// One user question as seen by the retrieval stage.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalQuery {
    pub text: String,
    /// Precomputed query embedding. `None` runs sparse-only.
    pub embedding: Option<Vec<f32>>,
    /// Per-query override of the configured candidate count.
    pub top_k: Option<usize>,
    /// Restrict both signals to hits of this service category.
    pub service_category: Option<String>,
    pub include_semantic_search: bool,
    pub include_keyword_search: bool,
}

impl Default for RetrievalQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            embedding: None,
            top_k: None,
            service_category: None,
            include_semantic_search: true,
            include_keyword_search: true,
        }
    }
}

impl RetrievalQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_service_category(mut self, category: impl Into<String>) -> Self {
        self.service_category = Some(category.into());
        self
    }

    pub fn with_semantic_search(mut self, enabled: bool) -> Self {
        self.include_semantic_search = enabled;
        self
    }

    pub fn with_keyword_search(mut self, enabled: bool) -> Self {
        self.include_keyword_search = enabled;
        self
    }

    /// Normalized category filter; a blank category means no filter.
    pub fn category_key(&self) -> Option<String> {
        self.service_category
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
    }

    /// Mode of a cycle in which every enabled signal answers.
    fn requested_mode(&self) -> Option<RetrievalMode> {
        match (self.include_semantic_search, self.include_keyword_search) {
            (true, true) => Some(RetrievalMode::Hybrid),
            (true, false) => Some(RetrievalMode::DenseOnly),
            (false, true) => Some(RetrievalMode::SparseOnly),
            (false, false) => None,
        }
    }

    fn usable_embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref().filter(|e| !e.is_empty())
    }
}

pub struct RetrievalEngine {
    dense: DenseRetriever,
    sparse: SparseRetriever,
    fuser: RankFuser,
    detector: ConflictDetector,
    config: RetrievalConfig,
    results: Option<ResultCache>,
    embeddings: Option<EmbeddingCache>,
}

impl RetrievalEngine {
    pub fn new(
        vector_index: Arc<dyn IVectorIndex>,
        lexical_index: Arc<dyn ILexicalIndex>,
        config: &AttestConfig,
    ) -> Self {
        let timeout = Duration::from_millis(config.retrieval.retriever_timeout_ms);
        let (results, embeddings) = if config.cache.enabled {
            (
                Some(ResultCache::from_config(&config.cache)),
                Some(EmbeddingCache::from_config(&config.cache)),
            )
        } else {
            (None, None)
        };

        let engine = Self {
            dense: DenseRetriever::new(vector_index, timeout),
            sparse: SparseRetriever::new(lexical_index, timeout),
            fuser: RankFuser::new(config.retrieval.rrf_k),
            detector: ConflictDetector::default(),
            config: config.retrieval.clone(),
            results,
            embeddings,
        };
        engine.log_wiring();
        engine
    }

    /// Replace the default amount-mismatch conflict predicate.
    pub fn with_conflict_predicate(mut self, predicate: Arc<dyn IConflictPredicate>) -> Self {
        self.detector = ConflictDetector::new(predicate);
        self.log_wiring();
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Drop cached rankings and embeddings, e.g. after a reindex.
    pub fn clear_caches(&self) {
        if let Some(results) = &self.results {
            results.clear();
        }
        if let Some(embeddings) = &self.embeddings {
            embeddings.clear();
        }
    }

    /// Run one query cycle: fan-out, fuse, resolve tiers, flag conflicts.
    ///
    /// A single failed retriever degrades the cycle to the other signal. Only
    /// when no enabled signal answers does this return `RetrievalError::Exhausted`.
    /// A signal switched off on the query contributes nothing and is not a
    /// degradation. Dropping the returned future cancels both backend calls.
    pub async fn retrieve(&self, query: &RetrievalQuery) -> AttestResult<RetrievalOutcome> {
        let requested = query.requested_mode().ok_or(RetrievalError::NoSignals)?;
        let embedding = query.usable_embedding();
        let cache_key = ResultCache::key_for(query, self.fuser.k(), self.config.candidate_k);

        // Without an embedding the dense signal is missing, so a stored
        // complete ranking would misreport the mode.
        let cacheable = !query.include_semantic_search || embedding.is_some();
        if cacheable {
            if let Some(cached) = self.results.as_ref().and_then(|c| c.get(&cache_key)) {
                events::cache_hit("results", &cache_key);
                let fused = cached.as_ref().clone();
                return Ok(self.finish(fused, query, requested, Vec::new(), true));
            }
        }

        let candidate_k = self.config.candidate_k;
        let scope = query.category_key();
        let dense_call = async {
            if !query.include_semantic_search {
                return Ok(Vec::new());
            }
            match embedding {
                Some(embedding) => self.dense.search(embedding, candidate_k).await,
                None => Err(RetrievalError::Unavailable {
                    retriever: DENSE_RETRIEVER.to_string(),
                    reason: "no query embedding".to_string(),
                }),
            }
        };
        let sparse_call = async {
            if !query.include_keyword_search {
                return Ok(Vec::new());
            }
            self.sparse.search(&query.text, candidate_k).await
        };

        let (dense, sparse) = tokio::join!(dense_call, sparse_call);
        let dense = dense.map(|hits| scope_to_category(hits, scope.as_deref()));
        let sparse = sparse.map(|hits| scope_to_category(hits, scope.as_deref()));

        let (dense_hits, sparse_hits, mode, degradations) = match (dense, sparse) {
            (Ok(d), Ok(s)) => (d, s, requested, Vec::new()),
            (Ok(d), Err(e)) if query.include_semantic_search => {
                let event = degrade(SPARSE_RETRIEVER, &e, "dense_only");
                (d, Vec::new(), RetrievalMode::DenseOnly, vec![event])
            }
            (Err(e), Ok(s)) if query.include_keyword_search => {
                let event = degrade(DENSE_RETRIEVER, &e, "sparse_only");
                (Vec::new(), s, RetrievalMode::SparseOnly, vec![event])
            }
            (d, s) => {
                let (dense, sparse) = (describe(d), describe(s));
                events::retrieval_exhausted(&dense, &sparse);
                return Err(RetrievalError::Exhausted { dense, sparse }.into());
            }
        };

        let fused = self.fuser.fuse(&dense_hits, &sparse_hits);

        if degradations.is_empty() {
            if let Some(results) = &self.results {
                results.insert(cache_key, fused.clone());
            }
        }

        Ok(self.finish(fused, query, mode, degradations, false))
    }

    /// Like [`retrieve`](Self::retrieve), but returns `RetrievalError::Cancelled`
    /// as soon as `token` fires, abandoning both backend calls.
    pub async fn retrieve_cancellable(
        &self,
        query: &RetrievalQuery,
        token: &CancellationToken,
    ) -> AttestResult<RetrievalOutcome> {
        if token.is_cancelled() {
            return Err(RetrievalError::Cancelled.into());
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(query = %query.text, "retrieval cancelled");
                Err(RetrievalError::Cancelled.into())
            }
            outcome = self.retrieve(query) => outcome,
        }
    }

    /// Embed `text` through `embedder` (cached), then retrieve.
    ///
    /// An embedding failure or an embedder that misses the retriever deadline
    /// degrades the cycle to sparse-only instead of failing it.
    pub async fn retrieve_text(
        &self,
        text: &str,
        embedder: &dyn IQueryEmbedder,
    ) -> AttestResult<RetrievalOutcome> {
        self.retrieve_with_embedder(RetrievalQuery::new(text), embedder)
            .await
    }

    /// [`retrieve_text`](Self::retrieve_text) raced against `token`, embedding step included.
    pub async fn retrieve_text_cancellable(
        &self,
        text: &str,
        embedder: &dyn IQueryEmbedder,
        token: &CancellationToken,
    ) -> AttestResult<RetrievalOutcome> {
        if token.is_cancelled() {
            return Err(RetrievalError::Cancelled.into());
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!(query = %text, "retrieval cancelled");
                Err(RetrievalError::Cancelled.into())
            }
            outcome = self.retrieve_text(text, embedder) => outcome,
        }
    }

    /// Fill in a missing embedding through `embedder`, then retrieve.
    ///
    /// Queries with semantic search switched off never call the embedder.
    pub async fn retrieve_with_embedder(
        &self,
        mut query: RetrievalQuery,
        embedder: &dyn IQueryEmbedder,
    ) -> AttestResult<RetrievalOutcome> {
        let mut embed_failure = None;
        if query.include_semantic_search && query.usable_embedding().is_none() {
            match self.embed(&query.text, embedder).await {
                Ok(embedding) => query.embedding = Some(embedding),
                Err(e) => embed_failure = Some(degrade(QUERY_EMBEDDER, &e, "sparse_only")),
            }
        }

        let mut outcome = self.retrieve(&query).await?;
        if let Some(event) = embed_failure {
            outcome.degradations.insert(0, event);
        }
        Ok(outcome)
    }

    async fn embed(
        &self,
        text: &str,
        embedder: &dyn IQueryEmbedder,
    ) -> Result<Vec<f32>, RetrievalError> {
        let key = EmbeddingCache::key_for(text);
        if let Some(embedding) = self.embeddings.as_ref().and_then(|c| c.get(&key)) {
            events::cache_hit("embeddings", &key);
            return Ok(embedding);
        }

        let timeout_ms = self.config.retriever_timeout_ms;
        let embedding = match tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            embedder.embed_query(text),
        )
        .await
        {
            Ok(Ok(embedding)) => embedding,
            Ok(Err(e)) => {
                return Err(RetrievalError::Unavailable {
                    retriever: QUERY_EMBEDDER.to_string(),
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                return Err(RetrievalError::Timeout {
                    retriever: QUERY_EMBEDDER.to_string(),
                    timeout_ms,
                })
            }
        };

        if let Some(cache) = &self.embeddings {
            cache.insert(key, embedding.clone());
        }
        Ok(embedding)
    }

    fn finish(
        &self,
        fused: Vec<FusedResult>,
        query: &RetrievalQuery,
        mode: RetrievalMode,
        degradations: Vec<DegradationEvent>,
        from_cache: bool,
    ) -> RetrievalOutcome {
        let top_k = query.top_k.unwrap_or(self.config.top_k);
        let candidates: Vec<ScoredHit> = SourcePriorityResolver::new(top_k).resolve(&fused);
        let conflicts = self.detector.detect(&candidates);

        info!(
            fused = fused.len(),
            candidates = candidates.len(),
            conflicts = conflicts.len(),
            ?mode,
            from_cache,
            "retrieval complete"
        );

        RetrievalOutcome {
            fused,
            candidates,
            conflicts,
            mode,
            degradations,
            from_cache,
        }
    }

    fn log_wiring(&self) {
        debug!(
            dense = self.dense.backend_name(),
            sparse = self.sparse.backend_name(),
            predicate = self.detector.predicate_name(),
            cached = self.results.is_some(),
            "retrieval engine ready"
        );
    }
}

fn describe(result: Result<Vec<ScoredHit>, RetrievalError>) -> String {
    match result {
        Ok(_) => "disabled".to_string(),
        Err(e) => e.to_string(),
    }
}

fn degrade(component: &str, failure: &RetrievalError, fallback: &str) -> DegradationEvent {
    let failure = failure.to_string();
    events::retriever_degraded(component, &failure);
    DegradationEvent {
        component: component.to_string(),
        failure,
        fallback_used: fallback.to_string(),
        timestamp: Utc::now(),
    }
}
