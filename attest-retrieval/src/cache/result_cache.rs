//! Cache of fused rankings keyed by query and fusion parameters.

use std::sync::Arc;
use std::time::Duration;

use attest_core::config::CacheConfig;
use attest_core::models::FusedResult;
use moka::sync::Cache;

use super::query_hasher;
use crate::engine::RetrievalQuery;

/// Fused result lists, shared via `Arc` so hits are cheap to hand out.
///
/// Only complete (hybrid) rankings belong here; the engine never stores degraded ones.
pub struct ResultCache {
    cache: Cache<String, Arc<Vec<FusedResult>>>,
}

impl ResultCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries, Duration::from_secs(config.ttl_secs))
    }

    /// Key covering the normalized text and every parameter that changes the fused order:
    /// fusion settings, enabled signals, category scope and the query embedding.
    pub fn key_for(query: &RetrievalQuery, rrf_k: u32, candidate_k: usize) -> String {
        let mut hasher = query_hasher(&query.text);
        hasher.update(&u64::from(rrf_k).to_le_bytes());
        hasher.update(&(candidate_k as u64).to_le_bytes());
        hasher.update(&[
            u8::from(query.include_semantic_search),
            u8::from(query.include_keyword_search),
        ]);

        // Length prefix keeps the scope from running into the vector bytes.
        let scope = query.category_key().unwrap_or_default();
        hasher.update(&(scope.len() as u64).to_le_bytes());
        hasher.update(scope.as_bytes());

        if query.include_semantic_search {
            for value in query.embedding.iter().flatten() {
                hasher.update(&value.to_le_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<FusedResult>>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, fused: Vec<FusedResult>) {
        self.cache.insert(key, Arc::new(fused));
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything, e.g. after the underlying indexes are rebuilt.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_core::models::{ContributingRanks, ScoredHit};

    fn fused(id: &str) -> FusedResult {
        FusedResult {
            id: id.to_string(),
            rrf_score: 1.0 / 61.0,
            contributing_ranks: ContributingRanks {
                dense_rank: Some(1),
                sparse_rank: None,
            },
            hit: ScoredHit::new(id),
        }
    }

    fn query(text: &str) -> RetrievalQuery {
        RetrievalQuery::new(text).with_embedding(vec![1.0, 0.0])
    }

    #[test]
    fn insert_and_get() {
        let cache = ResultCache::new(100, Duration::from_secs(60));
        let key = ResultCache::key_for(&query("passport fee"), 60, 20);
        cache.insert(key.clone(), vec![fused("a")]);
        let hit = cache.get(&key).unwrap();
        assert_eq!(hit[0].id, "a");
    }

    #[test]
    fn different_rrf_k_misses() {
        let cache = ResultCache::new(100, Duration::from_secs(60));
        cache.insert(ResultCache::key_for(&query("q"), 60, 20), vec![fused("a")]);
        assert!(cache.get(&ResultCache::key_for(&query("q"), 10, 20)).is_none());
    }

    #[test]
    fn key_depends_on_embedding() {
        let a = ResultCache::key_for(&RetrievalQuery::new("q").with_embedding(vec![1.0]), 60, 20);
        let b = ResultCache::key_for(&RetrievalQuery::new("q").with_embedding(vec![0.0]), 60, 20);
        assert_ne!(a, b);
    }

    #[test]
    fn key_depends_on_scope_and_signals() {
        let base = ResultCache::key_for(&query("q"), 60, 20);
        let scoped = ResultCache::key_for(&query("q").with_service_category("visa"), 60, 20);
        let keyword_off = ResultCache::key_for(&query("q").with_keyword_search(false), 60, 20);
        assert_ne!(base, scoped);
        assert_ne!(base, keyword_off);
        assert_ne!(scoped, keyword_off);
    }

    #[test]
    fn embedding_is_ignored_when_semantic_search_is_off() {
        let a = RetrievalQuery::new("q").with_semantic_search(false).with_embedding(vec![1.0]);
        let b = RetrievalQuery::new("q").with_semantic_search(false);
        assert_eq!(ResultCache::key_for(&a, 60, 20), ResultCache::key_for(&b, 60, 20));
    }

    #[test]
    fn clear_empties_cache() {
        let cache = ResultCache::new(100, Duration::from_secs(60));
        let key = ResultCache::key_for(&query("q"), 60, 20);
        cache.insert(key.clone(), vec![fused("a")]);
        cache.clear();
        assert!(cache.get(&key).is_none());
    }
}
