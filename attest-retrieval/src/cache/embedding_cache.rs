//! Query embedding cache, so repeated questions skip the embedding service.

use std::time::Duration;

use attest_core::config::CacheConfig;
use moka::sync::Cache;

use super::query_key;

pub struct EmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            config.max_entries,
            Duration::from_secs(config.embedding_ttl_secs),
        )
    }

    pub fn key_for(text: &str) -> String {
        query_key(text, &[])
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
