use serde::{Deserialize, Serialize};

use super::defaults;

/// Result and embedding cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Max entries per cache.
    pub max_entries: u64,
    /// TTL for fused result lists (seconds).
    pub ttl_secs: u64,
    /// TTL for query embeddings (seconds).
    pub embedding_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_CACHE_ENABLED,
            max_entries: defaults::DEFAULT_CACHE_MAX_ENTRIES,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            embedding_ttl_secs: defaults::DEFAULT_EMBEDDING_CACHE_TTL_SECS,
        }
    }
}
