//! TTL caches for fused result lists and query embeddings.
//!
//! Both are keyed by a blake3 hash of the normalized query text.

pub mod embedding_cache;
pub mod result_cache;

pub use embedding_cache::EmbeddingCache;
pub use result_cache::ResultCache;

use attest_core::text::normalize_query;

/// blake3 hasher already fed with the normalized query text.
pub(crate) fn query_hasher(text: &str) -> blake3::Hasher {
    let mut hasher = blake3::Hasher::new();
    hasher.update(normalize_query(text).as_bytes());
    hasher
}

/// blake3 hex digest of the normalized query plus any discriminating parts.
pub(crate) fn query_key(text: &str, parts: &[u64]) -> String {
    let mut hasher = query_hasher(text);
    for part in parts {
        hasher.update(&part.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
