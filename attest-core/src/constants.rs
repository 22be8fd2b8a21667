/// Component name used for the dense (vector) retriever in logs and degradation events.
pub const DENSE_RETRIEVER: &str = "dense";

/// Component name used for the sparse (lexical) retriever in logs and degradation events.
pub const SPARSE_RETRIEVER: &str = "sparse";

/// Component name used for the query embedder.
pub const QUERY_EMBEDDER: &str = "query_embedder";

/// Tier value of official, authoritative sources.
pub const AUTHORITATIVE_TIER: u8 = 1;

/// Tier value of the first auxiliary tier.
pub const AUXILIARY_TIER: u8 = 2;
