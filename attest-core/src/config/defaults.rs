// Single source of truth for all default values.

// --- Retrieval ---
pub const DEFAULT_RRF_K: u32 = 60;
pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_CANDIDATE_K: usize = 20;
pub const DEFAULT_RETRIEVER_TIMEOUT_MS: u64 = 300;

// --- Attribution ---
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_SKIP_STRUCTURAL_SENTENCES: bool = true;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 10_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_EMBEDDING_CACHE_TTL_SECS: u64 = 3_600; // 1 hour

// --- Sparse (BM25) ---
pub const DEFAULT_BM25_K1: f64 = 1.5;
pub const DEFAULT_BM25_B: f64 = 0.75;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
