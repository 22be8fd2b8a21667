//! # attest-retrieval
//!
//! The retrieval half of a response cycle. Dense and sparse search run in
//! parallel, their rankings are fused with Reciprocal Rank Fusion, candidates
//! are arbitrated by source tier, and conflicting sources are flagged.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── DenseRetriever  (IVectorIndex + deadline)  ┐ tokio::join!
//! ├── SparseRetriever (ILexicalIndex + deadline) ┘
//! ├── RankFuser               (RRF, deterministic tie-breaks)
//! ├── SourcePriorityResolver  (authoritative first, auxiliary fallback)
//! ├── ConflictDetector        (IConflictPredicate per service category)
//! └── ResultCache / EmbeddingCache (moka, TTL)
//! ```
//!
//! `index` holds in-memory BM25 and flat cosine backends for tests and small corpora.

pub mod cache;
pub mod cancellation;
pub mod conflict;
pub mod engine;
pub mod index;
pub mod ranking;
pub mod search;

pub use cache::{EmbeddingCache, ResultCache};
pub use cancellation::CancellationToken;
pub use conflict::{ConflictDetector, FactMismatchPredicate};
pub use engine::{RetrievalEngine, RetrievalQuery};
pub use index::{Bm25Index, FlatVectorIndex};
pub use ranking::SourcePriorityResolver;
pub use search::{DenseRetriever, RankFuser, SparseRetriever};
