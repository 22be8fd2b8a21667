//! In-memory retrieval backends.

pub mod bm25;
pub mod flat_vector;

pub use bm25::Bm25Index;
pub use flat_vector::FlatVectorIndex;
