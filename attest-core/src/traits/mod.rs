//! Seams to external collaborators and injected strategies.

mod attribution;
mod conflict;
mod index;

pub use attribution::IAttributionScorer;
pub use conflict::IConflictPredicate;
pub use index::{ILexicalIndex, IQueryEmbedder, IVectorIndex};
