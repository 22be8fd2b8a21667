//! # attest-core
//!
//! Foundation crate for the attest engine.
//! Defines the retrieval/attribution data model, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AttestConfig;
pub use errors::{AttestError, AttestResult};
pub use models::{
    AccessState, CitationEntry, CitationList, ConflictFlag, FusedResult, ResponseEnvelope,
    RetrievalOutcome, ScoredHit, SentenceAttribution, SourceTier,
};
