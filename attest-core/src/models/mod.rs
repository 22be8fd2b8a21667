//! Per-query data model. Every value here lives for one query/response cycle.

mod attribution;
mod citation;
mod conflict;
mod degradation_event;
mod envelope;
mod fused_result;
mod retrieval_outcome;
mod scored_hit;

pub use attribution::{
    AttributionClaim, AttributionMetadata, SentenceAttribution, SentenceAttributions,
};
pub use citation::{AccessInfo, CitationEntry, CitationList};
pub use conflict::{ConflictAssessment, ConflictFlag, ConflictResolution};
pub use degradation_event::DegradationEvent;
pub use envelope::ResponseEnvelope;
pub use fused_result::{ContributingRanks, FusedResult};
pub use retrieval_outcome::{RetrievalMode, RetrievalOutcome};
pub use scored_hit::{AccessState, ScoredHit, SourceTier};
