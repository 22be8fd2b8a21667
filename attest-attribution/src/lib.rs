//! # attest-attribution
//!
//! The attribution half of a response cycle: every generated sentence is
//! linked to the candidates that support it, the citation list is derived
//! from those links, and everything is packed into a [`ResponseEnvelope`].
//!
//! ```text
//! sentences ──► AttributionMapper ──► CitationListBuilder ──► EnvelopeAssembler
//!                (IAttributionScorer)                          (validate_consistency)
//! ```
//!
//! [`ResponseEnvelope`]: attest_core::models::ResponseEnvelope

pub mod citation;
pub mod envelope;
pub mod mapper;
pub mod scorer;
pub mod segmentation;

pub use citation::CitationListBuilder;
pub use envelope::{validate_consistency, EnvelopeAssembler};
pub use mapper::AttributionMapper;
pub use scorer::TermOverlapScorer;
pub use segmentation::{is_structural, split_paragraphs, split_with_basic_processing};
