//! Response envelope assembly and the citation/attribution round-trip check.

use std::collections::HashSet;

use attest_core::errors::{AttestResult, AttributionError};
use attest_core::models::{
    AttributionClaim, AttributionMetadata, ResponseEnvelope, RetrievalOutcome, SentenceAttribution,
    SentenceAttributions,
};
use attest_core::traits::IAttributionScorer;
use attest_observability::tracing_setup::events;
use tracing::warn;
use uuid::Uuid;

use crate::citation::CitationListBuilder;
use crate::mapper::AttributionMapper;

/// Runs mapping and citation building for one response and packs the envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeAssembler {
    mapper: AttributionMapper,
    citations: CitationListBuilder,
}

impl EnvelopeAssembler {
    pub fn new(mapper: AttributionMapper) -> Self {
        Self {
            mapper,
            citations: CitationListBuilder::new(),
        }
    }

    pub fn mapper(&self) -> &AttributionMapper {
        &self.mapper
    }

    /// Score every sentence against the outcome's candidates and assemble.
    pub fn assemble<S: AsRef<str>>(
        &self,
        outcome: &RetrievalOutcome,
        sentences: &[S],
        scorer: &dyn IAttributionScorer,
    ) -> AttestResult<ResponseEnvelope> {
        let attributions = self.mapper.map(sentences, &outcome.candidates, scorer);
        self.pack(outcome, &attributions)
    }

    /// Assemble from attribution claims supplied by the generator.
    pub fn assemble_from_claims(
        &self,
        outcome: &RetrievalOutcome,
        sentence_count: usize,
        claims: &[AttributionClaim],
    ) -> AttestResult<ResponseEnvelope> {
        let attributions = self.mapper.attribute_explicit(sentence_count, claims)?;
        self.pack(outcome, &attributions)
    }

    /// Build the envelope from per-sentence attributions and validate it.
    pub fn pack(
        &self,
        outcome: &RetrievalOutcome,
        attributions: &[SentenceAttributions],
    ) -> AttestResult<ResponseEnvelope> {
        let list = self.citations.build_from_sentences(attributions);
        let citation_list = self.citations.entries(&list, &outcome.candidates);

        let mut flat: Vec<SentenceAttribution> = attributions
            .iter()
            .flat_map(|s| s.attributions.iter().cloned())
            .collect();
        flat.sort_by_key(|a| a.sentence_index);

        let metadata = AttributionMetadata {
            total_sentences: attributions.len(),
            attributed_sentences: attributions.iter().filter(|s| !s.is_unattributed()).count(),
        };

        let envelope = ResponseEnvelope {
            response_id: Uuid::new_v4(),
            sentence_attributions: flat,
            no_sources: citation_list.is_empty(),
            citation_list,
            conflicts: outcome.conflicts.clone(),
            retrieval_mode: outcome.mode,
            metadata,
        };

        validate_consistency(&envelope)?;
        events::citations_built(
            metadata.total_sentences,
            metadata.attributed_sentences,
            envelope.citation_list.len(),
        );
        Ok(envelope)
    }
}

/// Check the round trip between `sentence_attributions` and `citation_list`.
///
/// Every attributed document must be cited and every cited document must be
/// attributed, with no duplicate citations. Indices must fall inside the
/// sentence count and confidences inside [0.0, 1.0].
pub fn validate_consistency(envelope: &ResponseEnvelope) -> Result<(), AttributionError> {
    let sentence_count = envelope.metadata.total_sentences;
    for attribution in &envelope.sentence_attributions {
        if attribution.sentence_index >= sentence_count {
            return Err(AttributionError::SentenceOutOfRange {
                sentence_index: attribution.sentence_index,
                sentence_count,
            });
        }
        if !(0.0..=1.0).contains(&attribution.confidence_score) {
            return Err(AttributionError::InvalidConfidence {
                score: attribution.confidence_score,
            });
        }
    }

    let attributed: HashSet<&str> = envelope
        .sentence_attributions
        .iter()
        .map(|a| a.document_id.as_str())
        .collect();

    let mut cited: HashSet<&str> = HashSet::new();
    let mut extraneous: Vec<String> = Vec::new();
    for id in envelope.cited_ids() {
        if !cited.insert(id) || !attributed.contains(id) {
            extraneous.push(id.to_string());
        }
    }

    let mut missing: Vec<String> = attributed
        .iter()
        .filter(|id| !cited.contains(*id))
        .map(|id| id.to_string())
        .collect();
    missing.sort();

    if missing.is_empty() && extraneous.is_empty() {
        return Ok(());
    }
    warn!(?missing, ?extraneous, "citation list inconsistent with attributions");
    Err(AttributionError::CitationMismatch {
        missing,
        extraneous,
    })
}
