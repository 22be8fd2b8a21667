use std::collections::HashSet;

use attest_attribution::{
    validate_consistency, AttributionMapper, CitationListBuilder, EnvelopeAssembler,
};
use attest_core::models::{RetrievalMode, RetrievalOutcome, ScoredHit};
use attest_core::traits::IAttributionScorer;
use proptest::prelude::*;

/// Deterministic pseudo-score from the sentence and candidate text.
struct HashScorer;

impl IAttributionScorer for HashScorer {
    fn score(&self, sentence: &str, candidate: &ScoredHit) -> f64 {
        let mixed = sentence
            .bytes()
            .chain(candidate.id.bytes())
            .fold(17u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
        (mixed % 1000) as f64 / 999.0
    }
    fn name(&self) -> &str {
        "hash"
    }
}

fn outcome(ids: &[u8]) -> RetrievalOutcome {
    RetrievalOutcome {
        fused: Vec::new(),
        candidates: ids.iter().map(|n| ScoredHit::new(format!("doc-{n}"))).collect(),
        conflicts: Vec::new(),
        mode: RetrievalMode::Hybrid,
        degradations: Vec::new(),
        from_cache: false,
    }
}

proptest! {
    #[test]
    fn citations_round_trip_with_attributions(
        sentences in prop::collection::vec("[a-z ]{1,30}", 0..12),
        ids in prop::collection::vec(0u8..20, 0..10),
        threshold in 0.0f64..1.0,
    ) {
        let assembler = EnvelopeAssembler::new(AttributionMapper::new(threshold));
        let envelope = assembler.assemble(&outcome(&ids), &sentences, &HashScorer).unwrap();

        prop_assert!(validate_consistency(&envelope).is_ok());

        let attributed: HashSet<&str> = envelope
            .sentence_attributions
            .iter()
            .map(|a| a.document_id.as_str())
            .collect();
        let cited: Vec<&str> = envelope.cited_ids().collect();
        let cited_set: HashSet<&str> = cited.iter().copied().collect();
        prop_assert_eq!(cited.len(), cited_set.len());
        prop_assert_eq!(attributed, cited_set);
        prop_assert_eq!(envelope.no_sources, cited.is_empty());
    }

    #[test]
    fn every_kept_attribution_clears_the_threshold(
        sentences in prop::collection::vec("[a-z]{1,12}", 1..8),
        ids in prop::collection::vec(0u8..20, 1..8),
        threshold in 0.0f64..1.0,
    ) {
        let mapped = AttributionMapper::new(threshold).map(&sentences, &outcome(&ids).candidates, &HashScorer);
        prop_assert_eq!(mapped.len(), sentences.len());
        for (index, sentence) in mapped.iter().enumerate() {
            prop_assert_eq!(sentence.sentence_index, index);
            for attribution in &sentence.attributions {
                prop_assert!(attribution.confidence_score > threshold);
                prop_assert!(attribution.confidence_score <= 1.0);
            }
        }
    }

    #[test]
    fn no_candidates_means_nothing_is_attributed(
        sentences in prop::collection::vec(".{0,40}", 0..10),
    ) {
        let envelope = EnvelopeAssembler::default()
            .assemble(&outcome(&[]), &sentences, &HashScorer)
            .unwrap();
        prop_assert!(envelope.sentence_attributions.is_empty());
        prop_assert!(envelope.citation_list.is_empty());
        prop_assert!(envelope.no_sources);
        prop_assert_eq!(envelope.metadata.total_sentences, sentences.len());
    }

    #[test]
    fn citation_order_is_first_appearance(
        sentences in prop::collection::vec("[a-z]{1,10}", 1..10),
        ids in prop::collection::vec(0u8..20, 1..10),
    ) {
        let mapped = AttributionMapper::new(0.3).map(&sentences, &outcome(&ids).candidates, &HashScorer);
        let list = CitationListBuilder::new().build_from_sentences(&mapped);

        let mut expected: Vec<&str> = Vec::new();
        for attribution in mapped.iter().flat_map(|s| s.attributions.iter()) {
            if !expected.contains(&attribution.document_id.as_str()) {
                expected.push(&attribution.document_id);
            }
        }
        prop_assert_eq!(list.document_ids().to_vec(), expected.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }
}
