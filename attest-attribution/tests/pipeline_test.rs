//! End-to-end response cycle: retrieval over in-memory backends, then
//! attribution of a pre-generated answer.

use std::sync::Arc;

use attest_attribution::{
    split_with_basic_processing, validate_consistency, EnvelopeAssembler, TermOverlapScorer,
};
use attest_core::config::AttestConfig;
use attest_core::models::{AccessState, ConflictResolution, RetrievalMode, ScoredHit};
use attest_retrieval::{Bm25Index, FlatVectorIndex, RetrievalEngine, RetrievalQuery};

fn engine(config: &AttestConfig) -> RetrievalEngine {
    let passages = vec![
        (
            ScoredHit::new("permit-2024")
                .with_tier(1)
                .with_category("travel permit")
                .with_document("Travel permit fees", "https://gov.example/permit")
                .with_last_verified("2024-05-01T00:00:00Z".parse().unwrap())
                .with_content("The travel permit fee is 60元 per permit."),
            vec![1.0, 0.0, 0.0],
        ),
        (
            ScoredHit::new("permit-forum")
                .with_tier(2)
                .with_category("travel permit")
                .with_document("Forum thread", "https://forum.example/t/1")
                .with_last_verified("2024-06-01T00:00:00Z".parse().unwrap())
                .with_content("Someone said the travel permit fee is 80元 now."),
            vec![0.9, 0.1, 0.0],
        ),
        (
            ScoredHit::new("hukou")
                .with_category("household registration")
                .with_content("Household registration transfers are handled at the police station."),
            vec![0.0, 0.0, 1.0],
        ),
    ];

    let mut lexical = Bm25Index::new(&config.sparse);
    let mut vectors = FlatVectorIndex::new(3);
    for (hit, embedding) in passages {
        lexical.add(hit.clone());
        vectors.insert(hit, embedding).unwrap();
    }
    RetrievalEngine::new(Arc::new(vectors), Arc::new(lexical), config)
}

#[tokio::test]
async fn full_cycle_attributes_cites_and_flags() {
    let config = AttestConfig::default();
    let outcome = engine(&config)
        .retrieve(&RetrievalQuery::new("travel permit fee").with_embedding(vec![1.0, 0.0, 0.0]))
        .await
        .unwrap();

    assert_eq!(outcome.mode, RetrievalMode::Hybrid);
    assert_eq!(outcome.candidates[0].id, "permit-2024");
    assert_eq!(outcome.conflicts.len(), 1);
    assert_eq!(
        outcome.conflicts[0].resolution,
        ConflictResolution::Primary {
            document_id: "permit-2024".into()
        }
    );

    let answer = "## Fees\n\nThe travel permit fee is 60元 per permit.\n\nHave a pleasant trip!";
    let sentences = split_with_basic_processing(answer);
    let envelope = EnvelopeAssembler::default()
        .assemble(&outcome, &sentences, &TermOverlapScorer)
        .unwrap();

    validate_consistency(&envelope).unwrap();
    assert_eq!(envelope.metadata.total_sentences, 3);
    let first_cited = &envelope.citation_list[0];
    assert_eq!(first_cited.document_id, "permit-2024");
    assert_eq!(first_cited.title.as_deref(), Some("Travel permit fees"));
    assert_eq!(first_cited.access_info.state, AccessState::Available);
    assert!(envelope
        .sentence_attributions
        .iter()
        .all(|a| a.sentence_index == 1));
    assert_eq!(envelope.conflicts, outcome.conflicts);
}

#[tokio::test]
async fn no_match_cycle_yields_no_sources() {
    let config = AttestConfig::default();
    let outcome = engine(&config)
        .retrieve(&RetrievalQuery::new("marriage certificate").with_embedding(vec![0.0, 1.0, 0.0]))
        .await
        .unwrap();
    // Vector search still returns candidates, but none supports the sentence.
    let envelope = EnvelopeAssembler::default()
        .assemble(&outcome, &["I could not find anything about that."], &TermOverlapScorer)
        .unwrap();

    assert!(envelope.no_sources);
    assert!(envelope.citation_list.is_empty());
    assert!(envelope.sentence_attributions.is_empty());
}
