//! Lexical overlap between a sentence and a candidate passage.

use std::collections::HashSet;

use attest_core::models::ScoredHit;
use attest_core::text::tokenize;
use attest_core::traits::IAttributionScorer;

/// Fraction of the sentence's distinct tokens that also occur in the
/// candidate's title or content. A sentence without tokens scores 0.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermOverlapScorer;

impl TermOverlapScorer {
    pub fn new() -> Self {
        Self
    }
}

impl IAttributionScorer for TermOverlapScorer {
    fn score(&self, sentence: &str, candidate: &ScoredHit) -> f64 {
        let sentence_terms: HashSet<String> = tokenize(sentence).into_iter().collect();
        if sentence_terms.is_empty() {
            return 0.0;
        }
        let passage_terms: HashSet<String> = tokenize(&candidate.document_title)
            .into_iter()
            .chain(tokenize(&candidate.content))
            .collect();
        let shared = sentence_terms.intersection(&passage_terms).count();
        shared as f64 / sentence_terms.len() as f64
    }

    fn name(&self) -> &str {
        "term_overlap"
    }
}
