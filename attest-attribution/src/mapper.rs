//! Maps generated sentences to the candidates that support them.
//!
//! Selection policy only: the similarity function is an injected
//! [`IAttributionScorer`]. A sentence keeps every candidate whose confidence
//! strictly exceeds the threshold; one with none keeps an empty list.

use std::collections::HashSet;

use attest_core::config::AttributionConfig;
use attest_core::errors::AttributionError;
use attest_core::models::{AttributionClaim, ScoredHit, SentenceAttribution, SentenceAttributions};
use attest_core::traits::IAttributionScorer;
use tracing::debug;

use crate::segmentation::is_structural;

#[derive(Debug, Clone, Copy)]
pub struct AttributionMapper {
    min_confidence: f64,
    skip_structural: bool,
}

impl Default for AttributionMapper {
    fn default() -> Self {
        Self::from_config(&AttributionConfig::default())
    }
}

impl AttributionMapper {
    /// Mapper with the given threshold. Structural segments are attributed like prose.
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence,
            skip_structural: false,
        }
    }

    pub fn from_config(config: &AttributionConfig) -> Self {
        Self {
            min_confidence: config.min_confidence,
            skip_structural: config.skip_structural_sentences,
        }
    }

    pub fn with_structural_skip(mut self, skip: bool) -> Self {
        self.skip_structural = skip;
        self
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// One entry per sentence, in sentence order.
    ///
    /// Within a sentence, attributions follow candidate order. A candidate id
    /// listed twice is scored once.
    pub fn map<S: AsRef<str>>(
        &self,
        sentences: &[S],
        candidates: &[ScoredHit],
        scorer: &dyn IAttributionScorer,
    ) -> Vec<SentenceAttributions> {
        let result: Vec<SentenceAttributions> = sentences
            .iter()
            .enumerate()
            .map(|(sentence_index, sentence)| {
                let sentence = sentence.as_ref();
                let attributions = if self.skip_structural && is_structural(sentence) {
                    Vec::new()
                } else {
                    self.score_sentence(sentence_index, sentence, candidates, scorer)
                };
                SentenceAttributions {
                    sentence_index,
                    attributions,
                }
            })
            .collect();

        debug!(
            sentences = sentences.len(),
            candidates = candidates.len(),
            attributed = result.iter().filter(|s| !s.is_unattributed()).count(),
            scorer = scorer.name(),
            threshold = self.min_confidence,
            "sentences mapped"
        );
        result
    }

    fn score_sentence(
        &self,
        sentence_index: usize,
        sentence: &str,
        candidates: &[ScoredHit],
        scorer: &dyn IAttributionScorer,
    ) -> Vec<SentenceAttribution> {
        let mut seen: HashSet<&str> = HashSet::new();
        candidates
            .iter()
            .filter(|c| c.is_active && seen.insert(c.id.as_str()))
            .filter_map(|candidate| {
                let confidence_score = clamp_confidence(scorer.score(sentence, candidate));
                (confidence_score > self.min_confidence).then(|| SentenceAttribution {
                    sentence_index,
                    document_id: candidate.id.clone(),
                    confidence_score,
                })
            })
            .collect()
    }

    /// Attribute from claims the generator made itself.
    ///
    /// Every claim is validated before any is applied: an index at or past
    /// `sentence_count` or a confidence outside [0.0, 1.0] fails the whole
    /// cycle. Valid claims then go through the same threshold as scored ones.
    pub fn attribute_explicit(
        &self,
        sentence_count: usize,
        claims: &[AttributionClaim],
    ) -> Result<Vec<SentenceAttributions>, AttributionError> {
        for claim in claims {
            if claim.sentence_index >= sentence_count {
                return Err(AttributionError::SentenceOutOfRange {
                    sentence_index: claim.sentence_index,
                    sentence_count,
                });
            }
            if !(0.0..=1.0).contains(&claim.confidence) {
                return Err(AttributionError::InvalidConfidence {
                    score: claim.confidence,
                });
            }
        }

        let mut result: Vec<SentenceAttributions> = (0..sentence_count)
            .map(|sentence_index| SentenceAttributions {
                sentence_index,
                attributions: Vec::new(),
            })
            .collect();

        for claim in claims.iter().filter(|c| c.confidence > self.min_confidence) {
            let slot = &mut result[claim.sentence_index].attributions;
            if slot.iter().any(|a| a.document_id == claim.document_id) {
                continue;
            }
            slot.push(SentenceAttribution {
                sentence_index: claim.sentence_index,
                document_id: claim.document_id.clone(),
                confidence_score: claim.confidence,
            });
        }

        Ok(result)
    }
}

/// Scorer output mapped into [0.0, 1.0]; NaN counts as no support.
fn clamp_confidence(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
