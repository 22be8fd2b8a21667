use serde::{Deserialize, Serialize};

/// One sentence-to-document link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAttribution {
    pub sentence_index: usize,
    pub document_id: String,
    /// In [0.0, 1.0].
    pub confidence_score: f64,
}

/// All attributions for one sentence. An empty list means "no external source used".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceAttributions {
    pub sentence_index: usize,
    pub attributions: Vec<SentenceAttribution>,
}

impl SentenceAttributions {
    pub fn is_unattributed(&self) -> bool {
        self.attributions.is_empty()
    }
}

/// A generator-supplied claim that a sentence drew on a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionClaim {
    pub sentence_index: usize,
    pub document_id: String,
    pub confidence: f64,
}

/// Sentence counts for the response cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionMetadata {
    pub total_sentences: usize,
    pub attributed_sentences: usize,
}
