/// Attribution subsystem errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributionError {
    #[error("sentence index {sentence_index} out of range for {sentence_count} sentences")]
    SentenceOutOfRange {
        sentence_index: usize,
        sentence_count: usize,
    },

    #[error("confidence score {score} outside [0.0, 1.0]")]
    InvalidConfidence { score: f64 },

    #[error("citation list inconsistent: missing {missing:?}, extraneous {extraneous:?}")]
    CitationMismatch {
        missing: Vec<String>,
        extraneous: Vec<String>,
    },
}
