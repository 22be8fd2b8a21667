use serde::{Deserialize, Serialize};

use super::defaults;

/// Attribution subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributionConfig {
    /// Attributions are retained only when confidence strictly exceeds this value.
    pub min_confidence: f64,
    /// Headings, rules, fences and similar one-line structural segments get no citation.
    pub skip_structural_sentences: bool,
}

impl Default for AttributionConfig {
    fn default() -> Self {
        Self {
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
            skip_structural_sentences: defaults::DEFAULT_SKIP_STRUCTURAL_SENTENCES,
        }
    }
}
