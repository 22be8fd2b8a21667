use serde::{Deserialize, Serialize};

use super::defaults;

/// BM25 parameters for the in-memory lexical index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SparseConfig {
    /// Term-frequency saturation.
    pub k1: f64,
    /// Length normalization in [0, 1].
    pub b: f64,
}

impl Default for SparseConfig {
    fn default() -> Self {
        Self {
            k1: defaults::DEFAULT_BM25_K1,
            b: defaults::DEFAULT_BM25_B,
        }
    }
}
