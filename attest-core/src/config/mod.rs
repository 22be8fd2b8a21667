//! Configuration for every attest subsystem.
//!
//! All sections default individually, so a partial (or empty) TOML document
//! yields a fully populated config.

mod attribution_config;
mod cache_config;
pub mod defaults;
mod observability_config;
mod retrieval_config;
mod sparse_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use attribution_config::AttributionConfig;
pub use cache_config::CacheConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use sparse_config::SparseConfig;

use crate::errors::{AttestResult, ConfigError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AttestConfig {
    pub retrieval: RetrievalConfig,
    pub attribution: AttributionConfig,
    pub cache: CacheConfig,
    pub sparse: SparseConfig,
    pub observability: ObservabilityConfig,
}

impl AttestConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(input: &str) -> AttestResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AttestResult<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&input)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> AttestResult<()> {
        let r = &self.retrieval;
        if r.rrf_k == 0 {
            return Err(invalid("retrieval.rrf_k", "must be positive"));
        }
        if r.top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be positive"));
        }
        if r.candidate_k == 0 {
            return Err(invalid("retrieval.candidate_k", "must be positive"));
        }
        if r.retriever_timeout_ms == 0 {
            return Err(invalid("retrieval.retriever_timeout_ms", "must be positive"));
        }

        let a = &self.attribution;
        if !(0.0..=1.0).contains(&a.min_confidence) {
            return Err(invalid("attribution.min_confidence", "must be within [0.0, 1.0]"));
        }

        let s = &self.sparse;
        if !s.k1.is_finite() || s.k1 < 0.0 {
            return Err(invalid("sparse.k1", "must be a non-negative number"));
        }
        if !(0.0..=1.0).contains(&s.b) {
            return Err(invalid("sparse.b", "must be within [0.0, 1.0]"));
        }

        let c = &self.cache;
        if c.enabled && (c.ttl_secs == 0 || c.embedding_ttl_secs == 0) {
            return Err(invalid("cache.ttl_secs", "must be positive when the cache is enabled"));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::AttestError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
