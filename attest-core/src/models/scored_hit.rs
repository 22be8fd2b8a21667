use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{AUTHORITATIVE_TIER, AUXILIARY_TIER};

/// Ordinal trust ranking of a document's origin. 1 = official; higher = less authority.
///
/// Ordering follows the numeric value, so `a < b` means `a` is MORE authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct SourceTier(u8);

impl SourceTier {
    pub const OFFICIAL: SourceTier = SourceTier(AUTHORITATIVE_TIER);
    pub const AUXILIARY: SourceTier = SourceTier(AUXILIARY_TIER);

    /// Tier 0 does not exist; it is clamped to the official tier.
    pub fn new(tier: u8) -> Self {
        Self(tier.max(AUTHORITATIVE_TIER))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_authoritative(self) -> bool {
        self.0 == AUTHORITATIVE_TIER
    }
}

impl From<u8> for SourceTier {
    fn from(tier: u8) -> Self {
        Self::new(tier)
    }
}

impl From<SourceTier> for u8 {
    fn from(tier: SourceTier) -> Self {
        tier.0
    }
}

impl Default for SourceTier {
    fn default() -> Self {
        Self::OFFICIAL
    }
}

/// Whether the underlying document can currently be opened by the reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessState {
    #[default]
    Available,
    Unavailable,
    Restricted,
}

/// A single retrieval result with its source metadata and list position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHit {
    /// Opaque unique identifier of a document chunk.
    pub id: String,
    /// 1-based position within the originating retrieval list.
    pub rank: usize,
    /// Retriever-native score. Never compared across retrievers.
    pub score: f64,
    pub source_priority_tier: SourceTier,
    /// Inactive hits are excluded from every downstream stage.
    pub is_active: bool,
    pub service_category: String,
    pub document_title: String,
    pub document_url: String,
    /// Used for tie-breaking only (newer wins).
    pub last_verified: DateTime<Utc>,
    /// Passage text handed to attribution scorers and conflict predicates.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub access_state: AccessState,
}

impl ScoredHit {
    /// An active, official hit with empty metadata, verified at the Unix epoch.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank: 1,
            score: 0.0,
            source_priority_tier: SourceTier::OFFICIAL,
            is_active: true,
            service_category: String::new(),
            document_title: String::new(),
            document_url: String::new(),
            last_verified: DateTime::<Utc>::default(),
            content: String::new(),
            access_state: AccessState::Available,
        }
    }

    pub fn with_rank(mut self, rank: usize) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_tier(mut self, tier: u8) -> Self {
        self.source_priority_tier = SourceTier::new(tier);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.service_category = category.into();
        self
    }

    pub fn with_document(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.document_title = title.into();
        self.document_url = url.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_last_verified(mut self, last_verified: DateTime<Utc>) -> Self {
        self.last_verified = last_verified;
        self
    }

    pub fn with_access_state(mut self, state: AccessState) -> Self {
        self.access_state = state;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Normalized category key used to group candidates into topical scopes.
    pub fn category_key(&self) -> String {
        self.service_category.trim().to_lowercase()
    }
}
