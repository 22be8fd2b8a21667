use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AttributionMetadata, CitationEntry, ConflictFlag, RetrievalMode, SentenceAttribution,
};

/// Attribution fields added to the chat system's response. No field overlaps
/// with the host response format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub response_id: Uuid,
    /// Flattened, ordered by sentence index then candidate order.
    pub sentence_attributions: Vec<SentenceAttribution>,
    pub citation_list: Vec<CitationEntry>,
    pub conflicts: Vec<ConflictFlag>,
    pub no_sources: bool,
    pub retrieval_mode: RetrievalMode,
    pub metadata: AttributionMetadata,
}

impl ResponseEnvelope {
    pub fn to_json(&self) -> crate::errors::AttestResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn cited_ids(&self) -> impl Iterator<Item = &str> {
        self.citation_list.iter().map(|c| c.document_id.as_str())
    }
}
