use serde::{Deserialize, Serialize};

/// Outcome of comparing two candidates with a conflict predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictAssessment {
    Unflagged,
    Flagged { reason: String },
}

/// Which side of a flagged conflict is presented first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConflictResolution {
    /// Higher tier, or equal tier and more recently verified.
    Primary { document_id: String },
    /// Same tier and same verification time: both stand equally.
    Unresolved,
}

/// Two candidates whose content disagrees. Both stay in the candidate set.
///
/// When resolved, `document_id_a` is the primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictFlag {
    pub document_id_a: String,
    pub document_id_b: String,
    pub reason: String,
    pub resolution: ConflictResolution,
}

impl ConflictFlag {
    pub fn involves(&self, document_id: &str) -> bool {
        self.document_id_a == document_id || self.document_id_b == document_id
    }
}
