use serde::{Deserialize, Serialize};

use super::AccessState;

/// Ordered, duplicate-free document ids referenced by a response.
///
/// Order is first appearance by ascending sentence index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationList {
    document_ids: Vec<String>,
}

impl CitationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `document_id` unless already present. Returns whether it was added.
    pub fn push(&mut self, document_id: &str) -> bool {
        if self.contains(document_id) {
            return false;
        }
        self.document_ids.push(document_id.to_string());
        true
    }

    pub fn contains(&self, document_id: &str) -> bool {
        self.document_ids.iter().any(|id| id == document_id)
    }

    pub fn document_ids(&self) -> &[String] {
        &self.document_ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.document_ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.document_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document_ids.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessInfo {
    pub state: AccessState,
}

/// A citation as rendered to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationEntry {
    pub document_id: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub access_info: AccessInfo,
}
