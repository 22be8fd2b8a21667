//! Citation list: every attributed document once, in order of first appearance.

use attest_core::models::{
    AccessInfo, AccessState, CitationEntry, CitationList, ScoredHit, SentenceAttribution,
    SentenceAttributions,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct CitationListBuilder;

impl CitationListBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Walk attributions by ascending sentence index, appending unseen ids.
    ///
    /// Within one sentence the attribution order is kept. No relevance re-sort.
    pub fn build<'a, I>(&self, attributions: I) -> CitationList
    where
        I: IntoIterator<Item = &'a SentenceAttribution>,
    {
        let mut ordered: Vec<&SentenceAttribution> = attributions.into_iter().collect();
        ordered.sort_by_key(|a| a.sentence_index);

        let mut list = CitationList::new();
        for attribution in ordered {
            list.push(&attribution.document_id);
        }
        list
    }

    /// [`build`](Self::build) over the per-sentence mapper output.
    pub fn build_from_sentences(&self, sentences: &[SentenceAttributions]) -> CitationList {
        self.build(sentences.iter().flat_map(|s| s.attributions.iter()))
    }

    /// Resolve each cited id against the candidate set.
    ///
    /// An id with no matching candidate is rendered as "source unavailable":
    /// no title, no url, state `unavailable`. The citation itself is kept.
    pub fn entries(&self, list: &CitationList, candidates: &[ScoredHit]) -> Vec<CitationEntry> {
        list.iter()
            .map(|id| match candidates.iter().find(|c| c.id == id) {
                Some(hit) => CitationEntry {
                    document_id: id.to_string(),
                    title: non_empty(&hit.document_title),
                    url: non_empty(&hit.document_url),
                    access_info: AccessInfo {
                        state: hit.access_state,
                    },
                },
                None => CitationEntry {
                    document_id: id.to_string(),
                    title: None,
                    url: None,
                    access_info: AccessInfo {
                        state: AccessState::Unavailable,
                    },
                },
            })
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribution(sentence_index: usize, document_id: &str) -> SentenceAttribution {
        SentenceAttribution {
            sentence_index,
            document_id: document_id.to_string(),
            confidence_score: 0.9,
        }
    }

    #[test]
    fn first_appearance_by_sentence_index() {
        let attributions = [
            attribution(2, "c"),
            attribution(0, "b"),
            attribution(0, "a"),
            attribution(1, "b"),
            attribution(2, "a"),
        ];
        let list = CitationListBuilder.build(&attributions);
        assert_eq!(list.document_ids(), ["b", "a", "c"]);
    }

    #[test]
    fn empty_attributions_give_empty_list() {
        assert!(CitationListBuilder.build(&[]).is_empty());
        assert!(CitationListBuilder.build_from_sentences(&[]).is_empty());
    }

    #[test]
    fn builds_from_mapper_output() {
        let sentences = vec![
            SentenceAttributions {
                sentence_index: 0,
                attributions: vec![],
            },
            SentenceAttributions {
                sentence_index: 1,
                attributions: vec![attribution(1, "x"), attribution(1, "y")],
            },
        ];
        let list = CitationListBuilder.build_from_sentences(&sentences);
        assert_eq!(list.document_ids(), ["x", "y"]);
    }

    #[test]
    fn entries_carry_metadata_and_mark_unknown_ids_unavailable() {
        let mut list = CitationList::new();
        list.push("known");
        list.push("locked");
        list.push("gone");
        let candidates = [
            ScoredHit::new("known").with_document("Passport renewal", "https://gov.example/passport"),
            ScoredHit::new("locked")
                .with_document("Internal memo", "")
                .with_access_state(AccessState::Restricted),
        ];

        let entries = CitationListBuilder.entries(&list, &candidates);

        assert_eq!(entries[0].title.as_deref(), Some("Passport renewal"));
        assert_eq!(entries[0].access_info.state, AccessState::Available);
        assert_eq!(entries[1].url, None);
        assert_eq!(entries[1].access_info.state, AccessState::Restricted);
        assert_eq!(entries[2].document_id, "gone");
        assert_eq!(entries[2].title, None);
        assert_eq!(entries[2].access_info.state, AccessState::Unavailable);
    }
}
