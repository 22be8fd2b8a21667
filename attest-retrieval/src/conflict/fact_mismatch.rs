//! Monetary amount disagreement between two passages on the same service.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use attest_core::models::{ConflictAssessment, ScoredHit};
use attest_core::traits::IConflictPredicate;
use regex::Regex;

/// Currency-prefixed (`$120`, `¥ 1,500`) or currency-suffixed (`120元`, `80 HKD`) amounts.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:[¥￥$€£]\s?(\d[\d,]*(?:\.\d+)?))|(?:(\d[\d,]*(?:\.\d+)?)\s?(?:元|(?:yuan|rmb|cny|usd|dollars|hkd|mop)\b))",
    )
    .unwrap()
});

/// Flags two passages that both state amounts but share none of them.
///
/// Passages with no amounts, or with at least one amount in common, are not flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactMismatchPredicate;

impl FactMismatchPredicate {
    pub fn new() -> Self {
        Self
    }
}

impl IConflictPredicate for FactMismatchPredicate {
    fn assess(&self, a: &ScoredHit, b: &ScoredHit) -> ConflictAssessment {
        let a_amounts = extract_amounts(&a.content);
        let b_amounts = extract_amounts(&b.content);

        if a_amounts.is_empty() || b_amounts.is_empty() || !a_amounts.is_disjoint(&b_amounts) {
            return ConflictAssessment::Unflagged;
        }

        ConflictAssessment::Flagged {
            reason: format!(
                "amount mismatch: {} vs {}",
                join(&a_amounts),
                join(&b_amounts)
            ),
        }
    }

    fn name(&self) -> &str {
        "fact_mismatch"
    }
}

/// Canonical amounts found in `text`. `1,500.00` and `1500` normalize to the same value.
pub fn extract_amounts(text: &str) -> BTreeSet<String> {
    AMOUNT_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.to_string())
        .collect()
}

fn join(amounts: &BTreeSet<String>) -> String {
    amounts.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(id: &str, content: &str) -> ScoredHit {
        ScoredHit::new(id).with_category("passport").with_content(content)
    }

    #[test]
    fn extracts_prefixed_and_suffixed_amounts() {
        let amounts = extract_amounts("Fee is ¥1,500.00, or 80 HKD, or 200元 at the counter. $5 extra.");
        let expected: BTreeSet<String> = ["1500", "80", "200", "5"].iter().map(|s| s.to_string()).collect();
        assert_eq!(amounts, expected);
    }

    #[test]
    fn bare_numbers_are_ignored() {
        assert!(extract_amounts("Bring 2 photos and wait 10 days.").is_empty());
    }

    #[test]
    fn disjoint_amounts_are_flagged() {
        let a = passage("a", "The application fee is ¥120.");
        let b = passage("b", "The application fee is 200 yuan.");
        match FactMismatchPredicate.assess(&a, &b) {
            ConflictAssessment::Flagged { reason } => {
                assert!(reason.contains("120"));
                assert!(reason.contains("200"));
            }
            ConflictAssessment::Unflagged => panic!("expected a flag"),
        }
    }

    #[test]
    fn shared_amount_is_not_flagged() {
        let a = passage("a", "Fee: ¥120 (express ¥300).");
        let b = passage("b", "Standard fee 120元.");
        assert_eq!(FactMismatchPredicate.assess(&a, &b), ConflictAssessment::Unflagged);
    }

    #[test]
    fn one_side_without_amounts_is_not_flagged() {
        let a = passage("a", "Fee: ¥120.");
        let b = passage("b", "Apply at the service counter.");
        assert_eq!(FactMismatchPredicate.assess(&a, &b), ConflictAssessment::Unflagged);
    }
}
