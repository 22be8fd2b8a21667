use attest_core::text::{normalize_query, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(s in "[ \t\na-zA-Z0-9À-ÿ]{0,80}") {
        let once = normalize_query(&s);
        prop_assert_eq!(normalize_query(&once), once);
    }

    #[test]
    fn normalized_text_has_no_edge_or_double_spaces(s in "[ \t\na-zA-Z]{0,60}") {
        let normalized = normalize_query(&s);
        prop_assert!(!normalized.starts_with(' ') && !normalized.ends_with(' '));
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn tokens_are_lowercase_and_non_empty(s in "[a-zA-Z0-9 ,.!?]{0,60}") {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    #[test]
    fn tokenize_ignores_case_and_spacing(s in "[a-zA-Z ]{0,60}") {
        prop_assert_eq!(tokenize(&s), tokenize(&normalize_query(&s)));
    }
}
