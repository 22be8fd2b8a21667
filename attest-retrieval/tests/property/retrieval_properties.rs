use attest_core::models::ScoredHit;
use attest_retrieval::{RankFuser, SourcePriorityResolver};
use proptest::prelude::*;

/// Metadata is a function of the id so an id looks the same in both lists.
fn hit(n: u8, rank: usize) -> ScoredHit {
    let hit = ScoredHit::new(format!("doc-{n:02}"))
        .with_rank(rank)
        .with_tier(n % 3 + 1);
    if n % 7 == 0 {
        hit.inactive()
    } else {
        hit
    }
}

fn ranked(ids: &[u8]) -> Vec<ScoredHit> {
    ids.iter().enumerate().map(|(i, n)| hit(*n, i + 1)).collect()
}

fn id_list() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..40, 0..25)
}

proptest! {
    #[test]
    fn fusion_is_deterministic(dense in id_list(), sparse in id_list(), k in 1u32..200) {
        let fuser = RankFuser::new(k);
        let first = fuser.fuse(&ranked(&dense), &ranked(&sparse));
        let second = fuser.fuse(&ranked(&dense), &ranked(&sparse));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fused_scores_are_sorted_and_bounded(dense in id_list(), sparse in id_list(), k in 1u32..200) {
        let fused = RankFuser::new(k).fuse(&ranked(&dense), &ranked(&sparse));
        let ceiling = 2.0 / (k as f64 + 1.0);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].rrf_score >= pair[1].rrf_score);
        }
        for result in &fused {
            prop_assert!(result.rrf_score > 0.0 && result.rrf_score <= ceiling + 1e-12);
            prop_assert!(result.hit.is_active);
        }
    }

    #[test]
    fn fused_ids_are_unique(dense in id_list(), sparse in id_list()) {
        let fused = RankFuser::default().fuse(&ranked(&dense), &ranked(&sparse));
        let mut ids: Vec<&str> = fused.iter().map(|f| f.id.as_str()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    #[test]
    fn appearing_in_both_lists_never_scores_lower(d in 1usize..50, s in 1usize..50, k in 1u32..200) {
        let target = ScoredHit::new("target");
        let fuser = RankFuser::new(k);
        let single = fuser.fuse(&[target.clone().with_rank(d)], &[]);
        let both = fuser.fuse(&[target.clone().with_rank(d)], &[target.with_rank(s)]);
        prop_assert!(both[0].rrf_score >= single[0].rrf_score);
    }

    #[test]
    fn authoritative_candidates_always_come_first(
        dense in id_list(),
        sparse in id_list(),
        top_k in 1usize..12,
    ) {
        let fused = RankFuser::default().fuse(&ranked(&dense), &ranked(&sparse));
        let candidates = SourcePriorityResolver::new(top_k).resolve(&fused);

        prop_assert!(candidates.len() <= top_k);
        let first_auxiliary = candidates
            .iter()
            .position(|c| !c.source_priority_tier.is_authoritative())
            .unwrap_or(candidates.len());
        prop_assert!(candidates[first_auxiliary..]
            .iter()
            .all(|c| !c.source_priority_tier.is_authoritative()));

        // Phase two only runs when phase one came up short.
        let authoritative_available = fused
            .iter()
            .filter(|f| f.hit.source_priority_tier.is_authoritative())
            .count();
        prop_assert_eq!(first_auxiliary, authoritative_available.min(top_k));
    }
}
