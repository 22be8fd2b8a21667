use attest_core::models::*;
use chrono::{TimeZone, Utc};

#[test]
fn tier_zero_clamps_to_official() {
    assert_eq!(SourceTier::new(0), SourceTier::OFFICIAL);
    assert!(SourceTier::new(1).is_authoritative());
    assert!(!SourceTier::new(3).is_authoritative());
}

#[test]
fn lower_tier_value_orders_first() {
    assert!(SourceTier::OFFICIAL < SourceTier::AUXILIARY);
}

#[test]
fn scored_hit_builder_sets_fields() {
    let verified = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let hit = ScoredHit::new("doc-1")
        .with_rank(3)
        .with_tier(2)
        .with_category(" Passport ")
        .with_last_verified(verified)
        .inactive();
    assert_eq!(hit.rank, 3);
    assert_eq!(hit.source_priority_tier.value(), 2);
    assert_eq!(hit.category_key(), "passport");
    assert_eq!(hit.last_verified, verified);
    assert!(!hit.is_active);
}

#[test]
fn citation_list_rejects_duplicates_and_keeps_order() {
    let mut list = CitationList::new();
    assert!(list.push("b"));
    assert!(list.push("a"));
    assert!(!list.push("b"));
    assert_eq!(list.document_ids(), &["b".to_string(), "a".to_string()]);
}

#[test]
fn conflict_flag_serializes_with_wire_field_names() {
    let flag = ConflictFlag {
        document_id_a: "a".into(),
        document_id_b: "b".into(),
        reason: "fee differs".into(),
        resolution: ConflictResolution::Primary {
            document_id: "a".into(),
        },
    };
    let json = serde_json::to_value(&flag).unwrap();
    assert_eq!(json["document_id_a"], "a");
    assert_eq!(json["document_id_b"], "b");
    assert_eq!(json["resolution"]["kind"], "primary");
}

#[test]
fn access_state_serializes_lowercase() {
    let info = AccessInfo {
        state: AccessState::Unavailable,
    };
    let json = serde_json::to_value(info).unwrap();
    assert_eq!(json["state"], "unavailable");
}

#[test]
fn deserialized_tier_zero_clamps_to_official() {
    let tier: SourceTier = serde_json::from_str("0").unwrap();
    assert_eq!(tier, SourceTier::OFFICIAL);
    assert!(tier.is_authoritative());
}

#[test]
fn tier_serializes_as_plain_number() {
    assert_eq!(serde_json::to_string(&SourceTier::new(3)).unwrap(), "3");
    let hit: ScoredHit = serde_json::from_value(serde_json::json!({
        "id": "a",
        "rank": 1,
        "score": 0.4,
        "source_priority_tier": 0,
        "is_active": true,
        "service_category": "",
        "document_title": "",
        "document_url": "",
        "last_verified": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert!(hit.source_priority_tier.is_authoritative());
}

#[test]
fn retrieval_mode_uses_snake_case() {
    assert_eq!(serde_json::to_string(&RetrievalMode::SparseOnly).unwrap(), "\"sparse_only\"");
}
