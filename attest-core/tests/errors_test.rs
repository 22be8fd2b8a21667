use attest_core::errors::*;

#[test]
fn unavailable_carries_retriever_and_reason() {
    let err = RetrievalError::Unavailable {
        retriever: "dense".into(),
        reason: "connection refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("dense"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn timeout_carries_deadline() {
    let err = RetrievalError::Timeout {
        retriever: "sparse".into(),
        timeout_ms: 300,
    };
    assert!(err.to_string().contains("300ms"));
}

#[test]
fn per_retriever_failures_are_recoverable() {
    assert!(RetrievalError::Unavailable {
        retriever: "dense".into(),
        reason: "down".into(),
    }
    .is_recoverable());
    assert!(RetrievalError::Timeout {
        retriever: "dense".into(),
        timeout_ms: 1,
    }
    .is_recoverable());
    assert!(!RetrievalError::Exhausted {
        dense: "a".into(),
        sparse: "b".into(),
    }
    .is_recoverable());
    assert!(!RetrievalError::Cancelled.is_recoverable());
    assert!(!RetrievalError::NoSignals.is_recoverable());
}

#[test]
fn out_of_range_carries_index_and_count() {
    let err = AttributionError::SentenceOutOfRange {
        sentence_index: 7,
        sentence_count: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

// --- From impls ---

#[test]
fn retrieval_error_converts_to_attest_error() {
    let err: AttestError = RetrievalError::Cancelled.into();
    assert!(matches!(err, AttestError::RetrievalError(_)));
}

#[test]
fn attribution_error_converts_to_attest_error() {
    let err: AttestError = AttributionError::InvalidConfidence { score: 1.2 }.into();
    assert!(matches!(err, AttestError::AttributionError(_)));
}

#[test]
fn config_error_converts_to_attest_error() {
    let err: AttestError = ConfigError::Parse {
        reason: "bad".into(),
    }
    .into();
    assert!(matches!(err, AttestError::ConfigError(_)));
}
