use mnemo_core::errors::*;

#[test]
fn validation_error_carries_field_and_reason() {
    let err = MnemoError::validation("question", "must not be empty");
    let msg = err.to_string();
    assert!(msg.contains("question"));
    assert!(msg.contains("must not be empty"));
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(err.http_status(), 400);
}

#[test]
fn domain_error_maps_to_422() {
    let err = MnemoError::domain("fact key is reserved");
    assert_eq!(err.category(), ErrorCategory::Domain);
    assert_eq!(err.http_status(), 422);
}

// --- From impls ---

#[test]
fn storage_error_converts_to_infrastructure() {
    let err: MnemoError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, MnemoError::StorageError(_)));
    assert_eq!(err.category(), ErrorCategory::Infrastructure);
    assert_eq!(err.http_status(), 502);
}

#[test]
fn completion_error_maps_to_502() {
    let err: MnemoError = CompletionError::HttpStatus {
        status: 503,
        body: "overloaded".into(),
    }
    .into();
    assert_eq!(err.http_status(), 502);
    assert_eq!(err.upstream_status(), Some(503));
    assert!(err.is_transient());
}

#[test]
fn embedding_dimension_mismatch_is_not_transient() {
    let err: MnemoError = EmbeddingError::DimensionMismatch {
        expected: 1536,
        actual: 384,
    }
    .into();
    assert!(!err.is_transient());
    assert!(err.to_string().contains("1536"));
}

#[test]
fn timeouts_and_resets_are_transient() {
    let timeout: MnemoError = EmbeddingError::Timeout.into();
    let reset: MnemoError = CompletionError::ConnectionReset {
        reason: "os error 104".into(),
    }
    .into();
    assert!(timeout.is_transient());
    assert!(reset.is_transient());
}

#[test]
fn config_error_is_app_class() {
    let err: MnemoError = ConfigError::ValidationFailed {
        field: "retrieval.top_k".into(),
        message: "must be at least 1".into(),
    }
    .into();
    assert_eq!(err.category(), ErrorCategory::App);
    assert_eq!(err.http_status(), 500);
}
