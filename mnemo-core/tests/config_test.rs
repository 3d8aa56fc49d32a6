use std::collections::HashMap;

use mnemo_core::config::MnemoConfig;
use mnemo_core::errors::ConfigError;

#[test]
fn defaults_are_valid() {
    let config = MnemoConfig::default();
    config.validate().unwrap();
    assert_eq!(config.retry.max_attempts, 3);
    assert_eq!(config.retry.delays_ms, vec![0, 200, 500]);
    assert_eq!(config.retry.retryable_statuses, vec![429, 500, 502, 503]);
    assert_eq!(config.retrieval.top_k, 5);
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = MnemoConfig::from_toml(
        r#"
        [retrieval]
        top_k = 8
        distance_threshold = 0.35

        [embedding]
        provider = "tfidf"
        dimensions = 256
        "#,
    )
    .unwrap();
    assert_eq!(config.retrieval.top_k, 8);
    assert!((config.retrieval.distance_threshold - 0.35).abs() < 1e-9);
    assert_eq!(config.embedding.provider, "tfidf");
    assert_eq!(config.memory.similar_top_k, 5);
    assert!(config.vocabulary.identity_keys.iter().any(|k| k == "name"));
}

#[test]
fn invalid_threshold_rejected() {
    let err = MnemoConfig::from_toml("[retrieval]\ndistance_threshold = 3.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "retrieval.distance_threshold"));
}

#[test]
fn unknown_provider_rejected() {
    let err = MnemoConfig::from_toml("[embedding]\nprovider = \"onnx\"\n").unwrap_err();
    assert!(err.to_string().contains("onnx"));
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = MnemoConfig::from_toml("[retrieval\ntop_k = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_apply() {
    let env: HashMap<&str, &str> = [
        ("MNEMO_TOP_K", "12"),
        ("MNEMO_DISTANCE_THRESHOLD", "0.25"),
        ("MNEMO_EMBEDDING_PROVIDER", "tfidf"),
        ("MNEMO_DB_PATH", "/tmp/mnemo.db"),
    ]
    .into_iter()
    .collect();

    let mut config = MnemoConfig::default();
    config.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.retrieval.top_k, 12);
    assert!((config.retrieval.distance_threshold - 0.25).abs() < 1e-9);
    assert_eq!(config.embedding.provider, "tfidf");
    assert_eq!(config.storage.db_path.as_deref(), Some("/tmp/mnemo.db"));
}

#[test]
fn unparseable_env_numbers_are_ignored() {
    let mut config = MnemoConfig::default();
    config.apply_env_overrides(|k| (k == "MNEMO_TOP_K").then(|| "lots".to_string()));
    assert_eq!(config.retrieval.top_k, 5);
}
