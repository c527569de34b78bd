use path_lemmatizer::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_default_config_when_created_then_crate_logs_at_debug() {
    let config = TracingConfig::default();
    assert!(config.default_filter.starts_with("info"));
    assert!(config.default_filter.contains("path_lemmatizer=debug"));
}
