use path_lemmatizer::presentation::config::{Environment, NormalizationStrategy, Settings};

#[test]
fn given_environment_names_when_parsing_then_aliases_are_accepted() {
    assert_eq!(Environment::try_from("local".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("Development".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_environment_when_parsing_then_returns_error() {
    let result = Environment::try_from("staging".to_string());

    assert!(result.is_err_and(|e| e.contains("staging")));
}

#[test]
fn given_environment_when_displayed_then_file_suffix_is_shown() {
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::default().as_str(), "local");
}

// Defaults and overrides share one test: both read process-wide variables.
#[test]
fn given_no_overrides_then_env_overrides_when_loading_then_values_follow_precedence() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.database.url, "postgres://localhost:5432");
    assert_eq!(settings.database.name, "kspd");
    assert_eq!(settings.batch.flush_size, 1000);
    assert_eq!(settings.batch.fetch_size, 1000);
    assert_eq!(settings.batch.limit, 0);
    assert_eq!(settings.normalizer.strategy, NormalizationStrategy::Morphological);
    assert_eq!(settings.normalizer.service_url, "http://localhost:5001");
    assert!(settings.normalizer.min_lemma_len.is_none());
    assert!(settings.notification.webhook_url.is_none());
    assert!(settings.version.is_none());

    // SAFETY: no other test in this binary touches these variables.
    unsafe {
        std::env::set_var("APP_BATCH__FLUSH_SIZE", "250");
        std::env::set_var("APP_DATABASE__NAME", "archive");
        std::env::set_var("APP_NORMALIZER__STRATEGY", "sentence");
        std::env::set_var("APP_VERSION", "1.0");
    }

    let settings = Settings::load(Environment::Test);

    unsafe {
        std::env::remove_var("APP_BATCH__FLUSH_SIZE");
        std::env::remove_var("APP_DATABASE__NAME");
        std::env::remove_var("APP_NORMALIZER__STRATEGY");
        std::env::remove_var("APP_VERSION");
    }

    let settings = settings.unwrap();
    assert_eq!(settings.batch.flush_size, 250);
    assert_eq!(settings.batch.options().flush_size, 250);
    assert_eq!(settings.database.name, "archive");
    assert_eq!(settings.normalizer.strategy, NormalizationStrategy::Sentence);
    assert_eq!(settings.version.as_deref(), Some("1.0"));
}
