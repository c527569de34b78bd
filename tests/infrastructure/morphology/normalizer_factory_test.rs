use std::io::Write;

use path_lemmatizer::application::services::{
    MORPHOLOGICAL_MIN_LEMMA_LEN, SENTENCE_MIN_LEMMA_LEN, Tokenizer,
};
use path_lemmatizer::infrastructure::morphology::{NormalizerFactory, NormalizerFactoryError};
use path_lemmatizer::presentation::config::{NormalizationStrategy, NormalizerSettings};

fn settings(strategy: NormalizationStrategy) -> NormalizerSettings {
    NormalizerSettings {
        strategy,
        service_url: "http://localhost:5001".to_string(),
        dictionary_path: None,
        min_lemma_len: None,
    }
}

#[test]
fn given_morphological_strategy_when_creating_then_default_floor_is_used() {
    let normalizer = NormalizerFactory::create(&settings(NormalizationStrategy::Morphological))
        .unwrap();

    assert_eq!(normalizer.strategy_name(), "morphological");
    assert_eq!(normalizer.min_lemma_len(), MORPHOLOGICAL_MIN_LEMMA_LEN);
}

#[test]
fn given_sentence_strategy_when_creating_then_default_floor_is_used() {
    let normalizer = NormalizerFactory::create(&settings(NormalizationStrategy::Sentence)).unwrap();

    assert_eq!(normalizer.strategy_name(), "sentence");
    assert_eq!(normalizer.min_lemma_len(), SENTENCE_MIN_LEMMA_LEN);
}

#[test]
fn given_min_lemma_len_override_when_creating_then_it_is_applied() {
    let mut settings = settings(NormalizationStrategy::Sentence);
    settings.min_lemma_len = Some(5);

    let normalizer = NormalizerFactory::create(&settings).unwrap();

    assert_eq!(normalizer.min_lemma_len(), 5);
}

#[test]
fn given_zero_min_lemma_len_when_creating_then_returns_error() {
    let mut settings = settings(NormalizationStrategy::Morphological);
    settings.min_lemma_len = Some(0);

    let result = NormalizerFactory::create(&settings);

    assert!(matches!(result, Err(NormalizerFactoryError::InvalidMinLemmaLen)));
}

#[test]
fn given_missing_dictionary_file_when_creating_then_returns_error() {
    let mut settings = settings(NormalizationStrategy::Morphological);
    settings.dictionary_path = Some("/nonexistent/uk.tsv".to_string());

    let result = NormalizerFactory::create(&settings);

    assert!(matches!(
        result,
        Err(NormalizerFactoryError::InitializationFailed(_))
    ));
}

#[tokio::test]
async fn given_dictionary_path_when_creating_then_dictionary_backs_the_normalizer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "накази\tнаказ\tNOUN,inan,masc plur,nomn").unwrap();
    writeln!(file, "наказ\tнаказ\tNOUN,inan,masc sing,nomn").unwrap();
    let mut settings = settings(NormalizationStrategy::Morphological);
    settings.dictionary_path = Some(file.path().display().to_string());

    let normalizer = NormalizerFactory::create(&settings).unwrap();
    let lemmas = normalizer
        .normalize(&["накази".to_string()], &Tokenizer::default())
        .await
        .unwrap();

    assert_eq!(lemmas.to_vec(), vec!["наказ"]);
}

#[test]
fn given_empty_dictionary_path_when_creating_then_service_backend_is_used() {
    let mut settings = settings(NormalizationStrategy::Morphological);
    settings.dictionary_path = Some(String::new());

    let result = NormalizerFactory::create(&settings);

    assert!(result.is_ok());
}
