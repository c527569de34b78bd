use std::io::Write;

use path_lemmatizer::application::ports::{MorphAnalyzer, MorphologyError, SentenceLemmatizer};
use path_lemmatizer::domain::{GrammaticalCase, GrammaticalNumber};
use path_lemmatizer::infrastructure::morphology::DictionaryMorphAnalyzer;

const DICTIONARY: &str = "\
# word\tnormal_form\ttag\tscore
накази\tнаказ\tNOUN,inan,masc plur,nomn\t0.7
накази\tнаказ\tNOUN,inan,masc plur,accs\t0.3
наказ\tнаказ\tNOUN,inan,masc sing,nomn
наказу\tнаказ\tNOUN,inan,masc sing,datv
";

#[tokio::test]
async fn given_tsv_dictionary_when_parsing_word_then_parses_keep_file_order() {
    let dictionary = DictionaryMorphAnalyzer::from_reader(DICTIONARY.as_bytes()).unwrap();

    let parses = dictionary.parse("Накази").await.unwrap();

    assert_eq!(dictionary.len(), 4);
    assert_eq!(parses.len(), 2);
    assert_eq!(parses[0].tag.case, Some(GrammaticalCase::Nominative));
    assert_eq!(parses[1].tag.case, Some(GrammaticalCase::Accusative));
    assert!((parses[0].score - 0.7).abs() < f32::EPSILON);
}

#[tokio::test]
async fn given_unknown_word_when_parsing_then_returns_no_parses() {
    let dictionary = DictionaryMorphAnalyzer::from_reader(DICTIONARY.as_bytes()).unwrap();

    let parses = dictionary.parse("розпорядження").await.unwrap();

    assert!(parses.is_empty());
}

#[tokio::test]
async fn given_plural_form_when_inflecting_to_nominative_singular_then_finds_lexeme_form() {
    let dictionary = DictionaryMorphAnalyzer::from_reader(DICTIONARY.as_bytes()).unwrap();
    let plural = dictionary.parse("накази").await.unwrap().remove(0);

    let inflected = dictionary
        .inflect(&plural, GrammaticalCase::Nominative, GrammaticalNumber::Singular)
        .await
        .unwrap();

    assert_eq!(inflected.as_deref(), Some("наказ"));
}

#[tokio::test]
async fn given_missing_target_form_when_inflecting_then_returns_none() {
    let dictionary = DictionaryMorphAnalyzer::from_reader(DICTIONARY.as_bytes()).unwrap();
    let singular = dictionary.parse("наказ").await.unwrap().remove(0);

    let inflected = dictionary
        .inflect(&singular, GrammaticalCase::Instrumental, GrammaticalNumber::Plural)
        .await
        .unwrap();

    assert_eq!(inflected, None);
}

#[tokio::test]
async fn given_dictionary_when_lemmatizing_sentence_then_first_normal_form_is_used() {
    let dictionary = DictionaryMorphAnalyzer::from_reader(DICTIONARY.as_bytes()).unwrap();

    let lemmas = dictionary.lemmatize("накази наказу PDF").await.unwrap();

    assert_eq!(lemmas, vec!["наказ", "наказ", "pdf"]);
}

#[test]
fn given_line_with_too_few_fields_when_loading_then_returns_error() {
    let result = DictionaryMorphAnalyzer::from_reader("наказ\tнаказ\n".as_bytes());

    assert!(matches!(result, Err(MorphologyError::DictionaryLoadFailed(_))));
}

#[test]
fn given_invalid_score_when_loading_then_returns_error() {
    let result =
        DictionaryMorphAnalyzer::from_reader("наказ\tнаказ\tNOUN sing,nomn\thigh\n".as_bytes());

    assert!(matches!(result, Err(MorphologyError::DictionaryLoadFailed(_))));
}

#[test]
fn given_dictionary_file_when_loading_from_path_then_entries_are_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DICTIONARY.as_bytes()).unwrap();

    let dictionary = DictionaryMorphAnalyzer::from_path(file.path()).unwrap();

    assert_eq!(dictionary.len(), 4);
}

#[test]
fn given_missing_file_when_loading_from_path_then_returns_error() {
    let result = DictionaryMorphAnalyzer::from_path("/nonexistent/uk.tsv");

    assert!(matches!(result, Err(MorphologyError::DictionaryLoadFailed(_))));
}
