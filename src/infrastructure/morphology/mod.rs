mod dictionary_morph_analyzer;
mod http_morph_analyzer;
mod http_sentence_lemmatizer;
mod normalizer_factory;

pub use dictionary_morph_analyzer::DictionaryMorphAnalyzer;
pub use http_morph_analyzer::HttpMorphAnalyzer;
pub use http_sentence_lemmatizer::HttpSentenceLemmatizer;
pub use normalizer_factory::{NormalizerFactory, NormalizerFactoryError};
