use std::sync::Arc;

use crate::application::ports::{MorphAnalyzer, MorphologyError, SentenceLemmatizer};
use crate::application::services::{LemmaNormalizer, MorphologicalNormalizer, SentenceNormalizer};
use crate::presentation::config::{NormalizationStrategy, NormalizerSettings};

use super::{DictionaryMorphAnalyzer, HttpMorphAnalyzer, HttpSentenceLemmatizer};

pub struct NormalizerFactory;

#[derive(Debug, thiserror::Error)]
pub enum NormalizerFactoryError {
    #[error("minimum lemma length must be at least 1")]
    InvalidMinLemmaLen,
    #[error("morphology backend initialization failed: {0}")]
    InitializationFailed(#[from] MorphologyError),
}

impl NormalizerFactory {
    pub fn create(
        settings: &NormalizerSettings,
    ) -> Result<LemmaNormalizer, NormalizerFactoryError> {
        if settings.min_lemma_len == Some(0) {
            return Err(NormalizerFactoryError::InvalidMinLemmaLen);
        }

        let dictionary = match &settings.dictionary_path {
            Some(path) if !path.is_empty() => {
                let dictionary = DictionaryMorphAnalyzer::from_path(path)?;
                tracing::info!(
                    path = %path,
                    forms = dictionary.len(),
                    "Loaded morphology dictionary"
                );
                Some(Arc::new(dictionary))
            }
            _ => None,
        };

        let normalizer = match settings.strategy {
            NormalizationStrategy::Sentence => {
                let lemmatizer: Arc<dyn SentenceLemmatizer> = match dictionary {
                    Some(dictionary) => dictionary,
                    None => {
                        tracing::info!(url = %settings.service_url, "Using NLP pipeline service");
                        Arc::new(HttpSentenceLemmatizer::new(&settings.service_url))
                    }
                };
                let mut normalizer = SentenceNormalizer::new(lemmatizer);
                if let Some(min) = settings.min_lemma_len {
                    normalizer = normalizer.with_min_lemma_len(min);
                }
                LemmaNormalizer::Sentence(normalizer)
            }
            NormalizationStrategy::Morphological => {
                let analyzer: Arc<dyn MorphAnalyzer> = match dictionary {
                    Some(dictionary) => dictionary,
                    None => {
                        tracing::info!(url = %settings.service_url, "Using morphology service");
                        Arc::new(HttpMorphAnalyzer::new(&settings.service_url))
                    }
                };
                let mut normalizer = MorphologicalNormalizer::new(analyzer);
                if let Some(min) = settings.min_lemma_len {
                    normalizer = normalizer.with_min_lemma_len(min);
                }
                LemmaNormalizer::Morphological(normalizer)
            }
        };

        Ok(normalizer)
    }
}
