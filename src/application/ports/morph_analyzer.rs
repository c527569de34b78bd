use async_trait::async_trait;

use crate::domain::{GrammaticalCase, GrammaticalNumber, MorphParse};

#[async_trait]
pub trait MorphAnalyzer: Send + Sync {
    /// Candidate parses for `word`, most probable first. An unknown word
    /// yields an empty list rather than an error.
    async fn parse(&self, word: &str) -> Result<Vec<MorphParse>, MorphologyError>;

    /// Surface form of `parse` in the requested case and number, if the
    /// analyzer can produce it.
    async fn inflect(
        &self,
        parse: &MorphParse,
        case: GrammaticalCase,
        number: GrammaticalNumber,
    ) -> Result<Option<String>, MorphologyError> {
        Ok(parse
            .tag
            .has_form(case, number)
            .then(|| parse.word.clone()))
    }
}

#[async_trait]
pub trait SentenceLemmatizer: Send + Sync {
    /// Lemmas of every word the pipeline finds in `text`, in text order.
    async fn lemmatize(&self, text: &str) -> Result<Vec<String>, MorphologyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MorphologyError {
    #[error("morphology service request failed: {0}")]
    RequestFailed(String),
    #[error("invalid morphology response: {0}")]
    InvalidResponse(String),
    #[error("dictionary loading failed: {0}")]
    DictionaryLoadFailed(String),
}
