use crate::application::ports::MorphologyError;
use crate::domain::LemmaSet;

use super::{LemmaNormalizer, Tokenizer};

/// Tokenizer and normalizer for one job run. Built once at start-up and
/// passed by reference into the batch loop.
pub struct NormalizationContext {
    tokenizer: Tokenizer,
    normalizer: LemmaNormalizer,
}

impl NormalizationContext {
    pub fn new(tokenizer: Tokenizer, normalizer: LemmaNormalizer) -> Self {
        Self {
            tokenizer,
            normalizer,
        }
    }

    pub fn normalizer(&self) -> &LemmaNormalizer {
        &self.normalizer
    }

    pub async fn normalize_path(&self, path: &str) -> Result<LemmaSet, MorphologyError> {
        let tokens = self.tokenizer.tokenize(path);
        self.normalizer.normalize(&tokens, &self.tokenizer).await
    }
}
