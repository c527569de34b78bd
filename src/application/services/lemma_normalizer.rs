use std::sync::Arc;

use crate::application::ports::{MorphAnalyzer, MorphologyError, SentenceLemmatizer};
use crate::domain::{GrammaticalCase, GrammaticalNumber, LemmaSet, MorphParse};

use super::Tokenizer;

pub const SENTENCE_MIN_LEMMA_LEN: usize = 3;
pub const MORPHOLOGICAL_MIN_LEMMA_LEN: usize = 2;

/// Turns the tokens of one path into its lemma set.
pub enum LemmaNormalizer {
    Sentence(SentenceNormalizer),
    Morphological(MorphologicalNormalizer),
}

impl LemmaNormalizer {
    pub async fn normalize(
        &self,
        tokens: &[String],
        tokenizer: &Tokenizer,
    ) -> Result<LemmaSet, MorphologyError> {
        match self {
            Self::Sentence(n) => n.normalize(tokens).await,
            Self::Morphological(n) => n.normalize(tokens, tokenizer).await,
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        match self {
            Self::Sentence(_) => "sentence",
            Self::Morphological(_) => "morphological",
        }
    }

    pub fn min_lemma_len(&self) -> usize {
        match self {
            Self::Sentence(n) => n.min_lemma_len,
            Self::Morphological(n) => n.min_lemma_len,
        }
    }
}

/// Lemmatizes all tokens at once as a synthetic sentence. Lemmas are not
/// checked against the stop-word set again.
pub struct SentenceNormalizer {
    lemmatizer: Arc<dyn SentenceLemmatizer>,
    min_lemma_len: usize,
}

impl SentenceNormalizer {
    pub fn new(lemmatizer: Arc<dyn SentenceLemmatizer>) -> Self {
        Self {
            lemmatizer,
            min_lemma_len: SENTENCE_MIN_LEMMA_LEN,
        }
    }

    pub fn with_min_lemma_len(mut self, min_lemma_len: usize) -> Self {
        self.min_lemma_len = min_lemma_len;
        self
    }

    pub async fn normalize(&self, tokens: &[String]) -> Result<LemmaSet, MorphologyError> {
        if tokens.is_empty() {
            return Ok(LemmaSet::new());
        }

        let text = tokens.join(" ");
        let lemmas = self.lemmatizer.lemmatize(&text).await?;

        Ok(lemmas
            .into_iter()
            .filter(|lemma| char_len(lemma) >= self.min_lemma_len)
            .collect())
    }
}

/// Which parse, if any, supplied the lemma of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseSelection<'a> {
    NominativeNoun(&'a MorphParse),
    FirstNormalForm(&'a MorphParse),
    Unparsed,
}

/// Picks the first nominative singular noun in analyzer order, otherwise
/// the analyzer's first parse.
pub fn select_parse(parses: &[MorphParse]) -> ParseSelection<'_> {
    if let Some(noun) = parses
        .iter()
        .find(|p| p.tag.is_nominative_singular_noun())
    {
        return ParseSelection::NominativeNoun(noun);
    }

    match parses.first() {
        Some(first) => ParseSelection::FirstNormalForm(first),
        None => ParseSelection::Unparsed,
    }
}

/// Lemmatizes token by token, preferring noun readings so that file names
/// like "накази" and "наказу" collapse onto "наказ".
pub struct MorphologicalNormalizer {
    analyzer: Arc<dyn MorphAnalyzer>,
    min_lemma_len: usize,
}

impl MorphologicalNormalizer {
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        Self {
            analyzer,
            min_lemma_len: MORPHOLOGICAL_MIN_LEMMA_LEN,
        }
    }

    pub fn with_min_lemma_len(mut self, min_lemma_len: usize) -> Self {
        self.min_lemma_len = min_lemma_len;
        self
    }

    pub async fn normalize(
        &self,
        tokens: &[String],
        tokenizer: &Tokenizer,
    ) -> Result<LemmaSet, MorphologyError> {
        let mut lemmas = LemmaSet::new();

        for token in tokens {
            if char_len(token) < self.min_lemma_len || tokenizer.is_stop_word(token) {
                continue;
            }

            let lemma = self.lemma_for(token).await?;

            if char_len(&lemma) >= self.min_lemma_len && !tokenizer.is_stop_word(&lemma) {
                lemmas.insert(lemma);
            }
        }

        Ok(lemmas)
    }

    async fn lemma_for(&self, token: &str) -> Result<String, MorphologyError> {
        let parses = self.analyzer.parse(token).await?;

        let lemma = match select_parse(&parses) {
            ParseSelection::NominativeNoun(parse) => self
                .analyzer
                .inflect(
                    parse,
                    GrammaticalCase::Nominative,
                    GrammaticalNumber::Singular,
                )
                .await?
                .unwrap_or_else(|| parse.word.clone()),
            ParseSelection::FirstNormalForm(parse) => parse.normal_form.clone(),
            ParseSelection::Unparsed => {
                tracing::debug!(token = %token, "No parses, keeping token as is");
                token.to_string()
            }
        };

        Ok(lemma.to_lowercase())
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
