use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{MorphAnalyzer, MorphologyError, SentenceLemmatizer};
use crate::domain::{GrammaticalCase, GrammaticalNumber, MorphParse};

/// Word-form dictionary held in memory.
///
/// Each line of the source file is `word<TAB>normal_form<TAB>tag[<TAB>score]`.
/// Parses of a word keep file order, so the first line for a word is its
/// most probable reading. Lines starting with `#` are ignored.
#[derive(Debug, Clone, Default)]
pub struct DictionaryMorphAnalyzer {
    forms: HashMap<String, Vec<MorphParse>>,
    lexemes: HashMap<String, Vec<MorphParse>>,
}

impl DictionaryMorphAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MorphologyError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            MorphologyError::DictionaryLoadFailed(format!("{}: {}", path.display(), e))
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, MorphologyError> {
        let mut dictionary = Self::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| MorphologyError::DictionaryLoadFailed(e.to_string()))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            let [word, normal_form, tag, rest @ ..] = fields.as_slice() else {
                return Err(MorphologyError::DictionaryLoadFailed(format!(
                    "line {}: expected at least 3 tab-separated fields",
                    index + 1
                )));
            };
            let score = match rest.first() {
                Some(raw) => raw.parse().map_err(|_| {
                    MorphologyError::DictionaryLoadFailed(format!(
                        "line {}: invalid score {:?}",
                        index + 1,
                        raw
                    ))
                })?,
                None => 1.0,
            };

            dictionary.add(MorphParse::new(*word, *normal_form, tag, score));
        }

        Ok(dictionary)
    }

    pub fn with_parse(mut self, word: &str, normal_form: &str, tag: &str) -> Self {
        self.add(MorphParse::new(word, normal_form, tag, 1.0));
        self
    }

    pub fn add(&mut self, parse: MorphParse) {
        self.lexemes
            .entry(parse.normal_form.to_lowercase())
            .or_default()
            .push(parse.clone());
        self.forms
            .entry(parse.word.to_lowercase())
            .or_default()
            .push(parse);
    }

    pub fn len(&self) -> usize {
        self.forms.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    fn lookup(&self, word: &str) -> &[MorphParse] {
        self.forms
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[async_trait]
impl MorphAnalyzer for DictionaryMorphAnalyzer {
    async fn parse(&self, word: &str) -> Result<Vec<MorphParse>, MorphologyError> {
        Ok(self.lookup(word).to_vec())
    }

    /// Looks for another form of the same lexeme (same normal form and part
    /// of speech) carrying the requested grammemes.
    async fn inflect(
        &self,
        parse: &MorphParse,
        case: GrammaticalCase,
        number: GrammaticalNumber,
    ) -> Result<Option<String>, MorphologyError> {
        if parse.tag.has_form(case, number) {
            return Ok(Some(parse.word.clone()));
        }

        Ok(self
            .lexemes
            .get(&parse.normal_form.to_lowercase())
            .into_iter()
            .flatten()
            .find(|candidate| {
                candidate.tag.pos == parse.tag.pos && candidate.tag.has_form(case, number)
            })
            .map(|candidate| candidate.word.clone()))
    }
}

/// Sentence lemmatization by whitespace split and first-parse normal form,
/// used when no NLP pipeline service is configured.
#[async_trait]
impl SentenceLemmatizer for DictionaryMorphAnalyzer {
    async fn lemmatize(&self, text: &str) -> Result<Vec<String>, MorphologyError> {
        Ok(text
            .split_whitespace()
            .map(|word| match self.lookup(word).first() {
                Some(parse) => parse.normal_form.to_lowercase(),
                None => word.to_lowercase(),
            })
            .collect())
    }
}
