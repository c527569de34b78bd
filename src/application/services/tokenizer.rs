use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Path separators and punctuation that never belong to a word.
static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\_.()\[\]{}|,;\s]+").unwrap());

/// Drive marker, archive root, organisation acronym and a few function words.
pub const DEFAULT_STOP_WORDS: &[&str] = &["z:", "kspd", "нгву", "а", "по", "в", "_"];

#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Lower-cases `path`, splits it on delimiter runs and drops empty
    /// pieces and stop words. Token order follows the input.
    pub fn tokenize(&self, path: &str) -> Vec<String> {
        let lowered = path.to_lowercase();

        DELIMITERS
            .split(&lowered)
            .filter(|word| !word.is_empty() && !self.stop_words.contains(*word))
            .map(str::to_owned)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}
