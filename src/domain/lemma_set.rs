use std::collections::BTreeSet;

/// Deduplicated lemmas of a single path, kept in lexicographic order.
///
/// This is the value persisted as a record's normalized result, so its
/// iteration order is the storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaSet(BTreeSet<String>);

impl LemmaSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `false` when the lemma was already present.
    pub fn insert(&mut self, lemma: impl Into<String>) -> bool {
        self.0.insert(lemma.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Space-joined form, as written by the single-string storage variant.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<String> for LemmaSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for LemmaSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}
