use std::collections::BTreeSet;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};

/// Immutable set of words excluded from indexing and from queries.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    stop_words: BTreeSet<String>,
}

impl StopWordFilter {
    /// Builds the set from explicit words. Empty words are skipped; a word with
    /// control characters fails the whole construction.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stop_words = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "stop word {:?} contains special characters",
                    word
                )));
            }
            if !word.is_empty() {
                stop_words.insert(word.to_string());
            }
        }
        Ok(StopWordFilter { stop_words })
    }

    /// Builds the set from space-separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        StopWordFilter::new(split_into_words(text))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn filter<'a>(&self, words: Vec<&'a str>) -> Vec<&'a str> {
        words.into_iter()
            .filter(|word| !self.is_stop_word(word))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}
