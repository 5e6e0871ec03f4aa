use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, Result};

/// Parsed query. Both word lists are sorted and free of duplicates, and borrow
/// from the raw query text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery<'a> {
    pub plus_words: Vec<&'a str>,
    pub minus_words: Vec<&'a str>,
}

impl ParsedQuery<'_> {
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct QueryWord<'a> {
    word: &'a str,
    is_minus: bool,
    is_stop: bool,
}

/// Turns raw query text into plus and minus words
pub struct QueryParser<'s> {
    stop_words: &'s StopWordFilter,
}

impl<'s> QueryParser<'s> {
    pub fn new(stop_words: &'s StopWordFilter) -> Self {
        QueryParser { stop_words }
    }

    /// Parse a query string.
    /// - "cat city"  -> plus words [cat, city]
    /// - "cat -dog"  -> plus [cat], minus [dog]
    /// - "-" / "--dog" / "do\x12g" -> InvalidQuery
    ///
    /// Stop words are skipped after the minus prefix is stripped, so a minus
    /// stop word is ignored rather than rejected.
    pub fn parse<'a>(&self, text: &'a str) -> Result<ParsedQuery<'a>> {
        let mut query = ParsedQuery::default();

        for raw in split_into_words(text) {
            if !is_valid_word(raw) {
                return Err(Error::invalid_query(format!(
                    "query word {:?} contains special characters",
                    raw
                )));
            }

            let checked = self.classify(raw);
            if checked.is_stop {
                continue;
            }

            if checked.is_minus {
                if checked.word.is_empty() {
                    return Err(Error::invalid_query("empty minus-word in query"));
                }
                if checked.word.starts_with('-') {
                    return Err(Error::invalid_query(format!(
                        "more than one minus character in minus-word {:?}",
                        raw
                    )));
                }
                query.minus_words.push(checked.word);
            } else {
                query.plus_words.push(checked.word);
            }
        }

        sort_and_dedup(&mut query.plus_words);
        sort_and_dedup(&mut query.minus_words);
        Ok(query)
    }

    fn classify<'a>(&self, raw: &'a str) -> QueryWord<'a> {
        let (word, is_minus) = match raw.strip_prefix('-') {
            Some(stripped) => (stripped, true),
            None => (raw, false),
        };
        QueryWord {
            word,
            is_minus,
            is_stop: self.stop_words.is_stop_word(word),
        }
    }
}

fn sort_and_dedup(words: &mut Vec<&str>) {
    words.sort_unstable();
    words.dedup();
}
