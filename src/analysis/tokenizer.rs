/// Splits text on runs of the space character. Empty fragments are dropped,
/// and the returned words borrow from `text`.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(' ')
        .filter(|word| !word.is_empty())
        .collect()
}

/// A word is valid unless it contains a control character below the space (0x00-0x1F).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}

pub fn all_valid<'a, I>(words: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().all(is_valid_word)
}
