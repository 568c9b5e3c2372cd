//! Whole-token, case-insensitive word matching.

/// True when any whitespace-delimited token of `text` equals `word`, ignoring case.
/// Substrings do not count: "Category" does not contain "cat".
pub fn contains_word(text: &str, word: &str) -> bool {
    let word = word.to_lowercase();
    text.split_whitespace()
        .any(|token| token.to_lowercase() == word)
}

/// Returns the only token of `text`, or None when it has zero or several.
pub fn single_word(text: &str) -> Option<&str> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(word), None) => Some(word),
        _ => None,
    }
}
