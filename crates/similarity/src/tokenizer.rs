//! Word tokenizer for feature documents.
//!
//! Lowercases the text, keeps runs of two or more word characters and
//! drops English stop words.

use crate::stop_words::is_stop_word;
use regex::Regex;
use std::sync::OnceLock;

static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    // Static pattern, compilation can not fail
    TOKEN_PATTERN.get_or_init(|| Regex::new(r"(?u)\b\w\w+\b").unwrap())
}

/// Split `text` into lowercase, stop-word-free tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_stop_words() {
        let tokens = tokenize("The Dark Knight rises over Gotham");
        assert_eq!(tokens, vec!["dark", "knight", "rises", "gotham"]);
    }

    #[test]
    fn test_single_characters_and_punctuation_dropped() {
        let tokens = tokenize("Sci-Fi, a B-movie: x!");
        assert_eq!(tokens, vec!["sci", "fi", "movie"]);
    }

    #[test]
    fn test_unicode_words() {
        let tokens = tokenize("Amélie Poulain");
        assert_eq!(tokens, vec!["amélie", "poulain"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   the and of ").is_empty());
    }
}
