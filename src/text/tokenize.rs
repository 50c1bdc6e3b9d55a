// Alphabetic n-gram tokenizer with English stopword filtering.
//
// Tokens are case-folded runs of at least two ASCII letters, bounded by
// non-alphanumeric characters on both sides (so "café" yields nothing rather
// than "caf"). Stopwords are
// removed before bigrams are formed, so a bigram joins the two surviving
// tokens on either side of a dropped stopword.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z][a-zA-Z]+\b").expect("valid token pattern"));

static ENGLISH_STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    get(LANGUAGE::English)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
});

/// Splits text into vocabulary terms (unigrams and bigrams).
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    stop_words: &'static HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Tokenizer {
    pub fn english() -> Self {
        Self {
            stop_words: &ENGLISH_STOP_WORDS,
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Lowercased unigrams that match the token pattern and are not stopwords,
    /// in text order.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lower)
            .filter(|m| is_word_boundary(&lower, m.start(), m.end()))
            .map(|m| m.as_str())
            .filter(|w| !self.is_stop_word(w))
            .map(str::to_string)
            .collect()
    }

    /// All unigrams in text order, followed by all bigrams in text order.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        let bigrams: Vec<String> = words
            .windows(2)
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect();

        let mut terms = words;
        terms.extend(bigrams);
        terms
    }
}

/// regex-lite's `\b` is ASCII-only; reject matches glued to a non-ASCII
/// letter or digit.
fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_filter_short_and_non_alpha() {
        let tok = Tokenizer::english();
        let words = tok.words("A x9 42 Zebra-crossing, GIRAFFE!");
        assert_eq!(words, vec!["zebra", "crossing", "giraffe"]);
    }

    #[test]
    fn test_accented_words_do_not_split() {
        let tok = Tokenizer::english();
        assert!(tok.words("résumé café naïve").is_empty());
        assert_eq!(tok.words("zebra café giraffe"), vec!["zebra", "giraffe"]);
    }

    #[test]
    fn test_stop_words_removed() {
        let tok = Tokenizer::english();
        assert!(tok.is_stop_word("the"));
        assert!(tok.words("the and of").is_empty());
    }

    #[test]
    fn test_terms_unigrams_then_bigrams() {
        let tok = Tokenizer::english();
        let terms = tok.terms("zebra giraffe walrus");
        assert_eq!(
            terms,
            vec![
                "zebra",
                "giraffe",
                "walrus",
                "zebra giraffe",
                "giraffe walrus"
            ]
        );
    }

    #[test]
    fn test_bigrams_skip_stop_words() {
        let tok = Tokenizer::english();
        let terms = tok.terms("zebra and the giraffe");
        assert!(terms.contains(&"zebra giraffe".to_string()));
    }
}
