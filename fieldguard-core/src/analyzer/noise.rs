//! Noise words excluded from search queries.
//!
//! Noise words are common, low-value terms ("the", "what", single letters,
//! single digits) that would otherwise match almost every record and
//! muddy search results. The set is built once, on first use, and is never
//! mutated afterwards.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// All noise words, lowercase.
#[rustfmt::skip]
pub const NOISE_WORDS: &[&str] = &[
    "about", "after", "all", "also", "an", "and", "another", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "between", "both", "but", "by",
    "came", "can", "come", "could", "did", "do", "each", "for", "from", "get", "got",
    "has", "had", "he", "have", "her", "here", "him", "himself", "his", "how",
    "if", "in", "into", "is", "it", "its", "it's", "like", "make", "many", "me",
    "might", "more", "most", "much", "must", "my", "never", "now", "of", "on", "only",
    "or", "other", "our", "out", "over", "said", "same", "see", "should", "since",
    "some", "still", "such", "take", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "up",
    "very", "was", "way", "we", "well", "were", "what", "where", "which", "while",
    "who", "with", "would", "you", "your",
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m",
    "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
    "$", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "\"",
];

static NOISE_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| NOISE_WORDS.iter().copied().collect());

/// Returns true if `word` is a noise word.
///
/// Membership is exact: callers lowercase before asking.
#[inline]
pub fn is_noise_word(word: &str) -> bool {
    NOISE_SET.contains(word)
}

/// Iterates over every noise word, in no particular order.
pub fn noise_words() -> impl Iterator<Item = &'static str> {
    NOISE_SET.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_no_duplicates() {
        assert_eq!(NOISE_SET.len(), NOISE_WORDS.len());
    }

    #[test]
    fn list_is_lowercase() {
        for word in NOISE_WORDS {
            assert_eq!(word.to_lowercase(), *word);
        }
    }

    #[test]
    fn common_function_words_are_noise() {
        for word in ["the", "what", "are", "of", "it's", "your"] {
            assert!(is_noise_word(word), "{word} should be noise");
        }
    }

    #[test]
    fn single_letters_digits_and_symbols_are_noise() {
        for c in 'a'..='z' {
            assert!(is_noise_word(&c.to_string()));
        }
        for c in '0'..='9' {
            assert!(is_noise_word(&c.to_string()));
        }
        assert!(is_noise_word("$"));
        assert!(is_noise_word("\""));
    }

    #[test]
    fn content_words_are_not_noise() {
        for word in ["fashion", "trends", "top", "10", "2015", "london"] {
            assert!(!is_noise_word(word), "{word} should not be noise");
        }
    }

    #[test]
    fn empty_string_is_not_noise() {
        assert!(!is_noise_word(""));
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert!(!is_noise_word("The"));
    }

    #[test]
    fn iterator_covers_the_set() {
        assert_eq!(noise_words().count(), NOISE_WORDS.len());
        assert!(noise_words().all(is_noise_word));
    }
}
