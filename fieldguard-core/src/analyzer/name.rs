//! Personal name normalization.
//!
//! Turns free-text name input such as `"  shaun c   WRIGHT--phillips!! "`
//! into `"Shaun C Wright-Phillips"`. The cleanup runs as a single forward
//! scan that fuses the steps below, applied in this order:
//!
//! 1. Drop every character that is not a letter (Unicode category `L`),
//!    whitespace, `'` or `-`. Letter-like symbols, numerals and combining
//!    marks (`Ⅻ`, `ⓐ`, vowel signs) are dropped too.
//! 2. Collapse runs of `-` into one `-`, and runs of `'` into one `'`.
//! 3. Collapse runs of whitespace into a single space.
//! 4. Trim `-`, `'` and spaces from both ends.
//! 5. Lowercase everything, then capitalise the first letter of each word.
//! 6. Capitalise the first letter after each `-`, then after each `'`.
//!
//! Steps 5 and 6 together mean a letter is upper-cased exactly when it
//! starts the output or follows a space, hyphen or apostrophe. Each
//! whitespace character becomes a space, so a lone tab, CR or NBSP
//! separates words just like a run of them does.

use std::sync::LazyLock;

use regex::Regex;

static NON_NAME_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s\p{L}'-]+").expect("name character pattern is valid")
});

#[inline(always)]
const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '\'')
}

/// Upper-cases `c` when the mapping is a single character.
///
/// Expanding mappings (`ß` -> `SS`) leave the character as-is so that
/// a cleansed name is stable under a second pass.
#[inline]
fn upper_single(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lower-cases `c` when the mapping is a single character.
#[inline]
fn lower_single(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Cleans and re-cases personal names.
///
/// Stateless; a single instance can be shared freely.
///
/// # Examples
///
/// ```
/// use fieldguard_core::analyzer::NameNormalizer;
///
/// let normalizer = NameNormalizer::new();
/// assert_eq!(normalizer.cleanse("Benjamin o'shea"), "Benjamin O'Shea");
/// assert_eq!(normalizer.cleanse("shaun c wright-phillips"), "Shaun C Wright-Phillips");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl NameNormalizer {
    /// Creates a new name normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Cleanses a name into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn cleanse_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let letters = NON_NAME_CHARS.replace_all(input, "");
        let mut prev: Option<char> = None;

        for ch in letters.chars() {
            let c = if ch.is_whitespace() { ' ' } else { ch };

            if is_separator(c) {
                if prev == Some(c) || out.is_empty() {
                    continue;
                }
                out.push(c);
            } else if prev.is_none_or(is_separator) {
                out.push(upper_single(c));
            } else {
                out.push(lower_single(c));
            }

            prev = Some(c);
        }

        let kept = out.trim_end_matches(is_separator).len();
        out.truncate(kept);
    }

    /// Cleanses a name and returns a new String.
    pub fn cleanse(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.cleanse_into(input, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cleanse(input: &str) -> String {
        NameNormalizer::new().cleanse(input)
    }

    #[test]
    fn already_clean_name_unchanged() {
        assert_eq!(cleanse("John Smith"), "John Smith");
    }

    #[test]
    fn apostrophe_segments_capitalised() {
        assert_eq!(cleanse("Benjamin o'shea"), "Benjamin O'Shea");
        assert_eq!(cleanse("d'arcy"), "D'Arcy");
    }

    #[test]
    fn hyphen_segments_capitalised() {
        assert_eq!(cleanse("shaun c wright-phillips"), "Shaun C Wright-Phillips");
        assert_eq!(cleanse("ANNE-MARIE"), "Anne-Marie");
    }

    #[test]
    fn mixed_delimiters_in_one_word() {
        assert_eq!(cleanse("o'neill-smyth"), "O'Neill-Smyth");
    }

    #[test]
    fn uppercase_input_lowered() {
        assert_eq!(cleanse("JOHN SMITH"), "John Smith");
        assert_eq!(cleanse("mCdONALD"), "Mcdonald");
    }

    #[test]
    fn digits_and_punctuation_stripped() {
        assert_eq!(cleanse("J0hn Sm1th!"), "Jhn Smth");
        assert_eq!(cleanse("<b>Jane</b> Doe"), "Bjaneb Doe");
        assert_eq!(cleanse("Mary. Jones,"), "Mary Jones");
    }

    #[test]
    fn repeated_hyphens_collapse() {
        assert_eq!(cleanse("wright---phillips"), "Wright-Phillips");
    }

    #[test]
    fn repeated_apostrophes_collapse() {
        assert_eq!(cleanse("o''''shea"), "O'Shea");
    }

    #[test]
    fn hyphen_and_apostrophe_collapse_independently() {
        assert_eq!(cleanse("a-'-b"), "A-'-B");
        assert_eq!(cleanse("a--''b"), "A-'B");
    }

    #[test]
    fn stripping_can_join_hyphens() {
        assert_eq!(cleanse("smith-1-jones"), "Smith-Jones");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(cleanse("john    smith"), "John Smith");
        assert_eq!(cleanse("john\t\nsmith"), "John Smith");
        assert_eq!(cleanse("john\r\nsmith"), "John Smith");
        assert_eq!(cleanse("john\tsmith"), "John Smith");
    }

    #[test]
    fn edges_trimmed() {
        assert_eq!(cleanse("  -'john smith'-  "), "John Smith");
        assert_eq!(cleanse("\n\t- john"), "John");
        assert_eq!(cleanse("smith -"), "Smith");
    }

    #[test]
    fn empty_and_degenerate_inputs() {
        assert_eq!(cleanse(""), "");
        assert_eq!(cleanse("   "), "");
        assert_eq!(cleanse("--''--"), "");
        assert_eq!(cleanse("12345"), "");
    }

    #[test]
    fn single_letter() {
        assert_eq!(cleanse("x"), "X");
        assert_eq!(cleanse(" c "), "C");
    }

    #[test]
    fn unicode_letters_kept_and_cased() {
        assert_eq!(cleanse("éLODIE müller"), "Élodie Müller");
        assert_eq!(cleanse("ГРИГОРИЙ"), "Григорий");
    }

    #[test]
    fn non_letter_alphabetics_stripped() {
        assert_eq!(cleanse("Ⅻ ⓐnn"), "Nn");
        assert_eq!(cleanse("सिंह"), "सह");
        assert_eq!(cleanse("ⅰan"), "An");
    }

    #[test]
    fn single_whitespace_chars_become_spaces() {
        assert_eq!(cleanse("anne\u{A0}marie"), "Anne Marie");
        assert_eq!(cleanse("anne\rmarie"), "Anne Marie");
        assert_eq!(cleanse("anne\u{2003}marie"), "Anne Marie");
    }

    #[test]
    fn expanding_case_mappings_left_alone() {
        assert_eq!(cleanse("straße"), "Straße");
        assert_eq!(cleanse("ßtraße"), "ßtraße");
    }

    #[test]
    fn no_double_spaces_or_edge_separators() {
        let out = cleanse(" -- anne  -  marie '' ");
        assert!(!out.contains("  "));
        assert!(!out.starts_with(is_separator));
        assert!(!out.ends_with(is_separator));
    }

    #[test]
    fn idempotent() {
        let samples = [
            "shaun c wright-phillips",
            "Benjamin o'shea",
            "  -'weird--''input'- ",
            "İSTANBUL ßtraße",
            "a - b ' c",
            "ǅemal ſam",
            "Ⅻ ⓐnn सिंह",
            "",
        ];

        for s in samples {
            let once = cleanse(s);
            let twice = cleanse(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn cleanse_into_reuses_capacity() {
        let normalizer = NameNormalizer::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.cleanse_into("JOHN", &mut buf);
        assert_eq!(buf, "John");
        assert_eq!(buf.capacity(), cap);

        normalizer.cleanse_into("jane doe", &mut buf);
        assert_eq!(buf, "Jane Doe");
        assert_eq!(buf.capacity(), cap);
    }
}
