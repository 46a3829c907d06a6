//! Character-class filters.

/// Characters removed by [`strip_punctuation`].
const PUNCTUATION: &[char] = &[
    '.', ',', '?', '!', '\'', '"', '£', '€', '$', ':', ';', '(', ')', '&', '%', '=', '-',
];

#[inline(always)]
const fn is_email_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '=' | '?' | '^' | '_' | '`'
                | '{' | '|' | '}' | '~' | '@' | '.' | '[' | ']'
        )
}

/// Removes common punctuation and currency symbols.
///
/// ```
/// use fieldguard_core::sanitize::strip_punctuation;
///
/// assert_eq!(strip_punctuation("Hello, I'm Martin."), "Hello Im Martin");
/// ```
pub fn strip_punctuation(s: &str) -> String {
    s.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Removes every character that cannot appear in an email address.
///
/// Compare the result with the original input and validate only on a
/// match; silently accepting the filtered form would change the address.
pub fn sanitize_email(s: &str) -> String {
    s.chars().filter(|&c| is_email_char(c)).collect()
}
