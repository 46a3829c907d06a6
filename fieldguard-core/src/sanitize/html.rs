//! HTML neutralization.
//!
//! Two strategies: [`clean_html`] keeps the text and escapes markup
//! characters as entities, [`strip_html`] drops tags entirely.

use std::sync::LazyLock;

use regex::Regex;

// An unterminated tag runs to the end of the input.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*(?:>|$)").expect("tag pattern is valid"));

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// ```
/// use fieldguard_core::sanitize::clean_html;
///
/// assert_eq!(
///     clean_html(r#"<script src="evil-script"></script>"#),
///     "&lt;script src=&quot;evil-script&quot;&gt;&lt;/script&gt;"
/// );
/// ```
pub fn clean_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Removes HTML tags and NUL characters, and encodes quotes as numeric
/// entities.
///
/// ```
/// use fieldguard_core::sanitize::strip_html;
///
/// assert_eq!(strip_html("<h1>Hello, World</h1>"), "Hello, World");
/// ```
pub fn strip_html(s: &str) -> String {
    let untagged = TAG.replace_all(s, "");
    let mut out = String::with_capacity(untagged.len());
    for c in untagged.chars() {
        match c {
            '\0' => {}
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_script_tag() {
        assert_eq!(
            clean_html("<script src=\"evil-script\"></script>"),
            "&lt;script src=&quot;evil-script&quot;&gt;&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(clean_html("Hello, there!"), "Hello, there!");
        assert_eq!(strip_html("Hello, there!"), "Hello, there!");
    }

    #[test]
    fn escapes_ampersand_and_single_quote() {
        assert_eq!(clean_html("Tom & Jerry's"), "Tom &amp; Jerry&#039;s");
    }

    #[test]
    fn escaping_is_not_idempotent_on_entities() {
        assert_eq!(clean_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn strips_tags_keeps_text() {
        assert_eq!(strip_html("<h1>Hello, World</h1>"), "Hello, World");
        assert_eq!(strip_html("a <b>bold</b> move"), "a bold move");
    }

    #[test]
    fn strips_script_entirely() {
        assert_eq!(strip_html("<script src=\"evil-script\"></script>"), "");
    }

    #[test]
    fn unterminated_tag_runs_to_end() {
        assert_eq!(strip_html("safe <img src=x onerror=alert(1)"), "safe ");
    }

    #[test]
    fn multiline_tags_stripped() {
        assert_eq!(strip_html("<a\nhref='x'>link</a>"), "link");
    }

    #[test]
    fn quotes_and_nul_outside_tags() {
        assert_eq!(strip_html("it's \"fine\"\0"), "it&#39;s &#34;fine&#34;");
    }

    #[test]
    fn stray_closing_bracket_kept() {
        assert_eq!(strip_html("1 > 0"), "1 > 0");
    }
}
