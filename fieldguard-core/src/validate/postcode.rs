//! UK postcode format checks.
//!
//! A full postcode is an outward code (area + district, e.g. `SW16`)
//! followed by an inward code (sector + unit, e.g. `2AB`), optionally
//! separated by one whitespace character. A partial postcode is either a
//! full one or the outward code alone. Letters are matched in either case.
//!
//! These are format checks only. No lookup is made against real postcodes.

use std::sync::LazyLock;

use fieldguard_types::PostcodeKind;
use regex::Regex;

// ASCII classes are spelled out: the `i` flag would also fold in
// characters such as U+017F and the Kelvin sign.
//
// `$` is end of input here. PCRE's default `$` (no `D` modifier) also
// matches before one final `\n`, so the legacy form check accepted
// "NN4 7EB\n"; this one rejects it.
static FULL_POSTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,2}[0-9][0-9A-Za-z]?[ \t\n\x0B\x0C\r]?[0-9][A-Za-z]{2}$")
        .expect("full postcode pattern is valid")
});

static OUTWARD_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{1,2}[0-9][0-9A-Za-z]?$").expect("outward code pattern is valid")
});

/// Returns true if `raw` is formatted as a full UK postcode.
///
/// ```
/// use fieldguard_core::validate::postcode::is_valid_full;
///
/// assert!(is_valid_full("NN4 7EB"));
/// assert!(is_valid_full("sw162ab"));
/// assert!(!is_valid_full("SW16 AAB"));
/// ```
#[inline]
pub fn is_valid_full(raw: &str) -> bool {
    FULL_POSTCODE.is_match(raw)
}

/// Returns true if `raw` is a full UK postcode or an outward code.
#[inline]
pub fn is_valid_partial(raw: &str) -> bool {
    is_valid_full(raw) || OUTWARD_CODE.is_match(raw)
}

/// Reports which postcode format `raw` matches, if any.
pub fn classify(raw: &str) -> Option<PostcodeKind> {
    if is_valid_full(raw) {
        Some(PostcodeKind::Full)
    } else if OUTWARD_CODE.is_match(raw) {
        Some(PostcodeKind::Outward)
    } else {
        None
    }
}
