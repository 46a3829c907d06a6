//! UK telephone number validation.
//!
//! A candidate is first normalized to the domestic leading-zero form:
//! spaces are removed, surrounding whitespace is trimmed, and at most one
//! international prefix is rewritten to `0`. The prefixes are tried in
//! order and the first one that the candidate starts with wins:
//!
//! | prefix | rewritten to |
//! |--------|--------------|
//! | `+44`  | `0`          |
//! | `044`  | `0`          |
//! | `0044` | `0`          |
//!
//! The result must be all ASCII digits and is then classified by its two
//! leading digits and its length:
//!
//! - `07` and 11 digits: mobile
//! - `01`, `02`, `03`, `08` and 10 or 11 digits: landline / non-geographic
//! - any other 11 digits: accepted as unclassified, unless
//!   [`TelephoneRules::gate_eleven_digit_prefixes`] is set
//!
//! Only the format is checked; nothing here knows whether a line exists.

use core::fmt;
use core::str::FromStr;

use fieldguard_types::{LineKind, TelephoneError, TelephoneRules};
use smallvec::SmallVec;
use tracing::trace;

/// Ordered `(prefix, replacement)` rewrites, first match wins.
const PREFIX_REWRITES: [(&str, &str); 3] = [("+44", "0"), ("044", "0"), ("0044", "0")];

/// Leading digits of landline and non-geographic numbers.
const LANDLINE_PREFIXES: [[u8; 2]; 4] = [*b"01", *b"02", *b"03", *b"08"];

#[inline(always)]
const fn is_trim_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// A syntactically valid UK telephone number in canonical form.
///
/// The canonical form is digits only, starting with `0`, with spaces and
/// any international prefix removed.
///
/// # Examples
///
/// ```
/// use fieldguard_core::validate::UkTelephone;
/// use fieldguard_types::LineKind;
///
/// let number = UkTelephone::parse("+44 7700 900123").unwrap();
/// assert_eq!(number.as_str(), "07700900123");
/// assert_eq!(number.kind(), LineKind::Mobile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UkTelephone {
    digits: SmallVec<[u8; 16]>,
    kind: LineKind,
}

impl UkTelephone {
    /// Parses `raw` with the default (legacy) rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`TelephoneError`] the candidate runs into.
    pub fn parse(raw: &str) -> Result<Self, TelephoneError> {
        Self::parse_with(raw, TelephoneRules::default())
    }

    /// Parses `raw` with explicit rules.
    ///
    /// # Errors
    ///
    /// Returns `TelephoneError::Empty` if nothing is left after
    /// normalization, `NotNumeric` for any non-digit, `BadLength` unless
    /// there are 10 or 11 digits, and `UnknownPrefix` when the leading
    /// digits are not accepted for that length.
    pub fn parse_with(raw: &str, rules: TelephoneRules) -> Result<Self, TelephoneError> {
        let result = normalize(raw).and_then(|digits| {
            let kind = classify(&digits, rules)?;
            Ok(Self { digits, kind })
        });

        if let Err(err) = &result {
            trace!(%err, input_len = raw.len(), "telephone number rejected");
        }

        result
    }

    /// Canonical digits, e.g. `"01234567890"`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        core::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// Kind of line the number belongs to.
    #[inline]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }
}

impl fmt::Display for UkTelephone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UkTelephone {
    type Err = TelephoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns true if `raw` is a valid UK telephone number under the default rules.
#[inline]
pub fn is_valid_uk_telephone(raw: &str) -> bool {
    UkTelephone::parse(raw).is_ok()
}

/// Strips spaces, rewrites the international prefix and checks for digits.
fn normalize(raw: &str) -> Result<SmallVec<[u8; 16]>, TelephoneError> {
    let compact: SmallVec<[u8; 32]> = raw
        .trim_matches(is_trim_char)
        .bytes()
        .filter(|&b| b != b' ')
        .collect();

    let mut digits: SmallVec<[u8; 16]> = SmallVec::with_capacity(compact.len());
    match PREFIX_REWRITES
        .iter()
        .find(|(prefix, _)| compact.starts_with(prefix.as_bytes()))
    {
        Some((prefix, replacement)) => {
            digits.extend_from_slice(replacement.as_bytes());
            digits.extend_from_slice(&compact[prefix.len()..]);
        }
        None => digits.extend_from_slice(&compact),
    }

    if digits.is_empty() {
        return Err(TelephoneError::Empty);
    }

    if let Some(pos) = digits.iter().position(|b| !b.is_ascii_digit()) {
        // Everything before `pos` is ASCII, so `pos` is a char boundary.
        let found = core::str::from_utf8(&digits[pos..])
            .ok()
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(TelephoneError::NotNumeric { found });
    }

    Ok(digits)
}

fn classify(digits: &[u8], rules: TelephoneRules) -> Result<LineKind, TelephoneError> {
    let len = digits.len();
    if len != 10 && len != 11 {
        return Err(TelephoneError::BadLength { len });
    }

    let prefix = [digits[0], digits[1]];
    match (&prefix, len) {
        (b"07", 11) => Ok(LineKind::Mobile),
        (p, _) if LANDLINE_PREFIXES.contains(p) => Ok(LineKind::Landline),
        (_, 11) if !rules.gate_eleven_digit_prefixes => Ok(LineKind::Unclassified),
        _ => Err(TelephoneError::UnknownPrefix { prefix, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(raw: &str) -> Result<LineKind, TelephoneError> {
        UkTelephone::parse(raw).map(|t| t.kind())
    }

    fn strict(raw: &str) -> Result<LineKind, TelephoneError> {
        UkTelephone::parse_with(raw, TelephoneRules::strict()).map(|t| t.kind())
    }

    #[test]
    fn domestic_landline() {
        assert!(is_valid_uk_telephone("01234 567890"));
        assert_eq!(kind("01234 567890"), Ok(LineKind::Landline));
        assert_eq!(kind("0201234567"), Ok(LineKind::Landline));
    }

    #[test]
    fn international_prefixes_rewritten() {
        for raw in ["+441234 567890", "0441234 567890", "00441234 567890"] {
            let number = UkTelephone::parse(raw).expect("valid number");
            assert_eq!(number.as_str(), "01234567890", "for {raw:?}");
        }
    }

    #[test]
    fn unknown_international_prefix_rejected() {
        assert_eq!(
            kind("0451234 567890"),
            Err(TelephoneError::BadLength { len: 13 })
        );
        assert!(!is_valid_uk_telephone("0451234 567890"));
    }

    #[test]
    fn prefix_must_be_anchored() {
        // "+44" in the middle is not a prefix, so the '+' survives.
        assert_eq!(
            kind("012+441234"),
            Err(TelephoneError::NotNumeric { found: '+' })
        );
    }

    #[test]
    fn only_first_matching_prefix_applies() {
        // "+44" fires; the "044" left behind is not rewritten again.
        let number = UkTelephone::parse("+440441234567").expect("valid number");
        assert_eq!(number.as_str(), "00441234567");
        assert_eq!(number.kind(), LineKind::Unclassified);
    }

    #[test]
    fn mobile_requires_eleven_digits() {
        assert_eq!(kind("07700 900123"), Ok(LineKind::Mobile));
        assert_eq!(kind("+447700900123"), Ok(LineKind::Mobile));
        assert_eq!(
            kind("0770090012"),
            Err(TelephoneError::UnknownPrefix {
                prefix: *b"07",
                len: 10
            })
        );
    }

    #[test]
    fn any_eleven_digits_accepted_by_default() {
        for raw in ["12345678901", "99999999999", "05123456789", "00000000000"] {
            assert!(is_valid_uk_telephone(raw), "{raw} should be accepted");
            assert_eq!(kind(raw), Ok(LineKind::Unclassified));
        }
    }

    #[test]
    fn strict_rules_gate_eleven_digit_prefixes() {
        assert_eq!(
            strict("12345678901"),
            Err(TelephoneError::UnknownPrefix {
                prefix: *b"12",
                len: 11
            })
        );
        assert_eq!(strict("07700900123"), Ok(LineKind::Mobile));
        assert_eq!(strict("08001234567"), Ok(LineKind::Landline));
    }

    #[test]
    fn ten_digits_need_landline_prefix() {
        assert_eq!(kind("0312345678"), Ok(LineKind::Landline));
        assert_eq!(kind("0812345678"), Ok(LineKind::Landline));
        assert_eq!(
            kind("0512345678"),
            Err(TelephoneError::UnknownPrefix {
                prefix: *b"05",
                len: 10
            })
        );
    }

    #[test]
    fn wrong_lengths_rejected() {
        assert_eq!(kind("012345"), Err(TelephoneError::BadLength { len: 6 }));
        assert_eq!(
            kind("0123456789012"),
            Err(TelephoneError::BadLength { len: 13 })
        );
        assert_eq!(kind("+44"), Err(TelephoneError::BadLength { len: 1 }));
    }

    #[test]
    fn non_digits_rejected() {
        assert_eq!(
            kind("01234-567890"),
            Err(TelephoneError::NotNumeric { found: '-' })
        );
        assert_eq!(
            kind("+1 555 123 4567"),
            Err(TelephoneError::NotNumeric { found: '+' })
        );
        assert_eq!(
            kind("0123456789é"),
            Err(TelephoneError::NotNumeric { found: 'é' })
        );
        assert!(!is_valid_uk_telephone("1.234567890"));
    }

    #[test]
    fn empty_inputs_rejected() {
        assert_eq!(kind(""), Err(TelephoneError::Empty));
        assert_eq!(kind("   "), Err(TelephoneError::Empty));
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(kind("\t01234 567890\n"), Ok(LineKind::Landline));
    }

    #[test]
    fn display_and_from_str() {
        let number: UkTelephone = "+44 20 7946 0958".parse().expect("valid number");
        assert_eq!(number.to_string(), "02079460958");
        assert_eq!(number.kind(), LineKind::Landline);
    }
}
