//! Presence and numeric checks.

use crate::sanitize::numeric::is_float_literal;

/// Returns true if the field was filled in (at least one byte).
#[inline]
pub fn is_non_empty_text(s: &str) -> bool {
    !s.is_empty()
}

/// Returns true if `s` is a decimal number.
///
/// Surrounding ASCII whitespace is ignored. Accepts an optional sign,
/// a fraction (`1.`, `.5`) and an exponent (`2e10`). Hex, binary and
/// digit separators are not numbers here.
#[inline]
pub fn is_numeric(s: &str) -> bool {
    is_float_literal(s)
}
