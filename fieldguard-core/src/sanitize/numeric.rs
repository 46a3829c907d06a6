//! Lenient numeric casts.
//!
//! Both casts read the longest numeric prefix of the input after leading
//! whitespace and ignore whatever follows it, so `"33.3randomstring"`
//! becomes `33.3`. Input with no numeric prefix becomes zero.

#[inline(always)]
const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

#[inline]
fn skip_leading_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii() && is_space(c as u8))
}

/// Length in bytes of the longest decimal literal at the start of `s`.
///
/// Accepts an optional sign, digits with an optional fraction (`1.` and
/// `.5` both count), and an optional exponent. Returns 0 when `s` does
/// not start with a number.
pub(crate) fn float_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0usize;

    if matches!(b.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Returns true if `s`, ignoring surrounding ASCII whitespace, is a
/// decimal number.
pub(crate) fn is_float_literal(s: &str) -> bool {
    let t = s.trim_matches(|c: char| c.is_ascii() && is_space(c as u8));
    !t.is_empty() && float_prefix_len(t) == t.len()
}

/// Casts text to an integer.
///
/// Reads an optional sign and the leading digits. Values outside the
/// `i64` range saturate.
///
/// ```
/// use fieldguard_core::sanitize::to_int;
///
/// assert_eq!(to_int("5"), 5);
/// assert_eq!(to_int("  -42 apples"), -42);
/// assert_eq!(to_int("string"), 0);
/// ```
pub fn to_int(s: &str) -> i64 {
    let b = skip_leading_space(s).as_bytes();
    let (negative, digits) = match b.first() {
        Some(b'-') => (true, &b[1..]),
        Some(b'+') => (false, &b[1..]),
        _ => (false, b),
    };

    let mut value: i64 = 0;
    for &d in digits.iter().take_while(|d| d.is_ascii_digit()) {
        let d = i64::from(d - b'0');
        let next = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }

    value
}

/// Casts text to a float.
///
/// ```
/// use fieldguard_core::sanitize::to_float;
///
/// assert_eq!(to_float("6.78910"), 6.7891);
/// assert_eq!(to_float("33.3randomstring"), 33.3);
/// assert_eq!(to_float("string"), 0.0);
/// ```
pub fn to_float(s: &str) -> f64 {
    let t = skip_leading_space(s);
    let len = float_prefix_len(t);
    if len == 0 {
        return 0.0;
    }
    t[..len].parse().unwrap_or(0.0)
}
