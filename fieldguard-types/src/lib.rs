//! Core types for the fieldguard sanitizers and validators.
//!
//! This crate holds the vocabulary that is shared between the core crate
//! and its callers. Keeping types separate ensures:
//!
//! - **No dependencies**: form layers can name rejection reasons without
//!   pulling in regex or hashing crates
//! - **Stable classifications**: line kinds and postcode kinds are plain
//!   `Copy` enums that are cheap to store next to a submitted record

#![warn(missing_docs)]

use core::fmt;

/// Maximum total length of an email address accepted by validation.
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum length of the local part (before the `@`) of an email address.
pub const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

/// Kind of UK telephone line a validated number belongs to.
///
/// Derived from the two leading digits of the canonical (leading-zero)
/// form and its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineKind {
    /// `07` followed by nine more digits.
    Mobile = 0,
    /// `01`, `02`, `03` or `08`, ten or eleven digits in total.
    Landline = 1,
    /// Eleven digits accepted under the legacy length-only rule,
    /// without a recognised prefix.
    Unclassified = 2,
}

impl LineKind {
    /// Short lowercase label, suitable for logs and serialized records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineKind::Mobile => "mobile",
            LineKind::Landline => "landline",
            LineKind::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for UK telephone validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TelephoneRules {
    /// When enabled, eleven-digit numbers must also start with a recognised
    /// prefix (`01`, `02`, `03`, `07` or `08`).
    ///
    /// Disabled by default: historically any eleven-digit string has been
    /// accepted regardless of its leading digits, and existing callers
    /// rely on that.
    pub gate_eleven_digit_prefixes: bool,
}

impl TelephoneRules {
    /// Rules matching historical behaviour.
    pub const fn legacy() -> Self {
        Self {
            gate_eleven_digit_prefixes: false,
        }
    }

    /// Rules that check the prefix for every accepted length.
    pub const fn strict() -> Self {
        Self {
            gate_eleven_digit_prefixes: true,
        }
    }
}

/// Reasons a UK telephone candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelephoneError {
    /// Nothing was left after removing spaces and the international prefix.
    Empty,
    /// The normalized candidate contains something other than ASCII digits.
    NotNumeric {
        /// First offending character.
        found: char,
    },
    /// The digit count is neither ten nor eleven.
    BadLength {
        /// Number of digits after normalization.
        len: usize,
    },
    /// The length is acceptable but the leading digits are not.
    UnknownPrefix {
        /// The two leading digits, as ASCII bytes.
        prefix: [u8; 2],
        /// Number of digits after normalization.
        len: usize,
    },
}

impl fmt::Display for TelephoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelephoneError::Empty => write!(f, "telephone number is empty"),
            TelephoneError::NotNumeric { found } => {
                write!(f, "telephone number contains non-digit {:?}", found)
            }
            TelephoneError::BadLength { len } => {
                write!(f, "telephone number has {} digits (expected 10 or 11)", len)
            }
            TelephoneError::UnknownPrefix { prefix, len } => {
                write!(
                    f,
                    "unrecognised prefix {}{} for a {}-digit telephone number",
                    prefix[0] as char, prefix[1] as char, len
                )
            }
        }
    }
}

impl core::error::Error for TelephoneError {}

/// Which UK postcode format a string matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostcodeKind {
    /// Outward and inward code, e.g. `SW16 2AB`.
    Full,
    /// Outward code only, e.g. `SW16`.
    Outward,
}

/// Reasons an email address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// Address exceeds [`MAX_EMAIL_LENGTH`].
    TooLong {
        /// The actual length in bytes.
        len: usize,
        /// The maximum allowed length in bytes.
        max: usize,
    },
    /// No `@` separates the local part from the domain.
    MissingAt,
    /// The part before the `@` is empty, too long, or not a dot-atom.
    LocalPart,
    /// The part after the `@` is not a dotted host name.
    Domain,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::TooLong { len, max } => {
                write!(f, "email address too long: {} bytes (max: {} bytes)", len, max)
            }
            EmailError::MissingAt => write!(f, "email address has no '@'"),
            EmailError::LocalPart => write!(f, "email address has an invalid local part"),
            EmailError::Domain => write!(f, "email address has an invalid domain"),
        }
    }
}

impl core::error::Error for EmailError {}
