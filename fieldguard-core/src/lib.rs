//! Sanitizers and validators for short, user-supplied form fields.
//!
//! Every function here is pure and total: malformed input yields an empty
//! string, zero or `false`, never a panic. The crate root is a flat facade
//! for form-handling code; the modules expose the building blocks and the
//! typed variants that report *why* something was rejected.
//!
//! - [`analyzer`]: name cleanup and search-query tokenization
//! - [`sanitize`]: HTML, numeric, URL and character-class transforms
//! - [`validate`]: email, presence, numeric, UK postcode and UK telephone checks
//!
//! # Examples
//!
//! ```
//! use fieldguard_core as fg;
//!
//! assert_eq!(fg::cleanse_name("shaun c wright-phillips"), "Shaun C Wright-Phillips");
//! assert_eq!(
//!     fg::remove_noise_words("What are the top 10 fashion trends of 2015?"),
//!     ["top", "10", "fashion", "trends", "2015"]
//! );
//! assert!(fg::is_valid_full_uk_postcode("NN4 7EB"));
//! assert!(fg::is_valid_uk_telephone("+441234 567890"));
//! ```

pub mod analyzer;
pub mod sanitize;
pub mod validate;

pub use fieldguard_types::{EmailError, LineKind, PostcodeKind, TelephoneError, TelephoneRules};

pub use sanitize::{
    clean_html, sanitize_email, strip_html, strip_punctuation, to_float, to_int, url_encode,
};
pub use validate::{
    is_non_empty_text, is_numeric, is_valid_email, is_valid_uk_telephone, validate_email,
    UkTelephone,
};

use analyzer::{NameNormalizer, SearchTokenizer};
use validate::postcode;

/// Cleans and re-cases a personal name.
///
/// See [`NameNormalizer`] for the exact steps.
#[inline]
pub fn cleanse_name(s: &str) -> String {
    NameNormalizer::new().cleanse(s)
}

/// Splits a search query into its significant, lowercase terms.
///
/// See [`SearchTokenizer`] for the splitting rules.
#[inline]
pub fn remove_noise_words(s: &str) -> Vec<String> {
    SearchTokenizer::new().remove_noise_words(s)
}

/// Returns true if `s` is formatted as a full UK postcode.
#[inline]
pub fn is_valid_full_uk_postcode(s: &str) -> bool {
    postcode::is_valid_full(s)
}

/// Returns true if `s` is a full UK postcode or an outward code.
#[inline]
pub fn is_valid_partial_uk_postcode(s: &str) -> bool {
    postcode::is_valid_partial(s)
}
