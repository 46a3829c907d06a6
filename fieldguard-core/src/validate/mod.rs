//! Validators: pure predicates that classify a string as conforming to a
//! recognized format. Each boolean check has a typed counterpart where the
//! rejection reason is useful to callers.

pub mod email;
pub mod postcode;
pub mod telephone;
pub mod text;

pub use email::{is_valid_email, validate_email};
pub use telephone::{is_valid_uk_telephone, UkTelephone};
pub use text::{is_non_empty_text, is_numeric};
