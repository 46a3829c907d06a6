//! Email address syntax checks.
//!
//! Accepts the common `local@domain` shape: a dot-atom local part of at
//! most 64 characters and a dotted host name with at least two labels.
//! Quoted local parts and IP-literal domains are not accepted. The whole
//! address may not exceed [`MAX_EMAIL_LENGTH`] bytes.

use std::sync::LazyLock;

use fieldguard_types::{EmailError, MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_LENGTH};
use regex::Regex;
use tracing::trace;

static LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("local part pattern is valid")
});

static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    )
    .expect("domain pattern is valid")
});

/// Validates the syntax of an email address.
///
/// # Errors
///
/// Returns the reason the address was rejected.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    let result = check(email);
    if let Err(err) = &result {
        trace!(%err, input_len = email.len(), "email address rejected");
    }
    result
}

fn check(email: &str) -> Result<(), EmailError> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(EmailError::TooLong {
            len: email.len(),
            max: MAX_EMAIL_LENGTH,
        });
    }

    let (local, domain) = email.rsplit_once('@').ok_or(EmailError::MissingAt)?;

    if local.len() > MAX_EMAIL_LOCAL_LENGTH || !LOCAL_PART.is_match(local) {
        return Err(EmailError::LocalPart);
    }

    if !DOMAIN.is_match(domain) {
        return Err(EmailError::Domain);
    }

    Ok(())
}

/// Returns true if `email` is a syntactically valid address.
///
/// ```
/// use fieldguard_core::validate::is_valid_email;
///
/// assert!(is_valid_email("abc@example.com"));
/// assert!(!is_valid_email("abc\"example.com"));
/// ```
#[inline]
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}
