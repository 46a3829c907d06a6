//! Sanitizers: deterministic transforms that neutralize unsafe or
//! malformed input. None of them fail; degenerate input yields an empty
//! string or zero.

pub mod encode;
pub mod filter;
pub mod html;
pub mod numeric;

pub use encode::url_encode;
pub use filter::{sanitize_email, strip_punctuation};
pub use html::{clean_html, strip_html};
pub use numeric::{to_float, to_int};
