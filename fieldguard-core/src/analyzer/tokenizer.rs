//! Search Query Tokenizer
//!
//! Splits a free-text search query into its significant terms, dropping
//! noise words. Given `"What are the top 10 fashion trends of 2015?"` it
//! yields:
//!
//! ```ignore
//! ["top", "10", "fashion", "trends", "2015"]
//! ```
//!
//! ## How It Works
//!
//! 1. The query is split on every single ASCII space (0x20). Runs of spaces
//!    are **not** collapsed, so `"a  b"` has an empty segment in the middle.
//! 2. Each segment is trimmed, lowercased and stripped of `?`.
//! 3. Segments that are noise words are dropped; everything else is kept in
//!    left-to-right order, since callers may weight leading terms higher.
//!
//! Empty segments are not noise words and therefore survive as empty
//! terms. Callers that do not want them should collapse whitespace first.

use memchr::memchr_iter;

use crate::analyzer::noise::is_noise_word;

/// Whitespace removed from both ends of a segment.
#[inline(always)]
const fn is_trim_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Splits search queries into terms and removes noise words.
///
/// ## Example
///
/// ```
/// use fieldguard_core::analyzer::SearchTokenizer;
///
/// let tokenizer = SearchTokenizer::new();
/// let terms = tokenizer.remove_noise_words("Top 10 fashion trends 2015");
///
/// assert_eq!(terms, ["top", "10", "fashion", "trends", "2015"]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct SearchTokenizer;

impl SearchTokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Emits every raw space-separated segment with its position.
    ///
    /// Segments are slices of `query`, empty ones included. An empty query
    /// emits a single empty segment. After emitting a segment at position
    /// `u32::MAX`, further emissions stop.
    #[allow(clippy::needless_lifetimes)]
    pub fn segments<'q, F>(&self, query: &'q str, mut emit: F)
    where
        F: FnMut(&'q str, u32),
    {
        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', query.as_bytes()) {
            emit(&query[start..i], pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
            start = i + 1;
        }

        emit(&query[start..], pos);
    }

    /// Emits each significant term with the position of its source segment.
    ///
    /// Terms are written into one reused buffer, so the `&str` passed to
    /// `emit` is only valid for the duration of the call.
    pub fn for_each_term<F>(&self, query: &str, mut emit: F)
    where
        F: FnMut(&str, u32),
    {
        let mut term = String::new();

        self.segments(query, |segment, pos| {
            term.clear();
            for c in segment.trim_matches(is_trim_char).chars() {
                if c == '?' {
                    continue;
                }
                term.extend(c.to_lowercase());
            }

            if !is_noise_word(&term) {
                emit(&term, pos);
            }
        });
    }

    /// Returns the significant terms of `query`, in order.
    pub fn remove_noise_words(&self, query: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.for_each_term(query, |term, _| out.push(term.to_owned()));
        out
    }
}
