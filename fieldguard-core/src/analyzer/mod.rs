//! Free-text analysis.
//!
//! This module provides the text reshaping components:
//! - **NameNormalizer**: Cleans and re-cases personal names
//! - **SearchTokenizer**: Splits search queries into significant terms
//! - **noise**: The fixed noise-word set the tokenizer filters against

pub mod name;
pub mod noise;
pub mod tokenizer;

pub use name::NameNormalizer;
pub use noise::{is_noise_word, noise_words};
pub use tokenizer::SearchTokenizer;
