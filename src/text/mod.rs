//! Text normalization for sentence classification.
//!
//! This module provides:
//! - Word tokenizers (Unicode word boundaries, whitespace fallback)
//! - Sentence splitters (abbreviation-aware rules, regex fallback)
//! - Negation scoping and `NOT_` marking
//! - Stop word removal
//! - Stemming used as lemmatization
//!
//! [`TextNormalizer`] bundles them behind the capabilities chosen in
//! [`NlpCapabilities`](crate::config::NlpCapabilities).
//!
//! # Examples
//!
//! ```
//! use sentir::text::TextNormalizer;
//!
//! let tokens = vec!["not", "good", ".", "bad"];
//! let marked = TextNormalizer::mark_negations(&tokens);
//! assert_eq!(marked, vec!["not", "NOT_good", ".", "bad"]);
//! ```

pub mod lemmatize;
mod normalize;
pub mod stopwords;
pub mod tokenize;

pub use normalize::{
    is_negation_cue, is_punctuation, to_ascii, ScopedToken, TextNormalizer, NEGATION_CUES,
    NEGATION_PREFIX,
};

/// Splits text into word and punctuation tokens.
pub trait Tokenizer {
    /// Tokenize text into a list of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
