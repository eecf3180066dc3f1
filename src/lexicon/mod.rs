//! Word-level lexicons for heuristic predictions and score features.
//!
//! - [`OpinionLexicon`]: positive/negative opinion words
//! - [`SentiWordNet`]: negative and positive score per word
//! - [`WordEmotionScore`]: NRC hashtag emotion scores per word
//!
//! Lexicons are parsed once, then shared read-only. Parsing is lenient:
//! blank and malformed lines are skipped, never fatal, except where a
//! numeric column cannot be read.

mod emotion;
mod opinion;
mod sentiwordnet;

pub use emotion::WordEmotionScore;
pub use opinion::{OpinionCounts, OpinionLexicon, Polarity};
pub use sentiwordnet::{SentiWordNet, SentimentScore};

use crate::text::TextNormalizer;

/// A lexicon that maps a token sequence to a fixed number of summed scores.
pub trait ScoreLexicon {
    /// Number of score dimensions.
    fn dimensions(&self) -> usize;

    /// Name of each dimension, in output order.
    fn dimension_names(&self) -> Vec<&'static str>;

    /// Per-word scores of one lowercase word, if the word is known.
    fn word_scores(&self, word: &str) -> Option<&[f32]>;

    /// Sums word scores across the tokens.
    ///
    /// Tokens are matched lowercase. With `allow_negation`, the scores of
    /// tokens inside a negation scope are subtracted instead of added.
    fn score_tokens(&self, tokens: &[String], allow_negation: bool) -> Vec<f32> {
        let mut totals = vec![0.0; self.dimensions()];
        for (word, negated) in scoped_lowercase(tokens, allow_negation) {
            if let Some(scores) = self.word_scores(&word) {
                let sign = if negated { -1.0 } else { 1.0 };
                for (total, score) in totals.iter_mut().zip(scores) {
                    *total += sign * score;
                }
            }
        }
        totals
    }
}

/// Lowercased tokens paired with their negation flag (all false without negation).
pub(crate) fn scoped_lowercase(tokens: &[String], allow_negation: bool) -> Vec<(String, bool)> {
    let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    if allow_negation {
        TextNormalizer::negate_scope(&lower)
            .into_iter()
            .map(|scoped| (scoped.text, scoped.negated))
            .collect()
    } else {
        lower.into_iter().map(|word| (word, false)).collect()
    }
}
