//! Sentence-level predictors.
//!
//! A predictor maps one sentence to one label of its mode. Lexicon
//! heuristics need no training; [`TrainedPredictor`] pairs a feature
//! extractor with a classifier and persists what it learns.

mod lexicon;
mod trained;

pub use lexicon::{MaxEmotionScore, MaxSentimentScore, OpinionLexiconCount, TieBreak};
pub use trained::TrainedPredictor;

use crate::corpus::LabeledExample;
use crate::error::{Result, SentirError};
use crate::resources::Resources;

/// Predicts the label of a single sentence.
///
/// Call [`ensure_ready`](SentencePredictor::ensure_ready) before the first
/// prediction. Evaluation drivers instead call
/// [`prepare`](SentencePredictor::prepare) and then `train` per fold.
pub trait SentencePredictor {
    /// Registry name.
    fn name(&self) -> &str;

    /// Resolves lexicons, the normalizer and the cache. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if a required data set cannot be loaded.
    fn prepare(&mut self, resources: &Resources) -> Result<()>;

    /// Whether `train` learns anything.
    fn is_trainable(&self) -> bool {
        false
    }

    /// Learns from labeled sentences; `persist` also writes the model cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the predictor is not prepared or training fails.
    fn train(&mut self, _training_set: &[LabeledExample], _persist: bool) -> Result<()> {
        Ok(())
    }

    /// Prepares the predictor and makes it able to predict, loading or
    /// training a model when needed.
    ///
    /// # Errors
    ///
    /// Returns an error if data sets cannot be loaded or training fails.
    fn ensure_ready(&mut self, resources: &Resources) -> Result<()> {
        self.prepare(resources)
    }

    /// Label of one sentence.
    ///
    /// # Errors
    ///
    /// Returns an error if the predictor is not ready.
    fn predict(&mut self, sentence: &str) -> Result<String>;
}

pub(crate) fn not_prepared(name: &str) -> SentirError {
    SentirError::Other(format!("{name} is not prepared, call ensure_ready() first"))
}
