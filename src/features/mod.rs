//! Sentence to feature vector conversion.
//!
//! An extractor owns the meaning of every index in the vectors it
//! produces, so the same extractor (or a restored copy of its state) must
//! be used for training and prediction.
//!
//! - [`NgramVectorizer`]: unigram or bigram presence over a learned vocabulary
//! - [`LexiconScoreExtractor`]: summed lexicon scores, one per lexicon dimension

mod lexicon_score;
mod ngram;

pub use lexicon_score::LexiconScoreExtractor;
pub use ngram::{NgramOrder, NgramPipeline, NgramVectorizer};

use crate::error::{Result, SentirError};
use crate::labels::Mode;
use crate::primitives::Matrix;
use crate::resources::Resources;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Learned state of an extractor, persisted next to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractorState {
    /// Nothing is learned
    Stateless,
    /// Vocabulary terms in index order
    Vocabulary(Vec<String>),
}

/// Converts sentences into fixed-length numeric vectors.
pub trait FeatureExtractor {
    /// Learns whatever the extractor needs from training sentences.
    ///
    /// # Errors
    ///
    /// Returns an error if the extractor cannot learn from the sentences.
    fn fit(&mut self, sentences: &[&str]) -> Result<()>;

    /// Feature vector of one sentence, `dimension()` long.
    ///
    /// # Errors
    ///
    /// Returns an error if the extractor has not been fitted.
    fn transform(&self, sentence: &str) -> Result<Vec<f32>>;

    /// Length of every produced vector.
    fn dimension(&self) -> usize;

    /// Snapshot of the learned state.
    fn state(&self) -> ExtractorState;

    /// Replaces the learned state with a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot belongs to another kind of extractor.
    fn restore(&mut self, state: ExtractorState) -> Result<()>;

    /// Feature matrix with one row per sentence.
    ///
    /// # Errors
    ///
    /// Returns an error if any sentence cannot be transformed.
    fn transform_all(&self, sentences: &[&str]) -> Result<Matrix<f32>> {
        let cols = self.dimension();
        let mut data = Vec::with_capacity(sentences.len() * cols);
        for sentence in sentences {
            data.extend(self.transform(sentence)?);
        }
        Ok(Matrix::from_vec(sentences.len(), cols, data)?)
    }
}

/// Feature set a trained predictor learns from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Presence of single normalized words
    Unigram,
    /// Presence of adjacent word pairs
    Bigram,
    /// Summed lexicon scores: SentiWordNet for sentiment, NRC emotion scores for emotion
    LexiconScore,
}

impl FeatureKind {
    /// Prefix of predictor names built on this feature set.
    #[must_use]
    pub fn predictor_prefix(self, mode: Mode) -> &'static str {
        match (self, mode) {
            (FeatureKind::Unigram, Mode::Sentiment) => "UnigramSentiment",
            (FeatureKind::Unigram, Mode::Emotion) => "UnigramEmotion",
            (FeatureKind::Bigram, Mode::Sentiment) => "BigramSentiment",
            (FeatureKind::Bigram, Mode::Emotion) => "BigramEmotion",
            (FeatureKind::LexiconScore, Mode::Sentiment) => "SentimentScore",
            (FeatureKind::LexiconScore, Mode::Emotion) => "EmotionScore",
        }
    }

    /// Short tag of the settings that shape this feature set, such as
    /// `v3000wl`: vocabulary limit, then `w` for Unicode word segmentation
    /// and `l` for lemmatization when they are active.
    #[must_use]
    pub fn fingerprint(self, resources: &Resources) -> String {
        let config = resources.config();
        let mut tag = match self {
            FeatureKind::Unigram => format!("v{}", config.unigram_limit),
            FeatureKind::Bigram => format!("v{}", config.bigram_limit),
            FeatureKind::LexiconScore => String::new(),
        };
        let capabilities = resources.normalizer().capabilities();
        if capabilities.tokenizer {
            tag.push('w');
        }
        if capabilities.lemmatizer {
            tag.push('l');
        }
        tag
    }

    /// Builds an unfitted extractor of this kind for a mode.
    ///
    /// # Errors
    ///
    /// Returns an error if a lexicon needed by the extractor cannot be loaded.
    pub fn build(self, mode: Mode, resources: &Resources) -> Result<Box<dyn FeatureExtractor>> {
        let normalizer = resources.normalizer();
        let config = resources.config();
        Ok(match self {
            FeatureKind::Unigram => Box::new(NgramVectorizer::new(
                normalizer,
                NgramOrder::Unigram,
                NgramPipeline::unigram(mode),
                config.unigram_limit,
            )),
            FeatureKind::Bigram => Box::new(NgramVectorizer::new(
                normalizer,
                NgramOrder::Bigram,
                NgramPipeline::bigram(),
                config.bigram_limit,
            )),
            FeatureKind::LexiconScore => match mode {
                Mode::Sentiment => Box::new(LexiconScoreExtractor::new(
                    normalizer,
                    resources.sentiwordnet()?,
                )),
                Mode::Emotion => Box::new(LexiconScoreExtractor::new(
                    normalizer,
                    resources.word_emotion_scores()?,
                )),
            },
        })
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FeatureKind::Unigram => "unigram",
            FeatureKind::Bigram => "bigram",
            FeatureKind::LexiconScore => "lexicon-score",
        };
        f.write_str(name)
    }
}

pub(crate) fn state_mismatch(extractor: &str, state: &ExtractorState) -> SentirError {
    let found = match state {
        ExtractorState::Stateless => "stateless snapshot",
        ExtractorState::Vocabulary(_) => "vocabulary snapshot",
    };
    SentirError::Other(format!("{extractor} cannot restore a {found}"))
}

#[cfg(test)]
mod tests;
