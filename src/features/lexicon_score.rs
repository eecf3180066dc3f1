use super::{state_mismatch, ExtractorState, FeatureExtractor};
use crate::error::Result;
use crate::lexicon::ScoreLexicon;
use crate::text::TextNormalizer;
use std::fmt;
use std::sync::Arc;

/// Summed lexicon scores of a sentence's tokens.
///
/// Nothing is learned; `fit` is a no-op and the vector length is the
/// number of lexicon dimensions. Negation is off unless enabled with
/// [`LexiconScoreExtractor::with_negation`].
pub struct LexiconScoreExtractor {
    normalizer: Arc<TextNormalizer>,
    lexicon: Arc<dyn ScoreLexicon + Send + Sync>,
    allow_negation: bool,
}

impl LexiconScoreExtractor {
    /// Creates an extractor over a shared lexicon.
    pub fn new(
        normalizer: Arc<TextNormalizer>,
        lexicon: Arc<dyn ScoreLexicon + Send + Sync>,
    ) -> Self {
        Self {
            normalizer,
            lexicon,
            allow_negation: false,
        }
    }

    /// Subtract the scores of words inside a negation scope.
    #[must_use]
    pub fn with_negation(mut self, allow_negation: bool) -> Self {
        self.allow_negation = allow_negation;
        self
    }

    /// Names of the vector entries.
    #[must_use]
    pub fn dimension_names(&self) -> Vec<&'static str> {
        self.lexicon.dimension_names()
    }
}

impl FeatureExtractor for LexiconScoreExtractor {
    fn fit(&mut self, _sentences: &[&str]) -> Result<()> {
        Ok(())
    }

    fn transform(&self, sentence: &str) -> Result<Vec<f32>> {
        let tokens = self.normalizer.tokenize(sentence);
        Ok(self.lexicon.score_tokens(&tokens, self.allow_negation))
    }

    fn dimension(&self) -> usize {
        self.lexicon.dimensions()
    }

    fn state(&self) -> ExtractorState {
        ExtractorState::Stateless
    }

    fn restore(&mut self, state: ExtractorState) -> Result<()> {
        match state {
            ExtractorState::Stateless => Ok(()),
            other => Err(state_mismatch("LexiconScoreExtractor", &other)),
        }
    }
}

impl fmt::Debug for LexiconScoreExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LexiconScoreExtractor")
            .field("dimensions", &self.lexicon.dimension_names())
            .field("allow_negation", &self.allow_negation)
            .finish_non_exhaustive()
    }
}
