use super::{state_mismatch, ExtractorState, FeatureExtractor};
use crate::error::{Result, SentirError};
use crate::labels::Mode;
use crate::text::TextNormalizer;
use std::collections::HashMap;
use std::sync::Arc;

const START_MARKER: &str = "$";
const END_MARKER: &str = "^";

/// Single words or adjacent word pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramOrder {
    /// Single words
    Unigram,
    /// Adjacent pairs, with `$` before the first and `^` after the last word
    Bigram,
}

/// Optional steps of the n-gram normalization pipeline.
///
/// Sentences are always lowercased, tokenized and stripped of punctuation;
/// the steps below run in declaration order around that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramPipeline {
    /// Prefix `NOT_` to words in a negation scope (before punctuation removal)
    pub negation: bool,
    /// Drop stop words
    pub stop_words: bool,
    /// Stem every word
    pub lemmatize: bool,
}

impl NgramPipeline {
    /// Unigram pipeline; emotion mode also drops stop words.
    #[must_use]
    pub fn unigram(mode: Mode) -> Self {
        Self {
            negation: true,
            stop_words: mode == Mode::Emotion,
            lemmatize: true,
        }
    }

    /// Bigram pipeline: negation marking only.
    #[must_use]
    pub fn bigram() -> Self {
        Self {
            negation: true,
            stop_words: false,
            lemmatize: false,
        }
    }
}

/// Presence vectors over a vocabulary of the most frequent training n-grams.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use sentir::config::NlpCapabilities;
/// use sentir::features::{FeatureExtractor, NgramOrder, NgramPipeline, NgramVectorizer};
/// use sentir::text::TextNormalizer;
///
/// let normalizer = Arc::new(TextNormalizer::new(NlpCapabilities::none()));
/// let pipeline = NgramPipeline { negation: true, stop_words: false, lemmatize: false };
/// let mut vectorizer = NgramVectorizer::new(normalizer, NgramOrder::Unigram, pipeline, 10);
///
/// vectorizer.fit(&["good film", "not good"]).expect("non-empty training set");
/// assert_eq!(vectorizer.vocabulary(), ["NOT_good", "film", "good", "not"]);
/// assert_eq!(vectorizer.transform("Good , good").expect("fitted"), vec![0.0, 0.0, 1.0, 0.0]);
/// ```
pub struct NgramVectorizer {
    normalizer: Arc<TextNormalizer>,
    order: NgramOrder,
    pipeline: NgramPipeline,
    max_features: usize,
    terms: Vec<String>,
    index: HashMap<String, usize>,
    fitted: bool,
}

impl NgramVectorizer {
    /// Creates an unfitted vectorizer keeping at most `max_features` terms.
    #[must_use]
    pub fn new(
        normalizer: Arc<TextNormalizer>,
        order: NgramOrder,
        pipeline: NgramPipeline,
        max_features: usize,
    ) -> Self {
        Self {
            normalizer,
            order,
            pipeline,
            max_features,
            terms: Vec::new(),
            index: HashMap::new(),
            fitted: false,
        }
    }

    /// Learned terms in index order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.terms
    }

    /// Normalized words of a sentence.
    #[must_use]
    pub fn normalize(&self, sentence: &str) -> Vec<String> {
        let mut words = self.normalizer.tokenize(&sentence.to_lowercase());
        if self.pipeline.negation {
            words = TextNormalizer::mark_negations(&words);
        }
        words = TextNormalizer::remove_punctuation(words);
        if self.pipeline.stop_words {
            words = self.normalizer.remove_stop_words(words);
        }
        if self.pipeline.lemmatize {
            words = self.normalizer.lemmatize(&words);
        }
        words
    }

    /// Terms of a sentence: its words, or its bigrams.
    #[must_use]
    pub fn terms(&self, sentence: &str) -> Vec<String> {
        let words = self.normalize(sentence);
        match self.order {
            NgramOrder::Unigram => words,
            NgramOrder::Bigram => {
                let mut padded = Vec::with_capacity(words.len() + 2);
                padded.push(START_MARKER.to_string());
                padded.extend(words);
                padded.push(END_MARKER.to_string());
                padded.windows(2).map(|pair| pair.join(" ")).collect()
            }
        }
    }

    fn set_vocabulary(&mut self, terms: Vec<String>) {
        self.index = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();
        self.terms = terms;
        self.fitted = true;
    }
}

impl FeatureExtractor for NgramVectorizer {
    fn fit(&mut self, sentences: &[&str]) -> Result<()> {
        if sentences.is_empty() {
            return Err(SentirError::empty_input("no training sentences"));
        }
        if self.max_features == 0 {
            return Err(SentirError::InvalidHyperparameter {
                param: "max_features".to_string(),
                value: "0".to_string(),
                constraint: "> 0".to_string(),
            });
        }

        let mut counts: HashMap<String, usize> = HashMap::new();
        for sentence in sentences {
            for term in self.terms(sentence) {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
        ranked.sort_by(|(a_term, a_count), (b_term, b_count)| {
            b_count.cmp(a_count).then_with(|| a_term.cmp(b_term))
        });
        ranked.truncate(self.max_features);

        // index order is lexicographic so the layout does not depend on counts
        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();
        log::debug!(
            "{:?} vocabulary: {} terms from {} sentences",
            self.order,
            terms.len(),
            sentences.len()
        );
        self.set_vocabulary(terms);
        Ok(())
    }

    fn transform(&self, sentence: &str) -> Result<Vec<f32>> {
        if !self.fitted {
            return Err(SentirError::not_fitted("NgramVectorizer"));
        }
        let mut vector = vec![0.0; self.terms.len()];
        for term in self.terms(sentence) {
            if let Some(&idx) = self.index.get(&term) {
                vector[idx] = 1.0;
            }
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.terms.len()
    }

    fn state(&self) -> ExtractorState {
        ExtractorState::Vocabulary(self.terms.clone())
    }

    fn restore(&mut self, state: ExtractorState) -> Result<()> {
        match state {
            ExtractorState::Vocabulary(terms) => {
                self.set_vocabulary(terms);
                Ok(())
            }
            other => Err(state_mismatch("NgramVectorizer", &other)),
        }
    }
}

impl std::fmt::Debug for NgramVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NgramVectorizer")
            .field("order", &self.order)
            .field("pipeline", &self.pipeline)
            .field("max_features", &self.max_features)
            .field("vocabulary", &self.terms.len())
            .finish_non_exhaustive()
    }
}
