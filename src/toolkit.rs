//! Facade selecting a sentence-level and a document-level predictor.
//!
//! Predictors are picked by index from per-mode registries. The index order
//! of the built-in entries is stable; [`Registry::register`] appends new
//! entries after them. An index past the end falls back to entry 0.

use crate::classification::ClassifierKind;
use crate::config::ToolkitConfig;
use crate::document::{DocumentAggregator, Last, MostContinuous, MostFrequent};
use crate::error::{Result, SentirError};
use crate::evaluation::{cross_validate, EvaluationResult};
use crate::features::FeatureKind;
use crate::labels::Mode;
use crate::resources::Resources;
use crate::sentence::{
    MaxEmotionScore, MaxSentimentScore, OpinionLexiconCount, SentencePredictor, TrainedPredictor,
};
use serde::{Deserialize, Serialize};
use std::fmt;

type Factory<T> = Box<dyn Fn() -> Box<T>>;

/// Ordered, append-only list of named factories.
pub struct Registry<T: ?Sized> {
    entries: Vec<(String, Factory<T>)>,
}

impl<T: ?Sized> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a factory and returns its index.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> usize
    where
        F: Fn() -> Box<T> + 'static,
    {
        self.entries.push((name.into(), Box::new(factory)));
        self.entries.len() - 1
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index actually used for `index`: itself when in range, else 0.
    #[must_use]
    pub fn resolve(&self, index: usize) -> usize {
        if index < self.entries.len() {
            index
        } else {
            0
        }
    }

    /// Name of the entry `index` resolves to.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries
            .get(self.resolve(index))
            .map(|(name, _)| name.as_str())
    }

    /// Entry names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Instantiates the entry `index` resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is empty.
    pub fn create(&self, index: usize) -> Result<Box<T>> {
        self.entries
            .get(self.resolve(index))
            .map(|(_, factory)| factory())
            .ok_or_else(|| SentirError::empty_input("registry has no entries"))
    }

    /// `0 => First, 1 => Second, `
    #[must_use]
    pub fn help(&self) -> String {
        self.names()
            .enumerate()
            .map(|(i, name)| format!("{i} => {name}, "))
            .collect()
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn trained(
    registry: &mut Registry<dyn SentencePredictor>,
    mode: Mode,
    feature: FeatureKind,
    kind: ClassifierKind,
) {
    let name = format!("{}{}", feature.predictor_prefix(mode), kind.short_name());
    registry.register(name, move || Box::new(TrainedPredictor::new(mode, feature, kind)));
}

/// Built-in sentence-level predictors of a mode.
///
/// # Examples
///
/// ```
/// use sentir::labels::Mode;
/// use sentir::toolkit::sentence_registry;
///
/// let registry = sentence_registry(Mode::Sentiment);
/// assert_eq!(registry.len(), 12);
/// assert_eq!(registry.name(4), Some("OpinionLexiconSentimentCount"));
/// ```
#[must_use]
pub fn sentence_registry(mode: Mode) -> Registry<dyn SentencePredictor> {
    use ClassifierKind::{BernoulliNB, GaussianNB, LinearSVM, LogisticRegression, MultinomialNB};
    use FeatureKind::{Bigram, LexiconScore, Unigram};

    let mut registry: Registry<dyn SentencePredictor> = Registry::new();
    match mode {
        Mode::Sentiment => {
            trained(&mut registry, mode, Unigram, MultinomialNB);
            trained(&mut registry, mode, Unigram, BernoulliNB);
            trained(&mut registry, mode, Unigram, LogisticRegression);
            trained(&mut registry, mode, Unigram, GaussianNB);
            registry.register("OpinionLexiconSentimentCount", || {
                Box::new(OpinionLexiconCount::new())
            });
            trained(&mut registry, mode, Bigram, MultinomialNB);
            trained(&mut registry, mode, Bigram, BernoulliNB);
            trained(&mut registry, mode, Bigram, GaussianNB);
            trained(&mut registry, mode, Unigram, LinearSVM);
            registry.register("MaxSentimentScore", || Box::new(MaxSentimentScore::new()));
            trained(&mut registry, mode, Bigram, LogisticRegression);
            trained(&mut registry, mode, Bigram, LinearSVM);
        }
        Mode::Emotion => {
            trained(&mut registry, mode, LexiconScore, MultinomialNB);
            trained(&mut registry, mode, LexiconScore, LinearSVM);
            trained(&mut registry, mode, Unigram, MultinomialNB);
            trained(&mut registry, mode, Unigram, BernoulliNB);
            trained(&mut registry, mode, LexiconScore, GaussianNB);
            trained(&mut registry, mode, Unigram, GaussianNB);
            registry.register("MaxEmotionScore", || Box::new(MaxEmotionScore::new()));
            trained(&mut registry, mode, Unigram, LinearSVM);
            trained(&mut registry, mode, LexiconScore, BernoulliNB);
            trained(&mut registry, mode, LexiconScore, LogisticRegression);
            trained(&mut registry, mode, Unigram, LogisticRegression);
        }
    }
    registry
}

/// Built-in document-level aggregators, shared by both modes.
#[must_use]
pub fn document_registry() -> Registry<dyn DocumentAggregator> {
    let mut registry: Registry<dyn DocumentAggregator> = Registry::new();
    registry.register("MostFrequent", || Box::new(MostFrequent));
    registry.register("Last", || Box::new(Last));
    registry.register("MostContinuous", || Box::new(MostContinuous));
    registry
}

/// Result of analysing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Document label, `None` when the document has no sentences
    pub tag: Option<String>,
    /// One label per sentence, in order
    pub tags: Vec<String>,
}

/// Emotion or sentiment analysis of whole documents.
///
/// # Examples
///
/// ```
/// use sentir::config::ToolkitConfig;
/// use sentir::labels::Mode;
/// use sentir::lexicon::OpinionLexicon;
/// use sentir::resources::Resources;
/// use sentir::toolkit::Toolkit;
///
/// let resources = Resources::new(ToolkitConfig::new().with_cache_enabled(false))
///     .with_opinion_lexicon(OpinionLexicon::parse("great\nfun\n", "dull\n"));
/// let mut toolkit = Toolkit::with_resources(resources, Mode::Sentiment)
///     .with_sentence_level(4)
///     .with_document_level(2);
///
/// let analysis = toolkit
///     .analyse("A great cast. Dull plot. Dull ending.")
///     .expect("lexicon loaded");
/// assert_eq!(analysis.tags, vec!["positive", "negative", "negative"]);
/// assert_eq!(analysis.tag.as_deref(), Some("negative"));
/// ```
pub struct Toolkit {
    mode: Mode,
    resources: Resources,
    sentences: Registry<dyn SentencePredictor>,
    documents: Registry<dyn DocumentAggregator>,
    sentence_index: usize,
    document_index: usize,
    sentence_level: Option<Box<dyn SentencePredictor>>,
    club: bool,
}

impl Toolkit {
    /// Creates a toolkit with predictors 0 and 0 of `mode`.
    #[must_use]
    pub fn new(config: ToolkitConfig, mode: Mode) -> Self {
        Self::with_resources(Resources::new(config), mode)
    }

    /// Creates a toolkit over already built resources.
    #[must_use]
    pub fn with_resources(resources: Resources, mode: Mode) -> Self {
        Self {
            mode,
            resources,
            sentences: sentence_registry(mode),
            documents: document_registry(),
            sentence_index: 0,
            document_index: 0,
            sentence_level: None,
            club: false,
        }
    }

    /// Selects the sentence-level predictor.
    #[must_use]
    pub fn with_sentence_level(mut self, index: usize) -> Self {
        self.select_sentence_level(index);
        self
    }

    /// Selects the document-level aggregator.
    #[must_use]
    pub fn with_document_level(mut self, index: usize) -> Self {
        self.select_document_level(index);
        self
    }

    /// Treats each document as a single sentence.
    #[must_use]
    pub fn with_club(mut self, club: bool) -> Self {
        self.club = club;
        self
    }

    /// Switches the sentence-level predictor; returns the index in use.
    pub fn select_sentence_level(&mut self, index: usize) -> usize {
        let resolved = self.sentences.resolve(index);
        if resolved != index {
            log::warn!("no sentence-level algorithm {index}, using {resolved}");
        }
        if resolved != self.sentence_index {
            self.sentence_level = None;
        }
        self.sentence_index = resolved;
        resolved
    }

    /// Switches the document-level aggregator; returns the index in use.
    pub fn select_document_level(&mut self, index: usize) -> usize {
        let resolved = self.documents.resolve(index);
        if resolved != index {
            log::warn!("no document-level algorithm {index}, using {resolved}");
        }
        self.document_index = resolved;
        resolved
    }

    /// Adds a sentence-level predictor for this toolkit's mode.
    pub fn register_sentence_level<F>(&mut self, name: impl Into<String>, factory: F) -> usize
    where
        F: Fn() -> Box<dyn SentencePredictor> + 'static,
    {
        self.sentences.register(name, factory)
    }

    /// Adds a document-level aggregator.
    pub fn register_document_level<F>(&mut self, name: impl Into<String>, factory: F) -> usize
    where
        F: Fn() -> Box<dyn DocumentAggregator> + 'static,
    {
        self.documents.register(name, factory)
    }

    /// Analysis mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Shared data sets.
    #[must_use]
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Sentence-level registry.
    #[must_use]
    pub fn sentence_levels(&self) -> &Registry<dyn SentencePredictor> {
        &self.sentences
    }

    /// Document-level registry.
    #[must_use]
    pub fn document_levels(&self) -> &Registry<dyn DocumentAggregator> {
        &self.documents
    }

    /// Name of the selected sentence-level predictor.
    #[must_use]
    pub fn sentence_level_name(&self) -> &str {
        self.sentences.name(self.sentence_index).unwrap_or_default()
    }

    /// Name of the selected document-level aggregator.
    #[must_use]
    pub fn document_level_name(&self) -> &str {
        self.documents.name(self.document_index).unwrap_or_default()
    }

    /// Labels every sentence of `document`, then the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the sentence-level predictor cannot be made ready
    /// or fails to predict.
    pub fn analyse(&mut self, document: &str) -> Result<Analysis> {
        let sentences = if self.club {
            vec![document.to_string()]
        } else {
            self.resources.normalizer().split_into_sentences(document)
        };

        let predictor = self.sentence_level(true)?;
        let tags = sentences
            .iter()
            .map(|sentence| predictor.predict(sentence))
            .collect::<Result<Vec<String>>>()?;

        let aggregator = self.documents.create(self.document_index)?;
        let tag = aggregator.aggregate(&tags);
        Ok(Analysis { tag, tags })
    }

    /// Trains the selected predictor on the full corpus and persists it.
    ///
    /// Returns false when the predictor has nothing to learn.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded or training fails.
    pub fn train(&mut self) -> Result<bool> {
        let corpus = self.resources.corpus(self.mode)?;
        let predictor = self.sentence_level(false)?;
        if !predictor.is_trainable() {
            log::info!("{} needs no training", predictor.name());
            return Ok(false);
        }
        predictor.train(&corpus.to_examples(), true)?;
        Ok(true)
    }

    /// k-fold cross-validation of the selected predictor.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded, `folds` is below 2,
    /// or training or prediction fails.
    pub fn evaluate(&mut self, folds: usize) -> Result<EvaluationResult> {
        let corpus = self.resources.corpus(self.mode)?;
        let predictor = self.sentence_level(false)?;
        let result = cross_validate(predictor.as_mut(), &corpus, folds);
        // the last fold's model must not serve later analyses
        self.sentence_level = None;
        result
    }

    /// The selected predictor, created on first use, then prepared or made ready.
    fn sentence_level(&mut self, ready: bool) -> Result<&mut Box<dyn SentencePredictor>> {
        let predictor = match &mut self.sentence_level {
            Some(predictor) => predictor,
            slot => slot.insert(self.sentences.create(self.sentence_index)?),
        };
        if ready {
            predictor.ensure_ready(&self.resources)?;
        } else {
            predictor.prepare(&self.resources)?;
        }
        Ok(predictor)
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit")
            .field("mode", &self.mode)
            .field("sentence_level", &self.sentence_level_name())
            .field("document_level", &self.document_level_name())
            .field("club", &self.club)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "toolkit_tests.rs"]
mod tests;
