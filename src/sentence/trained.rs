use super::{not_prepared, SentencePredictor};
use crate::classification::{Classifier, ClassifierKind, Engine};
use crate::corpus::LabeledExample;
use crate::error::{Result, SentirError};
use crate::features::{ExtractorState, FeatureExtractor, FeatureKind};
use crate::labels::Mode;
use crate::primitives::Matrix;
use crate::resources::Resources;
use crate::storage::Storage;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// A classifier over the features of one extractor.
///
/// Training fits the extractor first, then the classifier on the extracted
/// matrix. With `persist`, the pair `(classifier, extractor state)` is
/// cached under [`cache_key`](TrainedPredictor::cache_key), which carries
/// the feature settings once the predictor is prepared.
/// [`ensure_ready`](SentencePredictor::ensure_ready) restores that cache,
/// or trains on the full corpus of the mode when it is missing or unreadable.
///
/// # Examples
///
/// ```
/// use sentir::classification::ClassifierKind;
/// use sentir::features::FeatureKind;
/// use sentir::labels::Mode;
/// use sentir::sentence::{SentencePredictor, TrainedPredictor};
///
/// let predictor =
///     TrainedPredictor::new(Mode::Sentiment, FeatureKind::Unigram, ClassifierKind::MultinomialNB);
/// assert_eq!(predictor.name(), "UnigramSentimentMultinomialNB");
/// assert_eq!(predictor.cache_key(), "sentiment/unigram_sentiment_multinomial_nb");
/// ```
pub struct TrainedPredictor<C = Engine> {
    name: String,
    mode: Mode,
    feature: FeatureKind,
    classifier: C,
    extractor: Option<Box<dyn FeatureExtractor>>,
    fingerprint: String,
    storage: Storage,
    trained: bool,
}

impl TrainedPredictor<Engine> {
    /// Creates a predictor from a feature set and a classifier kind.
    #[must_use]
    pub fn new(mode: Mode, feature: FeatureKind, kind: ClassifierKind) -> Self {
        let name = format!("{}{}", feature.predictor_prefix(mode), kind.short_name());
        Self::with_classifier(mode, feature, name, kind.build())
    }
}

impl<C> TrainedPredictor<C>
where
    C: Classifier + Serialize + DeserializeOwned,
{
    /// Creates a predictor around any classifier.
    pub fn with_classifier(
        mode: Mode,
        feature: FeatureKind,
        name: impl Into<String>,
        classifier: C,
    ) -> Self {
        Self {
            name: name.into(),
            mode,
            feature,
            classifier,
            extractor: None,
            fingerprint: String::new(),
            storage: Storage::disabled(),
            trained: false,
        }
    }

    /// Cache entry of the trained model: `<mode>/<snake_case name>`, plus
    /// `_<fingerprint>` of the feature settings after [`prepare`].
    ///
    /// [`prepare`]: SentencePredictor::prepare
    #[must_use]
    pub fn cache_key(&self) -> String {
        let key = format!("{}/{}", self.mode, snake_case(&self.name));
        if self.fingerprint.is_empty() {
            key
        } else {
            format!("{key}_{}", self.fingerprint)
        }
    }

    /// Analysis mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Feature set.
    #[must_use]
    pub fn feature(&self) -> FeatureKind {
        self.feature
    }

    /// The wrapped classifier.
    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Whether a model is trained or restored.
    #[must_use]
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Restores the cached model. Returns false on a miss.
    fn load_cached(&mut self) -> bool {
        let key = self.cache_key();
        let Some(extractor) = self.extractor.as_mut() else {
            return false;
        };
        let Some((classifier, state)) = self.storage.load::<(C, ExtractorState)>(&key) else {
            return false;
        };
        if let Err(e) = extractor.restore(state) {
            log::debug!("cached model {key} does not fit {}: {e}", self.name);
            return false;
        }
        self.classifier = classifier;
        self.trained = true;
        log::debug!("restored {} from cache", self.name);
        true
    }
}

impl<C> SentencePredictor for TrainedPredictor<C>
where
    C: Classifier + Serialize + DeserializeOwned,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn prepare(&mut self, resources: &Resources) -> Result<()> {
        if self.extractor.is_none() {
            self.extractor = Some(self.feature.build(self.mode, resources)?);
            self.fingerprint = self.feature.fingerprint(resources);
            self.storage = resources.storage().clone();
        }
        Ok(())
    }

    fn is_trainable(&self) -> bool {
        true
    }

    fn train(&mut self, training_set: &[LabeledExample], persist: bool) -> Result<()> {
        let Some(extractor) = self.extractor.as_mut() else {
            return Err(not_prepared(&self.name));
        };
        if training_set.is_empty() {
            return Err(SentirError::empty_input("no training sentences"));
        }

        let labels = self.mode.labels();
        let sentences: Vec<&str> = training_set.iter().map(|e| e.text.as_str()).collect();
        let y = training_set
            .iter()
            .map(|example| labels.id(&example.label))
            .collect::<Result<Vec<usize>>>()?;

        self.trained = false;
        extractor.fit(&sentences)?;
        let x = extractor.transform_all(&sentences)?;
        self.classifier.fit(&x, &y)?;
        self.trained = true;

        log::info!(
            "trained {} on {} sentences, {} features",
            self.name,
            sentences.len(),
            x.n_cols()
        );

        if persist {
            let state = extractor.state();
            self.storage
                .dump_or_warn(&self.cache_key(), &(&self.classifier, &state));
        }
        Ok(())
    }

    fn ensure_ready(&mut self, resources: &Resources) -> Result<()> {
        self.prepare(resources)?;
        if self.trained || self.load_cached() {
            return Ok(());
        }
        log::info!(
            "no usable cached model for {}, training on the full corpus",
            self.name
        );
        let corpus = resources.corpus(self.mode)?;
        self.train(&corpus.to_examples(), true)
    }

    fn predict(&mut self, sentence: &str) -> Result<String> {
        let extractor = match &self.extractor {
            Some(extractor) if self.trained => extractor,
            _ => return Err(SentirError::not_fitted(&self.name)),
        };
        let features = extractor.transform(sentence)?;
        let x = Matrix::from_vec(1, features.len(), features)?;
        let id = self
            .classifier
            .predict(&x)?
            .first()
            .copied()
            .ok_or_else(|| SentirError::empty_input("classifier returned no prediction"))?;
        self.mode
            .labels()
            .label(id)
            .map(str::to_string)
            .ok_or_else(|| SentirError::UnknownLabel {
                label: id.to_string(),
            })
    }
}

impl<C: fmt::Debug> fmt::Debug for TrainedPredictor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedPredictor")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("feature", &self.feature)
            .field("classifier", &self.classifier)
            .field("trained", &self.trained)
            .finish_non_exhaustive()
    }
}

/// `UnigramSentimentMaxEnt` -> `unigram_sentiment_max_ent`
pub(crate) fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_lower);
            if boundary {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
