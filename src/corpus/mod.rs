//! Labeled sentence collections used for training and evaluation.
//!
//! - Movie reviews (sentence polarity data set v1.0): one sentence per
//!   line, one file per polarity.
//! - Emotion-tagged tweets (NRC hashtag corpus): `<19-char id prefix>sentence::emotion`.

use crate::error::Result;
use crate::labels::LabelSet;
use crate::storage::read_text_lossy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Characters of tweet id prefix before the sentence.
const TWEET_ID_PREFIX_LEN: usize = 19;

const TWEET_SEPARATOR: &str = "::";

/// A sentence and its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Raw sentence
    pub text: String,
    /// Label from the active label set
    pub label: String,
}

impl LabeledExample {
    /// Creates an example.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Mapping from label to its examples, in insertion order per label.
///
/// Labels iterate in name order, so every split and every training set
/// built from a corpus is deterministic.
///
/// # Examples
///
/// ```
/// use sentir::corpus::Corpus;
///
/// let mut corpus = Corpus::new();
/// corpus.push("positive", "a fine film");
/// corpus.push("negative", "a waste of time");
/// corpus.push("positive", "loved it");
///
/// assert_eq!(corpus.len(), 3);
/// assert_eq!(corpus.labels().collect::<Vec<_>>(), vec!["negative", "positive"]);
/// assert_eq!(corpus.examples("positive").len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Corpus {
    examples: BTreeMap<String, Vec<String>>,
}

impl Corpus {
    /// Creates an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an example to a label.
    pub fn push(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.examples.entry(label.into()).or_default().push(text.into());
    }

    /// Labels in name order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.examples.keys().map(String::as_str)
    }

    /// Examples of one label; empty for an unknown label.
    #[must_use]
    pub fn examples(&self, label: &str) -> &[String] {
        self.examples
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `(label, examples)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.examples
            .iter()
            .map(|(label, texts)| (label.as_str(), texts.as_slice()))
    }

    /// Total number of examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.values().map(Vec::len).sum()
    }

    /// Whether the corpus holds no example.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every example, label by label.
    #[must_use]
    pub fn to_examples(&self) -> Vec<LabeledExample> {
        self.iter()
            .flat_map(|(label, texts)| {
                texts
                    .iter()
                    .map(move |text| LabeledExample::new(text.clone(), label))
            })
            .collect()
    }

    /// Shuffles every label's examples and truncates them to the size of
    /// the smallest label.
    ///
    /// The same seed always yields the same corpus.
    #[must_use]
    pub fn balanced(mut self, seed: u64) -> Self {
        let Some(smallest) = self.examples.values().map(Vec::len).min() else {
            return self;
        };
        let mut rng = StdRng::seed_from_u64(seed);
        for texts in self.examples.values_mut() {
            texts.shuffle(&mut rng);
            texts.truncate(smallest);
        }
        log::debug!(
            "balanced {} labels to {smallest} examples each",
            self.examples.len()
        );
        self
    }

    /// Parses the movie review files' contents; every non-blank line is one example.
    #[must_use]
    pub fn parse_movie_reviews(positive: &str, negative: &str) -> Self {
        let mut corpus = Self::new();
        for (label, text) in [("positive", positive), ("negative", negative)] {
            for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                corpus.push(label, line);
            }
        }
        corpus
    }

    /// Reads the movie review data set.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read.
    pub fn movie_reviews(positive: &Path, negative: &Path) -> Result<Self> {
        let positive = read_text_lossy(positive)?;
        let negative = read_text_lossy(negative)?;
        Ok(Self::parse_movie_reviews(&positive, &negative))
    }

    /// Parses the emotion-tagged tweets.
    ///
    /// Lines without exactly one `::` separator, or whose emotion is not a
    /// known emotion label, are skipped.
    #[must_use]
    pub fn parse_tweets(text: &str) -> Self {
        let emotions = LabelSet::emotions();
        let mut corpus = Self::new();
        let mut skipped = 0_usize;

        for (idx, line) in text.lines().enumerate() {
            let body: String = line.chars().skip(TWEET_ID_PREFIX_LEN).collect();
            let mut parts = body.split(TWEET_SEPARATOR);
            let (Some(sentence), Some(emotion), None) = (parts.next(), parts.next(), parts.next())
            else {
                if !line.trim().is_empty() {
                    log::debug!("tweet line {}: expected `sentence::emotion`", idx + 1);
                    skipped += 1;
                }
                continue;
            };
            let emotion = emotion.trim();
            if !emotions.contains(emotion) {
                log::debug!("tweet line {}: unknown emotion {emotion:?}", idx + 1);
                skipped += 1;
                continue;
            }
            corpus.push(emotion, sentence.trim());
        }

        if skipped > 0 {
            log::debug!("skipped {skipped} malformed tweet lines");
        }
        corpus
    }

    /// Reads the tweet data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn tweets(path: &Path) -> Result<Self> {
        Ok(Self::parse_tweets(&read_text_lossy(path)?))
    }
}

impl FromIterator<LabeledExample> for Corpus {
    fn from_iter<I: IntoIterator<Item = LabeledExample>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for example in iter {
            corpus.push(example.label, example.text);
        }
        corpus
    }
}
