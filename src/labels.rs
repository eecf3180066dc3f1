//! Closed label sets for sentiment and emotion analysis.
//!
//! Classifiers see labels as `usize` ids; the id of a label is its index in
//! the set of the active [`Mode`].

use crate::error::{Result, SentirError};
use serde::{Deserialize, Serialize};
use std::fmt;

const SENTIMENTS: &[&str] = &["positive", "neutral", "negative"];

const EMOTIONS: &[&str] = &[
    "anticipation",
    "fear",
    "anger",
    "disgust",
    "joy",
    "sadness",
    "surprise",
    "trust",
];

/// Analysis domain: polarity of text or the emotion it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Mode {
    /// positive / neutral / negative
    Sentiment,
    /// eight basic emotions
    #[default]
    Emotion,
}

impl Mode {
    /// Label set of this mode.
    #[must_use]
    pub fn labels(self) -> LabelSet {
        match self {
            Mode::Sentiment => LabelSet::sentiments(),
            Mode::Emotion => LabelSet::emotions(),
        }
    }

    /// Lowercase name, used in cache keys and CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sentiment => "sentiment",
            Mode::Emotion => "emotion",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, closed set of category labels.
///
/// # Examples
///
/// ```
/// use sentir::labels::LabelSet;
///
/// let emotions = LabelSet::emotions();
/// assert_eq!(emotions.id("joy").expect("joy is an emotion"), 4);
/// assert_eq!(emotions.label(4), Some("joy"));
/// assert!(emotions.id("bored").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSet {
    labels: &'static [&'static str],
}

impl LabelSet {
    /// `positive, neutral, negative`
    #[must_use]
    pub fn sentiments() -> Self {
        Self { labels: SENTIMENTS }
    }

    /// `anticipation, fear, anger, disgust, joy, sadness, surprise, trust`
    #[must_use]
    pub fn emotions() -> Self {
        Self { labels: EMOTIONS }
    }

    /// Id of a label.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::UnknownLabel`] for a label outside the set.
    pub fn id(&self, label: &str) -> Result<usize> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .ok_or_else(|| SentirError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Label for an id, `None` when out of range.
    #[must_use]
    pub fn label(&self, id: usize) -> Option<&'static str> {
        self.labels.get(id).copied()
    }

    /// Whether the label belongs to the set.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(&label)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; label sets are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.labels.iter().copied()
    }
}
