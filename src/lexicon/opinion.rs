use crate::error::Result;
use crate::storage::read_text_lossy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const START_MARKER: &str = "####START####";

/// Polarity of an opinion word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Expresses a favourable opinion
    Positive,
    /// Expresses an unfavourable opinion
    Negative,
}

impl Polarity {
    /// The opposite polarity.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// Number of positive and negative opinion words in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpinionCounts {
    /// Words counted as positive
    pub positive: usize,
    /// Words counted as negative
    pub negative: usize,
}

/// Opinion lexicon: a list of positive and a list of negative words.
///
/// Word lists may open with a comment header; when a `####START####`
/// line is present only the words after it are read, otherwise every
/// non-empty line not starting with `;`.
///
/// # Examples
///
/// ```
/// use sentir::lexicon::{OpinionLexicon, Polarity};
///
/// let lexicon = OpinionLexicon::parse("good\ngreat\n", "; header\nbad\n");
/// assert_eq!(lexicon.polarity("great"), Some(Polarity::Positive));
/// assert_eq!(lexicon.polarity("bad"), Some(Polarity::Negative));
///
/// let tokens: Vec<String> = ["not", "good", "but", "great"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let counts = lexicon.opinion_counts(&tokens, true);
/// assert_eq!((counts.positive, counts.negative), (1, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpinionLexicon {
    words: HashMap<String, Polarity>,
}

impl OpinionLexicon {
    /// Parses the positive and negative word lists.
    ///
    /// A word listed in both keeps the negative polarity.
    #[must_use]
    pub fn parse(positive: &str, negative: &str) -> Self {
        let mut words = HashMap::new();
        for word in word_list(positive) {
            words.insert(word.to_string(), Polarity::Positive);
        }
        for word in word_list(negative) {
            words.insert(word.to_string(), Polarity::Negative);
        }
        Self { words }
    }

    /// Reads both word lists from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read.
    pub fn from_files(positive: &Path, negative: &Path) -> Result<Self> {
        let positive = read_text_lossy(positive)?;
        let negative = read_text_lossy(negative)?;
        Ok(Self::parse(&positive, &negative))
    }

    /// Polarity of a word, if listed.
    #[must_use]
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        self.words.get(word).copied()
    }

    /// Number of listed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Counts opinion words; a negated word counts for the opposite polarity.
    #[must_use]
    pub fn opinion_counts(&self, tokens: &[String], allow_negation: bool) -> OpinionCounts {
        let mut counts = OpinionCounts::default();
        for (word, negated) in super::scoped_lowercase(tokens, allow_negation) {
            let Some(polarity) = self.polarity(&word) else {
                continue;
            };
            match if negated { polarity.flipped() } else { polarity } {
                Polarity::Positive => counts.positive += 1,
                Polarity::Negative => counts.negative += 1,
            }
        }
        counts
    }
}

fn word_list(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let body = match lines.iter().position(|line| *line == START_MARKER) {
        Some(marker) => &lines[marker + 1..],
        None => &lines[..],
    };
    body.iter()
        .copied()
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .collect()
}
