use super::ScoreLexicon;
use crate::error::{Result, SentirError};
use crate::storage::read_text_lossy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Negative and positive score of a word.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Negativity in [0, 1]
    pub negative: f32,
    /// Positivity in [0, 1]
    pub positive: f32,
}

/// SentiWordNet 3.0 word scores.
///
/// The database is tab-separated: `POS ID PosScore NegScore SynsetTerms
/// Gloss`, where `SynsetTerms` lists `word#sense` entries. Sense numbers
/// are dropped; when a word appears in several synsets the last one read
/// wins.
///
/// Score dimensions are `[negative, positive]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentiWordNet {
    /// word -> [negative, positive]
    scores: HashMap<String, [f32; 2]>,
}

impl SentiWordNet {
    /// Parses the database text.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Parse`] when a score column is not a number.
    pub fn parse(text: &str, source_name: &str) -> Result<Self> {
        let mut scores = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            if line.starts_with('#') {
                continue;
            }
            let columns: Vec<&str> = line.split('\t').collect();
            if columns.len() < 5 || columns[2].trim().is_empty() {
                continue;
            }

            let parse_score = |column: &str| -> Result<f32> {
                column.trim().parse().map_err(|e| SentirError::Parse {
                    source_name: source_name.to_string(),
                    line: idx + 1,
                    message: format!("invalid score {column:?}: {e}"),
                })
            };
            let positive = parse_score(columns[2])?;
            let negative = parse_score(columns[3])?;

            for term in columns[4].split_whitespace() {
                let word = term.split_once('#').map_or(term, |(word, _)| word);
                scores.insert(word.to_string(), [negative, positive]);
            }
        }

        Ok(Self { scores })
    }

    /// Reads the database from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = read_text_lossy(path)?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Scores of a word, if known.
    #[must_use]
    pub fn score(&self, word: &str) -> Option<SentimentScore> {
        self.scores.get(word).map(|&[negative, positive]| SentimentScore {
            negative,
            positive,
        })
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no word is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl ScoreLexicon for SentiWordNet {
    fn dimensions(&self) -> usize {
        2
    }

    fn dimension_names(&self) -> Vec<&'static str> {
        vec!["negative", "positive"]
    }

    fn word_scores(&self, word: &str) -> Option<&[f32]> {
        self.scores.get(word).map(<[f32; 2]>::as_slice)
    }
}
