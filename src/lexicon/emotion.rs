use super::ScoreLexicon;
use crate::error::Result;
use crate::labels::LabelSet;
use crate::storage::read_text_lossy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const HEADER_MARKER: &str = "######";

/// NRC hashtag word-emotion association scores.
///
/// Data lines follow a header ending in a line containing `######`; each
/// reads `emotion word score`. Lines with an unknown emotion, a missing
/// column or an unreadable score are skipped.
///
/// Score dimensions follow the emotion label order.
///
/// # Examples
///
/// ```
/// use sentir::lexicon::{ScoreLexicon, WordEmotionScore};
///
/// let lexicon = WordEmotionScore::parse("header\n######\njoy\tsunshine\t0.9\nfear\tdark\t0.7\n");
/// let tokens = vec!["Sunshine".to_string(), "and".to_string(), "dark".to_string()];
/// let scores = lexicon.score_tokens(&tokens, false);
/// assert_eq!(scores[1], 0.7); // fear
/// assert_eq!(scores[4], 0.9); // joy
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordEmotionScore {
    /// word -> one score per emotion
    scores: HashMap<String, Vec<f32>>,
}

impl WordEmotionScore {
    /// Parses the lexicon text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let emotions = LabelSet::emotions();
        let mut scores: HashMap<String, Vec<f32>> = HashMap::new();

        let mut lines = text.lines().enumerate();
        if !lines.any(|(_, line)| line.contains(HEADER_MARKER)) {
            log::warn!("emotion lexicon has no `{HEADER_MARKER}` header line, nothing read");
            return Self { scores };
        }

        for (idx, line) in lines {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [emotion, word, score] = fields[..] else {
                if !fields.is_empty() {
                    log::debug!("emotion lexicon line {}: expected 3 columns", idx + 1);
                }
                continue;
            };
            let (Ok(emotion_id), Ok(score)) = (emotions.id(emotion), score.parse::<f32>()) else {
                log::debug!("emotion lexicon line {}: skipped {line:?}", idx + 1);
                continue;
            };
            scores
                .entry(word.to_string())
                .or_insert_with(|| vec![0.0; emotions.len()])[emotion_id] = score;
        }

        Self { scores }
    }

    /// Reads the lexicon from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::parse(&read_text_lossy(path)?))
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

impl ScoreLexicon for WordEmotionScore {
    fn dimensions(&self) -> usize {
        LabelSet::emotions().len()
    }

    fn dimension_names(&self) -> Vec<&'static str> {
        LabelSet::emotions().iter().collect()
    }

    fn word_scores(&self, word: &str) -> Option<&[f32]> {
        self.scores.get(word).map(Vec::as_slice)
    }
}
