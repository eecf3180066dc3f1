//! Stop words filtering.
//!
//! The default list is deliberately short: articles and a few function words
//! that carry no sentiment. Negation cues such as `not` are kept because the
//! negation scoper depends on them.
//!
//! # Examples
//!
//! ```
//! use sentir::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::default();
//! let filtered = filter.filter(&["The", "movie", "is", "not", "good"]);
//! assert_eq!(filtered, vec!["movie", "not", "good"]);
//! ```

use std::collections::HashSet;

/// Default stop words.
pub const DEFAULT_STOP_WORDS: &[&str] = &["the", "as", "like", "is", "a", "an", "in", "on", "of"];

/// Removes stop words from token lists, case-insensitively.
///
/// Stop words are stored lowercase in a `HashSet` for O(1) lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWordsFilter {
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from custom stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::new(vec!["foo", "bar"]);
    /// assert_eq!(filter.filter(&["foo", "test", "BAR"]), vec!["test"]);
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Filter stop words from a list of tokens, preserving the case of the rest.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !self.is_stop_word(token))
            .map(ToString::to_string)
            .collect()
    }

    /// Filter stop words from owned tokens without reallocating survivors.
    #[must_use]
    pub fn filter_owned(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stop_word(token))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Number of stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Whether the filter has no stop words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopWordsFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
