use super::lemmatize::{IdentityStemmer, Stemmer};
use super::stopwords::StopWordsFilter;
use super::tokenize::{split_sentences_regex, SentenceTokenizer, WhitespaceTokenizer};
use super::Tokenizer;
use crate::config::NlpCapabilities;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Words that open (or, inside a scope, close) a negation scope.
pub const NEGATION_CUES: &[&str] = &[
    "not", "but", "although", "though", "don't", "dont", "didnt", "didn't", "n't", "isnt", "isn't",
];

/// Prefix marking a token inside a negation scope.
pub const NEGATION_PREFIX: &str = "NOT_";

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new("[a-zA-Z0-9]").expect("valid regex"));

/// A token is punctuation when it contains no ASCII letter or digit.
#[must_use]
pub fn is_punctuation(word: &str) -> bool {
    !ALPHANUMERIC.is_match(word)
}

/// Whether a word is a negation cue (case-insensitive).
#[must_use]
pub fn is_negation_cue(word: &str) -> bool {
    NEGATION_CUES
        .iter()
        .any(|cue| cue.eq_ignore_ascii_case(word))
}

/// Drops every non-ASCII character.
#[must_use]
pub fn to_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// A token and whether it lies inside a negation scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedToken {
    /// Token text, unchanged
    pub text: String,
    /// Inside a negation scope
    pub negated: bool,
}

/// Tokenization, sentence splitting, negation, stop words and lemmatization
/// with graceful degradation.
///
/// Capabilities that are switched off, or compiled out with the `nlp`
/// feature, fall back to whitespace tokens, regex sentence splitting and
/// identity lemmatization. A missing capability is logged once per process.
///
/// # Examples
///
/// ```
/// use sentir::config::NlpCapabilities;
/// use sentir::text::TextNormalizer;
///
/// let normalizer = TextNormalizer::new(NlpCapabilities::none());
/// assert_eq!(normalizer.tokenize("café is great"), vec!["caf", "is", "great"]);
/// assert_eq!(
///     normalizer.split_into_sentences("I liked it. You did not!"),
///     vec!["I liked it", "You did not"]
/// );
/// ```
pub struct TextNormalizer {
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
    sentence_tokenizer: Option<SentenceTokenizer>,
    stemmer: Box<dyn Stemmer + Send + Sync>,
    stop_words: StopWordsFilter,
    capabilities: NlpCapabilities,
}

impl TextNormalizer {
    /// Builds a normalizer using every requested capability that is available.
    #[must_use]
    pub fn new(requested: NlpCapabilities) -> Self {
        let (tokenizer, tokenizer_on) = Self::word_tokenizer(requested.tokenizer);
        let (stemmer, lemmatizer_on) = Self::stemmer(requested.lemmatizer);

        Self {
            tokenizer,
            sentence_tokenizer: requested
                .sentence_splitter
                .then(SentenceTokenizer::new),
            stemmer,
            stop_words: StopWordsFilter::default(),
            capabilities: NlpCapabilities {
                tokenizer: tokenizer_on,
                sentence_splitter: requested.sentence_splitter,
                lemmatizer: lemmatizer_on,
            },
        }
    }

    #[cfg(feature = "nlp")]
    fn word_tokenizer(requested: bool) -> (Box<dyn Tokenizer + Send + Sync>, bool) {
        if requested {
            (Box::new(super::tokenize::WordTokenizer::new()), true)
        } else {
            (Box::new(WhitespaceTokenizer::new()), false)
        }
    }

    #[cfg(not(feature = "nlp"))]
    fn word_tokenizer(requested: bool) -> (Box<dyn Tokenizer + Send + Sync>, bool) {
        static WARNED: std::sync::Once = std::sync::Once::new();
        if requested {
            WARNED.call_once(|| {
                log::warn!(
                    "word tokenizer not available (built without `nlp`), splitting on whitespace"
                );
            });
        }
        (Box::new(WhitespaceTokenizer::new()), false)
    }

    #[cfg(feature = "nlp")]
    fn stemmer(requested: bool) -> (Box<dyn Stemmer + Send + Sync>, bool) {
        if requested {
            (Box::new(super::lemmatize::SnowballStemmer::new()), true)
        } else {
            (Box::new(IdentityStemmer), false)
        }
    }

    #[cfg(not(feature = "nlp"))]
    fn stemmer(requested: bool) -> (Box<dyn Stemmer + Send + Sync>, bool) {
        static WARNED: std::sync::Once = std::sync::Once::new();
        if requested {
            WARNED.call_once(|| {
                log::warn!("lemmatizer not available (built without `nlp`), words are kept as-is");
            });
        }
        (Box::new(IdentityStemmer), false)
    }

    /// Replaces the stop word list.
    #[must_use]
    pub fn with_stop_words(mut self, stop_words: StopWordsFilter) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Capabilities actually in use.
    #[must_use]
    pub fn capabilities(&self) -> NlpCapabilities {
        self.capabilities
    }

    /// Converts to ASCII, then splits into word and punctuation tokens.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(&to_ascii(text))
    }

    /// Converts to ASCII, then splits a document into sentences.
    #[must_use]
    pub fn split_into_sentences(&self, document: &str) -> Vec<String> {
        let document = to_ascii(document);
        match &self.sentence_tokenizer {
            Some(tokenizer) => tokenizer.split(&document),
            None => split_sentences_regex(&document),
        }
    }

    /// Annotates each token with its negation scope.
    ///
    /// A cue toggles the scope for the tokens after it and is itself never
    /// negated. Punctuation closes the scope.
    #[must_use]
    pub fn negate_scope<S: AsRef<str>>(tokens: &[S]) -> Vec<ScopedToken> {
        let mut negating = false;
        tokens
            .iter()
            .map(|token| {
                let text = token.as_ref();
                let negated = if is_negation_cue(text) {
                    negating = !negating;
                    false
                } else if is_punctuation(text) {
                    negating = false;
                    false
                } else {
                    negating
                };
                ScopedToken {
                    text: text.to_string(),
                    negated,
                }
            })
            .collect()
    }

    /// Prefixes `NOT_` to every token inside a negation scope.
    #[must_use]
    pub fn mark_negations<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
        Self::negate_scope(tokens)
            .into_iter()
            .map(|scoped| {
                if scoped.negated {
                    format!("{NEGATION_PREFIX}{}", scoped.text)
                } else {
                    scoped.text
                }
            })
            .collect()
    }

    /// Removes stop words (case-insensitive).
    #[must_use]
    pub fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String> {
        self.stop_words.filter_owned(tokens)
    }

    /// Removes punctuation tokens.
    #[must_use]
    pub fn remove_punctuation(tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !is_punctuation(token))
            .collect()
    }

    /// Reduces each token to its base form.
    #[must_use]
    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        self.stemmer.stem_tokens(tokens)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NlpCapabilities::default())
    }
}

impl fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("capabilities", &self.capabilities)
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
