//! Word and sentence tokenizers.

use super::Tokenizer;
use once_cell::sync::Lazy;
use regex::Regex;

/// Splits on Unicode whitespace; punctuation stays attached to words.
///
/// # Examples
///
/// ```
/// use sentir::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokens = WhitespaceTokenizer::new().tokenize("Hello, world!");
/// assert_eq!(tokens, vec!["Hello,", "world!"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(ToString::to_string).collect()
    }
}

/// Word tokenizer following Unicode word boundaries (UAX #29).
///
/// Every punctuation character becomes its own token and contractions
/// such as `don't` stay together.
///
/// # Examples
///
/// ```
/// use sentir::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokens = WordTokenizer::new().tokenize("I don't know.");
/// assert_eq!(tokens, vec!["I", "don't", "know", "."]);
/// ```
#[cfg(feature = "nlp")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

#[cfg(feature = "nlp")]
impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "nlp")]
impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        use unicode_segmentation::UnicodeSegmentation;

        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// Splits sentences on terminal punctuation, respecting abbreviations.
///
/// A `.`, `?` or `!` ends a sentence when it is followed by whitespace and
/// an uppercase letter, or by the end of the text. A period after a known
/// abbreviation never ends a sentence.
///
/// # Examples
///
/// ```
/// use sentir::text::tokenize::SentenceTokenizer;
///
/// let sentences = SentenceTokenizer::new().split("Hello world. How are you? I'm fine!");
/// assert_eq!(sentences, vec!["Hello world.", "How are you?", "I'm fine!"]);
/// ```
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: Vec<&'static str>,
}

impl SentenceTokenizer {
    /// Create a sentence tokenizer with common English abbreviations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            abbreviations: vec![
                "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "vs", "etc", "inc", "ltd", "st",
                "jan", "feb", "aug", "sept", "oct", "nov", "dec", "i.e", "e.g", "cf",
            ],
        }
    }

    /// Split text into trimmed, non-empty sentences.
    ///
    /// A `.`, `?` or `!` followed by whitespace or the end of the text closes
    /// a sentence, unless it ends a known abbreviation or a `No.` before a
    /// number.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut sentences = Vec::new();
        let mut current = String::new();

        for (i, &c) in chars.iter().enumerate() {
            current.push(c);
            if !matches!(c, '.' | '?' | '!') {
                continue;
            }

            let rest = &chars[i + 1..];
            if rest.first().is_some_and(|next| !next.is_whitespace()) {
                continue;
            }
            let next_word = rest.iter().find(|ch| !ch.is_whitespace());
            if c == '.' && self.is_abbreviation(&current, next_word.copied()) {
                continue;
            }

            push_trimmed(&mut sentences, &current);
            current.clear();
        }
        push_trimmed(&mut sentences, &current);
        sentences
    }

    fn is_abbreviation(&self, text: &str, next: Option<char>) -> bool {
        let last_word = text
            .trim_end_matches('.')
            .split_whitespace()
            .last()
            .unwrap_or("")
            .to_lowercase();
        if last_word == "no" {
            return next.is_some_and(|ch| ch.is_ascii_digit());
        }
        self.abbreviations.contains(&last_word.as_str())
    }
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn push_trimmed(sentences: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#" *[.?!]['")\]]* *"#).expect("valid regex"));

/// Regex sentence splitter: cuts on `.`, `?` or `!` plus closing quotes and
/// brackets, dropping the terminators and empty pieces.
///
/// # Examples
///
/// ```
/// use sentir::text::tokenize::split_sentences_regex;
///
/// let sentences = split_sentences_regex("I won! \"Really?\" Yes.");
/// assert_eq!(sentences, vec!["I won", "\"Really", "Yes"]);
/// ```
#[must_use]
pub fn split_sentences_regex(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for piece in SENTENCE_BOUNDARY.split(text) {
        push_trimmed(&mut sentences, piece);
    }
    sentences
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
