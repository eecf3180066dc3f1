//! Reducing words to a base form.
//!
//! The toolkit lemmatizes with the Snowball English stemmer when the `nlp`
//! feature is enabled; otherwise words pass through unchanged.
//!
//! # References
//!
//! Porter, M.F. (2001). "Snowball: A language for stemming algorithms."

/// Reduces a word to its base form.
pub trait Stemmer {
    /// Stem a single word.
    fn stem(&self, word: &str) -> String;

    /// Stem multiple tokens.
    fn stem_tokens(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.stem(token)).collect()
    }
}

/// Leaves every word unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Snowball English stemmer.
///
/// Tokens carrying the `NOT_` negation marker are stemmed after the marker
/// so that `NOT_loved` becomes `NOT_love`.
///
/// # Examples
///
/// ```
/// use sentir::text::lemmatize::{SnowballStemmer, Stemmer};
///
/// let stemmer = SnowballStemmer::new();
/// assert_eq!(stemmer.stem("running"), "run");
/// assert_eq!(stemmer.stem("NOT_loved"), "NOT_love");
/// ```
#[cfg(feature = "nlp")]
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

#[cfg(feature = "nlp")]
impl SnowballStemmer {
    /// Create an English stemmer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(rust_stemmers::Algorithm::English),
        }
    }
}

#[cfg(feature = "nlp")]
impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "nlp")]
impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SnowballStemmer(English)")
    }
}

#[cfg(feature = "nlp")]
impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        match word.strip_prefix(super::NEGATION_PREFIX) {
            Some(rest) => format!("{}{}", super::NEGATION_PREFIX, self.inner.stem(rest)),
            None => self.inner.stem(word).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stemmer() {
        let tokens = vec!["running".to_string(), "dogs".to_string()];
        assert_eq!(IdentityStemmer.stem_tokens(&tokens), tokens);
    }

    #[cfg(feature = "nlp")]
    #[test]
    fn test_snowball_common_suffixes() {
        let stemmer = SnowballStemmer::new();
        assert_eq!(stemmer.stem("movies"), "movi");
        assert_eq!(stemmer.stem("jumped"), "jump");
        assert_eq!(stemmer.stem("happily"), "happili");
    }

    #[cfg(feature = "nlp")]
    #[test]
    fn test_snowball_keeps_negation_marker() {
        let stemmer = SnowballStemmer::new();
        let tokens = vec!["NOT_running".to_string(), "fun".to_string()];
        assert_eq!(stemmer.stem_tokens(&tokens), vec!["NOT_run", "fun"]);
    }
}
