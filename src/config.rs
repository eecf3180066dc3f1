//! Toolkit configuration.
//!
//! Every file location, cache setting and tuning constant lives here and is
//! handed to components at construction. Nothing is read from global state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names of the bundled data sets, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    /// Positive movie review sentences, one per line
    pub positive_reviews: PathBuf,
    /// Negative movie review sentences, one per line
    pub negative_reviews: PathBuf,
    /// Emotion-tagged tweets
    pub tweets: PathBuf,
    /// Positive opinion words
    pub opinion_positive: PathBuf,
    /// Negative opinion words
    pub opinion_negative: PathBuf,
    /// SentiWordNet 3.0 database
    pub sentiwordnet: PathBuf,
    /// NRC hashtag word-emotion scores
    pub emotion_lexicon: PathBuf,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            positive_reviews: "movie_reviews/positive_reviews.txt".into(),
            negative_reviews: "movie_reviews/negative_reviews.txt".into(),
            tweets: "emotion_lexicon/tweet_data_set.txt".into(),
            opinion_positive: "opinion_lexicon/positive-words.txt".into(),
            opinion_negative: "opinion_lexicon/negative-words.txt".into(),
            sentiwordnet: "sentiwordnet/SentiWordNet_3.0.0.txt".into(),
            emotion_lexicon: "emotion_lexicon/word_emotion_score.txt".into(),
        }
    }
}

/// Where parsed data sets and trained models are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache directory
    pub dir: PathBuf,
    /// When false nothing is read from or written to `dir`
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".sentir-cache"),
            enabled: true,
        }
    }
}

/// Which optional NLP capabilities the text normalizer may use.
///
/// A capability switched on here is still unavailable when the crate is
/// built without the `nlp` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NlpCapabilities {
    /// Unicode word segmentation
    pub tokenizer: bool,
    /// Abbreviation-aware sentence splitting
    pub sentence_splitter: bool,
    /// Snowball English stemming
    pub lemmatizer: bool,
}

impl NlpCapabilities {
    /// Everything on.
    #[must_use]
    pub fn all() -> Self {
        Self {
            tokenizer: true,
            sentence_splitter: true,
            lemmatizer: true,
        }
    }

    /// Everything off: whitespace tokens, regex sentences, no lemmatization.
    #[must_use]
    pub fn none() -> Self {
        Self {
            tokenizer: false,
            sentence_splitter: false,
            lemmatizer: false,
        }
    }
}

impl Default for NlpCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration shared by the toolkit, predictors and data sets.
///
/// # Examples
///
/// ```
/// use sentir::config::ToolkitConfig;
///
/// let config = ToolkitConfig::new()
///     .with_data_dir("/srv/sentir/datasets")
///     .with_folds(10)
///     .with_seed(7);
/// assert_eq!(config.folds, 10);
/// assert!(config.data_path(&config.files.tweets).starts_with("/srv/sentir/datasets"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolkitConfig {
    /// Root directory of the data set files
    pub data_dir: PathBuf,
    /// Data set file names
    pub files: DataFiles,
    /// Persisted cache
    pub cache: CacheConfig,
    /// k of k-fold cross-validation
    pub folds: usize,
    /// Down-sample every tweet emotion to the size of the smallest one
    pub balance_classes: bool,
    /// Seed for balancing shuffles and random tie breaks
    pub seed: u64,
    /// Vocabulary size of unigram extractors.
    ///
    /// Features are dense `Matrix<f32>` rows, so training memory grows with
    /// sentences times vocabulary. The default of 3000 keeps the full movie
    /// review corpus near 130 MB; raise it with
    /// [`with_vocabulary_limits`](Self::with_vocabulary_limits).
    pub unigram_limit: usize,
    /// Vocabulary size of bigram extractors, bounded like `unigram_limit`.
    pub bigram_limit: usize,
    /// Optional text capabilities
    pub nlp: NlpCapabilities,
}

impl ToolkitConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_dir: PathBuf::from("datasets"),
            files: DataFiles::default(),
            cache: CacheConfig::default(),
            folds: 5,
            balance_classes: true,
            seed: 42,
            unigram_limit: 3000,
            bigram_limit: 3000,
            nlp: NlpCapabilities::default(),
        }
    }

    /// Sets the data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the data set file names.
    #[must_use]
    pub fn with_files(mut self, files: DataFiles) -> Self {
        self.files = files;
        self
    }

    /// Sets the cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache.dir = dir.into();
        self
    }

    /// Enables or disables the persisted cache.
    #[must_use]
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache.enabled = enabled;
        self
    }

    /// Sets the number of cross-validation folds.
    #[must_use]
    pub fn with_folds(mut self, folds: usize) -> Self {
        self.folds = folds;
        self
    }

    /// Enables or disables class balancing of the tweet corpus.
    #[must_use]
    pub fn with_balance_classes(mut self, balance: bool) -> Self {
        self.balance_classes = balance;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the unigram and bigram vocabulary limits.
    #[must_use]
    pub fn with_vocabulary_limits(mut self, unigram: usize, bigram: usize) -> Self {
        self.unigram_limit = unigram;
        self.bigram_limit = bigram;
        self
    }

    /// Sets the NLP capabilities.
    #[must_use]
    pub fn with_nlp(mut self, nlp: NlpCapabilities) -> Self {
        self.nlp = nlp;
        self
    }

    /// Resolves a data set file against the data directory.
    #[must_use]
    pub fn data_path(&self, file: &Path) -> PathBuf {
        self.data_dir.join(file)
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self::new()
    }
}
