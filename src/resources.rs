//! Lazily loaded, shared data sets.
//!
//! Every lexicon and corpus is parsed at most once per [`Resources`]: the
//! first request reads the persisted cache or, on a miss, the data set
//! file (then fills the cache). Later requests hand out the same `Arc`.

use crate::config::ToolkitConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::labels::Mode;
use crate::lexicon::{OpinionLexicon, SentiWordNet, WordEmotionScore};
use crate::storage::Storage;
use crate::text::TextNormalizer;
use once_cell::unsync::OnceCell;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;

const OPINION_LEXICON_KEY: &str = "data/opinion_lexicon";
const SENTIWORDNET_KEY: &str = "data/sentiwordnet";
const WORD_EMOTION_SCORE_KEY: &str = "data/word_emotion_score";
const MOVIE_REVIEWS_KEY: &str = "data/movie_reviews";

/// Shared, read-only data sets plus the text normalizer.
///
/// # Examples
///
/// ```
/// use sentir::config::ToolkitConfig;
/// use sentir::lexicon::OpinionLexicon;
/// use sentir::resources::Resources;
///
/// let resources = Resources::new(ToolkitConfig::new().with_cache_enabled(false))
///     .with_opinion_lexicon(OpinionLexicon::parse("good\n", "bad\n"));
///
/// let lexicon = resources.opinion_lexicon().expect("lexicon provided");
/// assert_eq!(lexicon.len(), 2);
/// ```
pub struct Resources {
    config: ToolkitConfig,
    storage: Storage,
    normalizer: Arc<TextNormalizer>,
    opinion_lexicon: OnceCell<Arc<OpinionLexicon>>,
    sentiwordnet: OnceCell<Arc<SentiWordNet>>,
    word_emotion_scores: OnceCell<Arc<WordEmotionScore>>,
    movie_reviews: OnceCell<Arc<Corpus>>,
    tweets: OnceCell<Arc<Corpus>>,
}

impl Resources {
    /// Creates empty resources; nothing is read until requested.
    #[must_use]
    pub fn new(config: ToolkitConfig) -> Self {
        Self {
            storage: Storage::from_config(&config.cache),
            normalizer: Arc::new(TextNormalizer::new(config.nlp)),
            config,
            opinion_lexicon: OnceCell::new(),
            sentiwordnet: OnceCell::new(),
            word_emotion_scores: OnceCell::new(),
            movie_reviews: OnceCell::new(),
            tweets: OnceCell::new(),
        }
    }

    /// Uses an already parsed opinion lexicon.
    #[must_use]
    pub fn with_opinion_lexicon(mut self, lexicon: OpinionLexicon) -> Self {
        self.opinion_lexicon = OnceCell::with_value(Arc::new(lexicon));
        self
    }

    /// Uses an already parsed SentiWordNet.
    #[must_use]
    pub fn with_sentiwordnet(mut self, lexicon: SentiWordNet) -> Self {
        self.sentiwordnet = OnceCell::with_value(Arc::new(lexicon));
        self
    }

    /// Uses an already parsed emotion lexicon.
    #[must_use]
    pub fn with_word_emotion_scores(mut self, lexicon: WordEmotionScore) -> Self {
        self.word_emotion_scores = OnceCell::with_value(Arc::new(lexicon));
        self
    }

    /// Uses an in-memory corpus for a mode instead of its data set.
    ///
    /// The corpus is taken as is; it is not balanced.
    #[must_use]
    pub fn with_corpus(mut self, mode: Mode, corpus: Corpus) -> Self {
        let cell = OnceCell::with_value(Arc::new(corpus));
        match mode {
            Mode::Sentiment => self.movie_reviews = cell,
            Mode::Emotion => self.tweets = cell,
        }
        self
    }

    /// Toolkit configuration.
    #[must_use]
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Persisted cache.
    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Shared text normalizer.
    #[must_use]
    pub fn normalizer(&self) -> Arc<TextNormalizer> {
        Arc::clone(&self.normalizer)
    }

    /// Positive and negative opinion words.
    ///
    /// # Errors
    ///
    /// Returns an error if the word lists are not cached and cannot be read.
    pub fn opinion_lexicon(&self) -> Result<Arc<OpinionLexicon>> {
        let files = &self.config.files;
        self.opinion_lexicon
            .get_or_try_init(|| {
                self.cached(OPINION_LEXICON_KEY, || {
                    OpinionLexicon::from_files(
                        &self.config.data_path(&files.opinion_positive),
                        &self.config.data_path(&files.opinion_negative),
                    )
                })
            })
            .map(Arc::clone)
    }

    /// SentiWordNet scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is not cached and cannot be read or parsed.
    pub fn sentiwordnet(&self) -> Result<Arc<SentiWordNet>> {
        self.sentiwordnet
            .get_or_try_init(|| {
                self.cached(SENTIWORDNET_KEY, || {
                    let path = self.config.data_path(&self.config.files.sentiwordnet);
                    SentiWordNet::from_file(&path)
                })
            })
            .map(Arc::clone)
    }

    /// NRC word-emotion scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon is not cached and cannot be read.
    pub fn word_emotion_scores(&self) -> Result<Arc<WordEmotionScore>> {
        self.word_emotion_scores
            .get_or_try_init(|| {
                self.cached(WORD_EMOTION_SCORE_KEY, || {
                    WordEmotionScore::from_file(
                        &self.config.data_path(&self.config.files.emotion_lexicon),
                    )
                })
            })
            .map(Arc::clone)
    }

    /// Movie review sentences labeled `positive` / `negative`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data set is not cached and cannot be read.
    pub fn movie_reviews(&self) -> Result<Arc<Corpus>> {
        let files = &self.config.files;
        self.movie_reviews
            .get_or_try_init(|| {
                self.cached(MOVIE_REVIEWS_KEY, || {
                    Corpus::movie_reviews(
                        &self.config.data_path(&files.positive_reviews),
                        &self.config.data_path(&files.negative_reviews),
                    )
                })
            })
            .map(Arc::clone)
    }

    /// Emotion-tagged tweets, balanced when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the data set is not cached and cannot be read.
    pub fn tweets(&self) -> Result<Arc<Corpus>> {
        let key = if self.config.balance_classes {
            format!("data/tweets_balanced_{}", self.config.seed)
        } else {
            "data/tweets".to_string()
        };
        self.tweets
            .get_or_try_init(|| {
                self.cached(&key, || {
                    let corpus =
                        Corpus::tweets(&self.config.data_path(&self.config.files.tweets))?;
                    Ok(if self.config.balance_classes {
                        corpus.balanced(self.config.seed)
                    } else {
                        corpus
                    })
                })
            })
            .map(Arc::clone)
    }

    /// Training corpus of a mode: movie reviews or tweets.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded.
    pub fn corpus(&self, mode: Mode) -> Result<Arc<Corpus>> {
        match mode {
            Mode::Sentiment => self.movie_reviews(),
            Mode::Emotion => self.tweets(),
        }
    }

    fn cached<T, F>(&self, key: &str, read: F) -> Result<Arc<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.storage.load(key) {
            log::debug!("loaded {key} from cache");
            return Ok(Arc::new(value));
        }
        let value = read()?;
        self.storage.dump_or_warn(key, &value);
        Ok(Arc::new(value))
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("data_dir", &self.config.data_dir)
            .field("storage", &self.storage)
            .field("opinion_lexicon", &self.opinion_lexicon.get().is_some())
            .field("sentiwordnet", &self.sentiwordnet.get().is_some())
            .field("word_emotion_scores", &self.word_emotion_scores.get().is_some())
            .field("movie_reviews", &self.movie_reviews.get().is_some())
            .field("tweets", &self.tweets.get().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
