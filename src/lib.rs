//! Sentir: emotion and sentiment classification of sentences and documents.
//!
//! Sentir labels each sentence of a document with a sentiment (`positive`,
//! `negative`) or one of eight emotions, then reduces the sentence labels
//! to a document label. Sentence labels come from lexicon heuristics or from
//! classifiers trained on n-gram presence or lexicon score features.
//!
//! # Quick Start
//!
//! ```
//! use sentir::config::ToolkitConfig;
//! use sentir::labels::Mode;
//! use sentir::lexicon::OpinionLexicon;
//! use sentir::resources::Resources;
//! use sentir::toolkit::Toolkit;
//!
//! let resources = Resources::new(ToolkitConfig::new().with_cache_enabled(false))
//!     .with_opinion_lexicon(OpinionLexicon::parse("wonderful\n", "boring\n"));
//!
//! // 4 => OpinionLexiconSentimentCount, 0 => MostFrequent
//! let mut toolkit = Toolkit::with_resources(resources, Mode::Sentiment).with_sentence_level(4);
//! let analysis = toolkit
//!     .analyse("What a wonderful film. Wonderful cast, boring ending.")
//!     .expect("lexicon provided");
//!
//! assert_eq!(analysis.tag.as_deref(), Some("positive"));
//! ```
//!
//! # Modules
//!
//! - [`text`]: Tokenization, sentence splitting, negation scoping, lemmatization
//! - [`lexicon`]: Opinion lexicon, SentiWordNet and NRC word-emotion scores
//! - [`corpus`]: Labeled movie reviews and emotion-tagged tweets
//! - [`features`]: N-gram presence and lexicon score extractors
//! - [`classification`]: Naive Bayes variants, logistic regression, linear SVM
//! - [`sentence`]: Sentence-level predictors
//! - [`document`]: Document-level aggregators
//! - [`evaluation`]: Stratified k-fold cross-validation, accuracy, precision, recall
//! - [`resources`]: Lazily loaded, shared data sets
//! - [`storage`]: Compressed on-disk cache
//! - [`toolkit`]: Predictor registries and the document analysis facade

pub mod classification;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod labels;
pub mod lexicon;
pub mod primitives;
pub mod resources;
pub mod sentence;
pub mod storage;
pub mod text;
pub mod toolkit;

pub use error::{Result, SentirError};
pub use labels::Mode;
pub use primitives::Matrix;
pub use toolkit::{Analysis, Toolkit};
