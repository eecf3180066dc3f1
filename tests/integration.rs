//! Integration tests for the sentir toolkit.
//!
//! These tests run end-to-end workflows over data set files on disk:
//! parsing, caching, training, analysis and cross-validation.

use sentir::config::{NlpCapabilities, ToolkitConfig};
use sentir::labels::{LabelSet, Mode};
use sentir::resources::Resources;
use sentir::toolkit::Toolkit;
use std::fs;
use std::path::Path;

const POSITIVE_REVIEWS: &str = "\
a great and fun film
wonderful acting and a great story
fun from start to finish
the cast is wonderful
great direction and great music
a fun wonderful ride
";

const NEGATIVE_REVIEWS: &str = "\
a dull and boring film
awful acting and a dull story
boring from start to finish
the cast is awful
dull direction and awful music
a boring awful ride
";

const TWEETS: &[(&str, &str)] = &[
    ("sunny day at the beach", "joy"),
    ("so happy to see you smile", "joy"),
    ("happy sunny weekend", "joy"),
    ("smile all day long", "joy"),
    ("dark alley at night", "fear"),
    ("that spider is scary", "fear"),
    ("scary dark basement", "fear"),
];

const EMOTION_SCORES: &str = "\
NRC hashtag emotion lexicon
######
joy\tsunny\t0.9
joy\thappy\t0.8
joy\tsmile\t0.7
fear\tdark\t0.9
fear\tscary\t0.8
fear\tspider\t0.6
";

const SENTIWORDNET: &str = "\
# SentiWordNet excerpt
a\t00001\t0.75\t0\tgreat#1 wonderful#1\tgloss
a\t00002\t0\t0.625\tdull#1 awful#2\tgloss
";

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("relative path has a parent")).expect("create dir");
    fs::write(path, content).expect("write data set");
}

fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();
    write(root, "movie_reviews/positive_reviews.txt", POSITIVE_REVIEWS);
    write(root, "movie_reviews/negative_reviews.txt", NEGATIVE_REVIEWS);
    write(root, "opinion_lexicon/positive-words.txt", "great\nfun\nwonderful\n");
    write(root, "opinion_lexicon/negative-words.txt", "dull\nawful\nboring\n");
    write(root, "sentiwordnet/SentiWordNet_3.0.0.txt", SENTIWORDNET);
    write(root, "emotion_lexicon/word_emotion_score.txt", EMOTION_SCORES);

    let tweets: String = TWEETS
        .iter()
        .enumerate()
        .map(|(i, (sentence, emotion))| format!("{i:018}:{sentence}::{emotion}\n"))
        .collect();
    write(root, "emotion_lexicon/tweet_data_set.txt", &tweets);
    dir
}

fn config(data: &Path, cache: &Path) -> ToolkitConfig {
    ToolkitConfig::new()
        .with_data_dir(data)
        .with_cache_dir(cache)
        .with_nlp(NlpCapabilities::none())
}

#[test]
fn test_sentiment_model_is_trained_then_restored_from_cache() {
    let data = data_dir();
    let cache = tempfile::tempdir().expect("create temp dir");

    let mut toolkit = Toolkit::new(config(data.path(), cache.path()), Mode::Sentiment);
    let analysis = toolkit
        .analyse("A great and fun story. An awful and dull ride.")
        .expect("trains on the movie reviews");
    assert_eq!(analysis.tags, vec!["positive", "negative"]);
    assert!(cache
        .path()
        .join("sentiment/unigram_sentiment_multinomial_nb_v3000.bin.zst")
        .exists());

    // The data set files are no longer needed.
    fs::remove_dir_all(data.path().join("movie_reviews")).expect("remove corpus");
    let mut restored = Toolkit::new(config(data.path(), cache.path()), Mode::Sentiment);
    let again = restored
        .analyse("A great and fun story. An awful and dull ride.")
        .expect("restored from cache");
    assert_eq!(again, analysis);
}

#[test]
fn test_every_sentiment_predictor_labels_within_label_set() {
    let data = data_dir();
    let cache = tempfile::tempdir().expect("create temp dir");
    let config = config(data.path(), cache.path()).with_cache_enabled(false);
    let mut toolkit = Toolkit::new(config, Mode::Sentiment);
    let sentiments = LabelSet::sentiments();

    for index in 0..toolkit.sentence_levels().len() {
        toolkit.select_sentence_level(index);
        let analysis = toolkit
            .analyse("Wonderful music. Boring story.")
            .unwrap_or_else(|e| panic!("{}: {e}", toolkit.sentence_level_name()));
        assert_eq!(analysis.tags.len(), 2);
        for tag in &analysis.tags {
            assert!(sentiments.contains(tag), "{tag} is not a sentiment");
        }
    }
}

#[test]
fn test_every_emotion_predictor_labels_within_label_set() {
    let data = data_dir();
    let cache = tempfile::tempdir().expect("create temp dir");
    let config = config(data.path(), cache.path()).with_cache_enabled(false);
    let mut toolkit = Toolkit::new(config, Mode::Emotion);
    let emotions = LabelSet::emotions();

    for index in 0..toolkit.sentence_levels().len() {
        toolkit.select_sentence_level(index);
        let analysis = toolkit
            .analyse("A sunny happy smile. A dark scary spider.")
            .unwrap_or_else(|e| panic!("{}: {e}", toolkit.sentence_level_name()));
        for tag in &analysis.tags {
            assert!(emotions.contains(tag), "{tag} is not an emotion");
        }
    }
}

#[test]
fn test_lexicon_heuristics_on_data_sets() {
    let data = data_dir();
    let cache = tempfile::tempdir().expect("create temp dir");

    let mut sentiment = Toolkit::new(config(data.path(), cache.path()), Mode::Sentiment)
        .with_sentence_level(9)
        .with_document_level(2);
    let analysis = sentiment
        .analyse("Great music. Dull story. Awful cast. Wonderful ending.")
        .expect("SentiWordNet loaded");
    assert_eq!(analysis.tags, vec!["positive", "negative", "negative", "positive"]);
    assert_eq!(analysis.tag.as_deref(), Some("negative"));

    let mut emotion =
        Toolkit::new(config(data.path(), cache.path()), Mode::Emotion).with_sentence_level(6);
    let analysis = emotion
        .analyse("What a sunny morning. Such a dark night. Happy again.")
        .expect("emotion lexicon loaded");
    assert_eq!(analysis.tags, vec!["joy", "fear", "joy"]);
    assert_eq!(analysis.tag.as_deref(), Some("joy"));
}

#[test]
fn test_tweets_are_balanced_and_cached() {
    let data = data_dir();
    let cache = tempfile::tempdir().expect("create temp dir");

    let resources = Resources::new(config(data.path(), cache.path()));
    let tweets = resources.tweets().expect("tweets parsed");
    assert_eq!(tweets.examples("joy").len(), 3);
    assert_eq!(tweets.examples("fear").len(), 3);

    fs::remove_file(data.path().join("emotion_lexicon/tweet_data_set.txt")).expect("remove");
    let reloaded = Resources::new(config(data.path(), cache.path()))
        .tweets()
        .expect("tweets cached");
    assert_eq!(*reloaded, *tweets);
}

#[test]
fn test_cross_validation_report() {
    let data = data_dir();
    let cache = tempfile::tempdir().expect("create temp dir");
    let config = config(data.path(), cache.path()).with_cache_enabled(false);

    let mut toolkit = Toolkit::new(config, Mode::Sentiment).with_sentence_level(4);
    let result = toolkit.evaluate(3).expect("valid folds");
    assert_eq!(result.accuracy, 1.0);
    assert_eq!(result.recall.len(), 2);

    toolkit.select_sentence_level(0);
    let result = toolkit.evaluate(3).expect("valid folds");
    assert!((0.0..=1.0).contains(&result.accuracy));
    for label in result.precision.keys().chain(result.recall.keys()) {
        assert!(label == "positive" || label == "negative");
    }
    let report = result.to_string();
    assert!(report.starts_with("accuracy : "));
}

#[test]
fn test_missing_data_set_is_an_error() {
    let empty = tempfile::tempdir().expect("create temp dir");
    let cache = tempfile::tempdir().expect("create temp dir");
    let mut toolkit = Toolkit::new(config(empty.path(), cache.path()), Mode::Sentiment)
        .with_sentence_level(4);
    assert!(toolkit.analyse("great").is_err());
}
