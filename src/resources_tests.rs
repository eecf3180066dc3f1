use super::*;
use std::fs;
use std::path::Path;

fn write_data_sets(root: &Path) {
    let files = crate::config::DataFiles::default();
    let write = |file: &Path, contents: &str| {
        let path = root.join(file);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dir");
        fs::write(path, contents).expect("write file");
    };
    write(&files.positive_reviews, "a delight\nsmart and funny\n");
    write(&files.negative_reviews, "a bore\n");
    write(
        &files.tweets,
        "000000000000000001: what a day :: joy\n\
         000000000000000002: sunny again :: joy\n\
         000000000000000003: so scared :: fear\n",
    );
    write(&files.opinion_positive, "####START####\ngood\n");
    write(&files.opinion_negative, "####START####\nbad\n");
    write(&files.sentiwordnet, "a\t1\t0.5\t0\tgood#1\tgloss\n");
    write(&files.emotion_lexicon, "######\njoy\tsunny\t0.8\n");
}

fn config_for(data: &Path, cache: &Path) -> ToolkitConfig {
    ToolkitConfig::new()
        .with_data_dir(data)
        .with_cache_dir(cache)
        .with_seed(3)
}

#[test]
fn test_injected_values_are_shared() {
    let resources = Resources::new(ToolkitConfig::new().with_cache_enabled(false))
        .with_sentiwordnet(SentiWordNet::default())
        .with_corpus(Mode::Sentiment, Corpus::new());

    let first = resources.sentiwordnet().expect("provided");
    let second = resources.sentiwordnet().expect("provided");
    assert!(Arc::ptr_eq(&first, &second));
    assert!(resources.corpus(Mode::Sentiment).expect("provided").is_empty());
}

#[test]
fn test_reads_data_sets_and_fills_cache() {
    let data = tempfile::tempdir().expect("create temp dir");
    let cache = tempfile::tempdir().expect("create temp dir");
    write_data_sets(data.path());

    let resources = Resources::new(config_for(data.path(), cache.path()));
    assert_eq!(resources.opinion_lexicon().expect("readable").len(), 2);
    assert_eq!(resources.sentiwordnet().expect("readable").len(), 1);
    assert_eq!(resources.word_emotion_scores().expect("readable").len(), 1);
    assert_eq!(resources.movie_reviews().expect("readable").len(), 3);

    // balanced to the single fear tweet
    let tweets = resources.corpus(Mode::Emotion).expect("readable");
    assert_eq!(tweets.examples("joy").len(), 1);
    assert_eq!(tweets.examples("fear"), ["so scared"]);

    assert!(resources.storage().path_for("data/movie_reviews").exists());
    assert!(resources.storage().path_for("data/tweets_balanced_3").exists());
}

#[test]
fn test_cache_hit_skips_data_files() {
    let data = tempfile::tempdir().expect("create temp dir");
    let cache = tempfile::tempdir().expect("create temp dir");
    write_data_sets(data.path());

    let first = Resources::new(config_for(data.path(), cache.path()));
    let reviews = first.movie_reviews().expect("readable");

    fs::remove_dir_all(data.path().join("movie_reviews")).expect("remove data set");
    let second = Resources::new(config_for(data.path(), cache.path()));
    assert_eq!(*second.movie_reviews().expect("cached"), *reviews);
}

#[test]
fn test_unbalanced_tweets() {
    let data = tempfile::tempdir().expect("create temp dir");
    write_data_sets(data.path());

    let config = ToolkitConfig::new()
        .with_data_dir(data.path())
        .with_cache_enabled(false)
        .with_balance_classes(false);
    let tweets = Resources::new(config).tweets().expect("readable");
    assert_eq!(tweets.examples("joy").len(), 2);
}

#[test]
fn test_missing_data_set_is_an_error() {
    let data = tempfile::tempdir().expect("create temp dir");
    let config = ToolkitConfig::new()
        .with_data_dir(data.path())
        .with_cache_enabled(false);
    let resources = Resources::new(config);
    assert!(resources.opinion_lexicon().is_err());
    assert!(resources.corpus(Mode::Sentiment).is_err());
}
