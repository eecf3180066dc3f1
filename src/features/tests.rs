use super::*;
use crate::config::{NlpCapabilities, ToolkitConfig};
use crate::lexicon::{SentiWordNet, WordEmotionScore};
use crate::text::TextNormalizer;
use std::sync::Arc;

fn plain_normalizer() -> Arc<TextNormalizer> {
    Arc::new(TextNormalizer::new(NlpCapabilities::none()))
}

fn unigram(pipeline: NgramPipeline, max_features: usize) -> NgramVectorizer {
    NgramVectorizer::new(plain_normalizer(), NgramOrder::Unigram, pipeline, max_features)
}

fn bigram() -> NgramVectorizer {
    NgramVectorizer::new(plain_normalizer(), NgramOrder::Bigram, NgramPipeline::bigram(), 100)
}

const NO_STEPS: NgramPipeline = NgramPipeline {
    negation: false,
    stop_words: false,
    lemmatize: false,
};

#[test]
fn test_pipelines_per_mode() {
    assert!(!NgramPipeline::unigram(Mode::Sentiment).stop_words);
    assert!(NgramPipeline::unigram(Mode::Emotion).stop_words);
    assert!(NgramPipeline::unigram(Mode::Emotion).lemmatize);
    assert!(!NgramPipeline::bigram().lemmatize);
    assert!(NgramPipeline::bigram().negation);
}

#[test]
fn test_normalize_lowercases_marks_and_strips() {
    let pipeline = NgramPipeline {
        negation: true,
        stop_words: true,
        lemmatize: false,
    };
    let vectorizer = unigram(pipeline, 10);
    assert_eq!(
        vectorizer.normalize("The plot is NOT clever , the cast is"),
        vec!["plot", "not", "NOT_clever", "cast"]
    );
}

#[test]
fn test_bigram_terms_have_markers() {
    let vectorizer = bigram();
    assert_eq!(vectorizer.terms("Great fun !"), vec!["$ great", "great fun", "fun ^"]);
    assert_eq!(vectorizer.terms("?!"), vec!["$ ^"]);
    assert_eq!(vectorizer.terms("not bad"), vec!["$ not", "not NOT_bad", "NOT_bad ^"]);
}

#[test]
fn test_vocabulary_keeps_most_frequent() {
    let mut vectorizer = unigram(NO_STEPS, 2);
    vectorizer
        .fit(&["b a c", "a b", "a d"])
        .expect("non-empty training set");
    // a:3 b:2 then c and d tie at 1 and are cut
    assert_eq!(vectorizer.vocabulary(), ["a", "b"]);
    assert_eq!(vectorizer.dimension(), 2);
}

#[test]
fn test_frequency_ties_break_lexicographically() {
    let mut vectorizer = unigram(NO_STEPS, 2);
    vectorizer.fit(&["zeta beta alpha"]).expect("non-empty training set");
    assert_eq!(vectorizer.vocabulary(), ["alpha", "beta"]);
}

#[test]
fn test_transform_is_presence() {
    let mut vectorizer = unigram(NO_STEPS, 10);
    vectorizer.fit(&["dull dull film", "fine film"]).expect("non-empty training set");
    assert_eq!(vectorizer.vocabulary(), ["dull", "film", "fine"]);
    assert_eq!(
        vectorizer.transform("dull dull dull unseen").expect("fitted"),
        vec![1.0, 0.0, 0.0]
    );
    assert_eq!(vectorizer.transform("").expect("fitted"), vec![0.0; 3]);
}

#[test]
fn test_fit_rebuilds_vocabulary() {
    let mut vectorizer = unigram(NO_STEPS, 10);
    vectorizer.fit(&["first"]).expect("non-empty training set");
    vectorizer.fit(&["second"]).expect("non-empty training set");
    assert_eq!(vectorizer.vocabulary(), ["second"]);
}

#[test]
fn test_unfitted_and_invalid_vectorizers() {
    let vectorizer = unigram(NO_STEPS, 10);
    assert!(matches!(
        vectorizer.transform("x"),
        Err(SentirError::NotFitted { .. })
    ));

    let mut empty_limit = unigram(NO_STEPS, 0);
    assert!(matches!(
        empty_limit.fit(&["x"]),
        Err(SentirError::InvalidHyperparameter { .. })
    ));
    let mut vectorizer = unigram(NO_STEPS, 10);
    assert!(vectorizer.fit(&[]).is_err());
}

#[test]
fn test_state_restore() {
    let mut trained = bigram();
    trained.fit(&["not bad at all"]).expect("non-empty training set");

    let mut restored = bigram();
    restored.restore(trained.state()).expect("vocabulary snapshot");
    assert_eq!(restored.vocabulary(), trained.vocabulary());
    assert_eq!(
        restored.transform("not bad").expect("restored"),
        trained.transform("not bad").expect("fitted")
    );

    assert!(restored.restore(ExtractorState::Stateless).is_err());
}

#[test]
fn test_transform_all_shapes_matrix() {
    let mut vectorizer = unigram(NO_STEPS, 10);
    vectorizer.fit(&["a b", "c"]).expect("non-empty training set");
    let x = vectorizer.transform_all(&["a", "c", "b c"]).expect("fitted");
    assert_eq!(x.shape(), (3, 3));
    assert_eq!(x.row(2), &[0.0, 1.0, 1.0]);
}

#[test]
fn test_lexicon_score_extractor() {
    let swn = SentiWordNet::parse("a\t1\t0.5\t0.25\tgood#1\tgloss\n", "swn").expect("valid");
    let mut extractor = LexiconScoreExtractor::new(plain_normalizer(), Arc::new(swn));
    extractor.fit(&[]).expect("nothing to learn");

    assert_eq!(extractor.dimension(), 2);
    assert_eq!(extractor.dimension_names(), vec!["negative", "positive"]);
    assert_eq!(extractor.transform("Good good").expect("stateless"), vec![0.5, 1.0]);
    assert_eq!(extractor.transform("not good").expect("stateless"), vec![0.25, 0.5]);

    let negating = extractor.with_negation(true);
    assert_eq!(negating.transform("not good").expect("stateless"), vec![-0.25, -0.5]);
    assert_eq!(negating.state(), ExtractorState::Stateless);
}

#[test]
fn test_lexicon_score_rejects_vocabulary() {
    let mut extractor =
        LexiconScoreExtractor::new(plain_normalizer(), Arc::new(WordEmotionScore::default()));
    assert!(extractor.restore(ExtractorState::Stateless).is_ok());
    assert!(extractor
        .restore(ExtractorState::Vocabulary(vec!["x".into()]))
        .is_err());
}

#[test]
fn test_build_from_resources() {
    let config = ToolkitConfig::new()
        .with_cache_enabled(false)
        .with_vocabulary_limits(5, 7)
        .with_nlp(NlpCapabilities::none());
    let resources = Resources::new(config)
        .with_sentiwordnet(SentiWordNet::default())
        .with_word_emotion_scores(WordEmotionScore::default());

    let emotion = FeatureKind::LexiconScore
        .build(Mode::Emotion, &resources)
        .expect("lexicon provided");
    assert_eq!(emotion.dimension(), 8);
    let sentiment = FeatureKind::LexiconScore
        .build(Mode::Sentiment, &resources)
        .expect("lexicon provided");
    assert_eq!(sentiment.dimension(), 2);

    let mut unigrams = FeatureKind::Unigram
        .build(Mode::Sentiment, &resources)
        .expect("no lexicon needed");
    unigrams
        .fit(&["a b c d e f g h i j"])
        .expect("non-empty training set");
    assert_eq!(unigrams.dimension(), 5);
}

#[test]
fn test_fingerprint_tracks_limits_and_capabilities() {
    let plain = Resources::new(
        ToolkitConfig::new()
            .with_cache_enabled(false)
            .with_vocabulary_limits(5, 7)
            .with_nlp(NlpCapabilities::none()),
    );
    assert_eq!(FeatureKind::Unigram.fingerprint(&plain), "v5");
    assert_eq!(FeatureKind::Bigram.fingerprint(&plain), "v7");
    assert_eq!(FeatureKind::LexiconScore.fingerprint(&plain), "");
}

#[cfg(feature = "nlp")]
#[test]
fn test_fingerprint_with_full_capabilities() {
    let full = Resources::new(ToolkitConfig::new().with_cache_enabled(false));
    assert_eq!(FeatureKind::Unigram.fingerprint(&full), "v3000wl");
    assert_eq!(FeatureKind::LexiconScore.fingerprint(&full), "wl");
}

#[test]
fn test_predictor_prefixes() {
    assert_eq!(
        FeatureKind::Unigram.predictor_prefix(Mode::Sentiment),
        "UnigramSentiment"
    );
    assert_eq!(
        FeatureKind::LexiconScore.predictor_prefix(Mode::Emotion),
        "EmotionScore"
    );
    assert_eq!(FeatureKind::Bigram.to_string(), "bigram");
}
