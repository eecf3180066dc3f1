use super::*;

fn plain() -> TextNormalizer {
    TextNormalizer::new(NlpCapabilities::none())
}

#[test]
fn test_negation_scope_ends_at_punctuation() {
    let scoped = TextNormalizer::negate_scope(&["not", "good", ".", " bad"]);
    let flags: Vec<bool> = scoped.iter().map(|t| t.negated).collect();
    assert_eq!(flags, vec![false, true, false, false]);
    assert_eq!(scoped[3].text, " bad");
}

#[test]
fn test_second_cue_toggles_scope_off() {
    let scoped = TextNormalizer::negate_scope(&["not", "bad", "but", "great"]);
    let flags: Vec<bool> = scoped.iter().map(|t| t.negated).collect();
    assert_eq!(flags, vec![false, true, false, false]);
}

#[test]
fn test_cues_are_case_insensitive() {
    assert!(is_negation_cue("NOT"));
    assert!(is_negation_cue("Didn't"));
    assert!(!is_negation_cue("nothing"));
}

#[test]
fn test_mark_negations_never_prefixes_punctuation() {
    let marked = TextNormalizer::mark_negations(&["don't", "like", "it", "!", "fun"]);
    assert_eq!(marked, vec!["don't", "NOT_like", "NOT_it", "!", "fun"]);
}

#[test]
fn test_mark_negations_open_scope_to_end() {
    let marked = TextNormalizer::mark_negations(&["though", "slow", "boring"]);
    assert_eq!(marked, vec!["though", "NOT_slow", "NOT_boring"]);
}

#[test]
fn test_is_punctuation() {
    assert!(is_punctuation("."));
    assert!(is_punctuation("?!"));
    assert!(is_punctuation(""));
    assert!(!is_punctuation("a."));
    assert!(!is_punctuation("42"));
}

#[test]
fn test_remove_punctuation() {
    let tokens = vec!["wow".to_string(), "!".to_string(), ":-)".to_string()];
    assert_eq!(TextNormalizer::remove_punctuation(tokens), vec!["wow"]);
}

#[test]
fn test_remove_stop_words_default_and_custom() {
    let tokens = vec!["The".to_string(), "plot".to_string(), "is".to_string()];
    assert_eq!(plain().remove_stop_words(tokens.clone()), vec!["plot"]);

    let custom = plain().with_stop_words(StopWordsFilter::new(["plot"]));
    assert_eq!(custom.remove_stop_words(tokens), vec!["The", "is"]);
}

#[test]
fn test_tokenize_drops_non_ascii() {
    assert_eq!(plain().tokenize("naïve  plan"), vec!["nave", "plan"]);
    assert_eq!(to_ascii("über"), "ber");
}

#[test]
fn test_fallback_capabilities() {
    let normalizer = plain();
    assert_eq!(normalizer.capabilities(), NlpCapabilities::none());
    let tokens = vec!["running".to_string()];
    assert_eq!(normalizer.lemmatize(&tokens), tokens);
    assert_eq!(
        normalizer.split_into_sentences("One. Two? Three!"),
        vec!["One", "Two", "Three"]
    );
}

#[cfg(feature = "nlp")]
#[test]
fn test_full_capabilities() {
    let normalizer = TextNormalizer::default();
    assert_eq!(normalizer.capabilities(), NlpCapabilities::all());
    assert_eq!(
        normalizer.tokenize("I didn't like it."),
        vec!["I", "didn't", "like", "it", "."]
    );
    assert_eq!(
        normalizer.split_into_sentences("One. Two? Three!"),
        vec!["One.", "Two?", "Three!"]
    );
    assert_eq!(normalizer.lemmatize(&["movies".to_string()]), vec!["movi"]);
}

#[cfg(feature = "nlp")]
#[test]
fn test_full_capabilities_split_lowercase_reviews() {
    let normalizer = TextNormalizer::default();
    assert_eq!(
        normalizer.split_into_sentences("the plot was thin. the cast said no. i left early!"),
        vec!["the plot was thin.", "the cast said no.", "i left early!"]
    );
}

#[cfg(not(feature = "nlp"))]
#[test]
fn test_requested_capabilities_degrade_without_nlp() {
    let normalizer = TextNormalizer::default();
    assert!(!normalizer.capabilities().tokenizer);
    assert!(!normalizer.capabilities().lemmatizer);
    assert!(normalizer.capabilities().sentence_splitter);
}
