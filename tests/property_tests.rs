//! Property-based tests using proptest.
//!
//! These tests verify invariants of splitting, aggregation, negation
//! scoping and caching.

use proptest::prelude::*;
use sentir::corpus::{Corpus, LabeledExample};
use sentir::document::{DocumentAggregator, Last, MostContinuous, MostFrequent};
use sentir::evaluation::StratifiedKFold;
use sentir::storage::Storage;
use sentir::text::{is_negation_cue, TextNormalizer};
use std::collections::HashMap;

const LABELS: [&str; 4] = ["anger", "fear", "joy", "trust"];

// Strategy for corpora with up to four labels of uneven sizes
fn corpus_strategy() -> impl Strategy<Value = Corpus> {
    proptest::collection::vec(0usize..15, LABELS.len()).prop_map(|sizes| {
        let mut corpus = Corpus::new();
        for (label, size) in LABELS.iter().zip(sizes) {
            for i in 0..size {
                corpus.push(*label, format!("{label} sentence {i}"));
            }
        }
        corpus
    })
}

// Strategy for label sequences over a small alphabet
fn tags_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(prop::sample::select(vec!["pos", "neg", "neu"]), 0..20)
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

fn sorted(mut examples: Vec<LabeledExample>) -> Vec<LabeledExample> {
    examples.sort_by(|a, b| (&a.label, &a.text).cmp(&(&b.label, &b.text)));
    examples
}

fn longest_run(tags: &[String]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for (i, tag) in tags.iter().enumerate() {
        run = if i > 0 && tags[i - 1] == *tag { run + 1 } else { 1 };
        best = best.max(run);
    }
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn kfold_test_slices_reconstruct_corpus(corpus in corpus_strategy(), k in 2usize..7) {
        let folds = StratifiedKFold::new(k).splits(&corpus).expect("k >= 2");
        prop_assert_eq!(folds.len(), k);

        let mut tested = Vec::new();
        for fold in &folds {
            prop_assert_eq!(fold.training.len() + fold.testing.len(), corpus.len());
            let mut union = fold.training.clone();
            union.extend(fold.testing.iter().cloned());
            prop_assert_eq!(sorted(union), sorted(corpus.to_examples()));
            tested.extend(fold.testing.iter().cloned());
        }
        prop_assert_eq!(sorted(tested), sorted(corpus.to_examples()));
    }

    #[test]
    fn kfold_is_label_stratified(corpus in corpus_strategy(), k in 2usize..7) {
        for fold in StratifiedKFold::new(k).splits(&corpus).expect("k >= 2") {
            for (label, examples) in corpus.iter() {
                let in_test = fold.testing.iter().filter(|e| e.label == label).count();
                prop_assert!(in_test >= examples.len() / k);
                prop_assert!(in_test <= examples.len().div_ceil(k));
            }
        }
    }

    #[test]
    fn balanced_corpus_has_equal_classes(corpus in corpus_strategy(), seed in any::<u64>()) {
        let smallest = corpus.iter().map(|(_, examples)| examples.len()).min().unwrap_or(0);
        let balanced = corpus.clone().balanced(seed);

        for (label, examples) in balanced.iter() {
            prop_assert_eq!(examples.len(), smallest);
            for text in examples {
                prop_assert!(corpus.examples(label).contains(text));
            }
        }
        prop_assert_eq!(balanced, corpus.clone().balanced(seed));
    }

    #[test]
    fn most_frequent_picks_a_modal_label(tags in tags_strategy()) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in &tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
        match MostFrequent.aggregate(&tags) {
            None => prop_assert!(tags.is_empty()),
            Some(tag) => {
                let max = counts.values().copied().max().unwrap_or(0);
                prop_assert_eq!(counts[tag.as_str()], max);
            }
        }
    }

    #[test]
    fn most_continuous_picks_a_longest_run(tags in tags_strategy()) {
        match MostContinuous.aggregate(&tags) {
            None => prop_assert!(tags.is_empty()),
            Some(tag) => {
                let best = longest_run(&tags);
                let has_run = tags
                    .windows(best)
                    .any(|window| window.iter().all(|t| *t == tag));
                prop_assert!(has_run);
            }
        }
    }

    #[test]
    fn last_is_final_label(tags in tags_strategy()) {
        prop_assert_eq!(Last.aggregate(&tags), tags.last().cloned());
    }

    #[test]
    fn negation_cues_are_never_negated(
        tokens in proptest::collection::vec(
            prop::sample::select(vec!["not", "never", "good", "bad", ".", ",", "film"]),
            0..25,
        )
    ) {
        let scoped = TextNormalizer::negate_scope(&tokens);
        prop_assert_eq!(scoped.len(), tokens.len());
        for token in &scoped {
            if is_negation_cue(&token.text) {
                prop_assert!(!token.negated);
            }
        }
        prop_assert_eq!(TextNormalizer::mark_negations(&tokens).len(), tokens.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn cached_corpus_round_trips(corpus in corpus_strategy()) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let storage = Storage::new(dir.path());
        storage.dump("data/corpus", &corpus).expect("write cache");
        let loaded: Corpus = storage.load("data/corpus").expect("cache hit");
        prop_assert_eq!(loaded, corpus);
    }
}
