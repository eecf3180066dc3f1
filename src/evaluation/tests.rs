use super::*;
use crate::resources::Resources;
use std::collections::HashMap;

/// Predicts a fixed label; counts training calls.
struct Constant {
    label: &'static str,
    trained: Vec<(usize, bool)>,
}

impl Constant {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            trained: Vec::new(),
        }
    }
}

impl SentencePredictor for Constant {
    fn name(&self) -> &str {
        "Constant"
    }

    fn prepare(&mut self, _resources: &Resources) -> Result<()> {
        Ok(())
    }

    fn train(&mut self, training_set: &[LabeledExample], persist: bool) -> Result<()> {
        self.trained.push((training_set.len(), persist));
        Ok(())
    }

    fn predict(&mut self, _sentence: &str) -> Result<String> {
        Ok(self.label.to_string())
    }
}

/// Knows the answer for every sentence.
struct Oracle(HashMap<String, String>);

impl SentencePredictor for Oracle {
    fn name(&self) -> &str {
        "Oracle"
    }

    fn prepare(&mut self, _resources: &Resources) -> Result<()> {
        Ok(())
    }

    fn predict(&mut self, sentence: &str) -> Result<String> {
        self.0
            .get(sentence)
            .cloned()
            .ok_or_else(|| SentirError::Other(format!("unseen: {sentence}")))
    }
}

/// Predicts `negative` after odd training calls, `positive` after even ones.
#[derive(Default)]
struct Alternating {
    calls: usize,
}

impl SentencePredictor for Alternating {
    fn name(&self) -> &str {
        "Alternating"
    }

    fn prepare(&mut self, _resources: &Resources) -> Result<()> {
        Ok(())
    }

    fn train(&mut self, _training_set: &[LabeledExample], _persist: bool) -> Result<()> {
        self.calls += 1;
        Ok(())
    }

    fn predict(&mut self, _sentence: &str) -> Result<String> {
        let label = if self.calls % 2 == 1 { "negative" } else { "positive" };
        Ok(label.to_string())
    }
}

fn corpus(positive: usize, negative: usize) -> Corpus {
    let mut corpus = Corpus::new();
    for i in 0..positive {
        corpus.push("positive", format!("good {i}"));
    }
    for i in 0..negative {
        corpus.push("negative", format!("bad {i}"));
    }
    corpus
}

#[test]
fn test_folds_reconstruct_corpus() {
    let corpus = corpus(7, 5);
    let kfold = StratifiedKFold::new(3);
    let folds = kfold.splits(&corpus).expect("valid k");
    assert_eq!(folds.len(), 3);

    let mut tested: Vec<LabeledExample> = Vec::new();
    for fold in &folds {
        assert_eq!(fold.training.len() + fold.testing.len(), corpus.len());
        for example in &fold.testing {
            assert!(!fold.training.contains(example));
        }
        tested.extend(fold.testing.iter().cloned());
    }
    tested.sort_by(|a, b| a.text.cmp(&b.text));
    let mut all = corpus.to_examples();
    all.sort_by(|a, b| a.text.cmp(&b.text));
    assert_eq!(tested, all);
}

#[test]
fn test_fold_slices_use_floor_boundaries() {
    let corpus = corpus(5, 0);
    let kfold = StratifiedKFold::new(2);
    let first = kfold.split(&corpus, 0).expect("valid fold");
    let texts: Vec<&str> = first.testing.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["good 0", "good 1"]);

    let second = kfold.split(&corpus, 1).expect("valid fold");
    assert_eq!(second.testing.len(), 3);
    assert_eq!(second.training[0].text, "good 0");
}

#[test]
fn test_invalid_folds() {
    let corpus = corpus(4, 4);
    assert!(StratifiedKFold::new(1).split(&corpus, 0).is_err());
    assert!(StratifiedKFold::new(0).splits(&corpus).is_err());
    assert!(StratifiedKFold::new(3).split(&corpus, 3).is_err());
    assert_eq!(StratifiedKFold::new(3).n_splits(), 3);
}

#[test]
fn test_perfect_predictor_scores_one() {
    let corpus = corpus(3, 2);
    let examples = corpus.to_examples();
    let mut oracle = Oracle(
        examples
            .iter()
            .map(|e| (e.text.clone(), e.label.clone()))
            .collect(),
    );

    let result = evaluate(&mut oracle, &examples).expect("non-empty test set");
    assert_eq!(result.accuracy, 1.0);
    assert!(result.precision.values().all(|&p| p == 1.0));
    assert!(result.recall.values().all(|&r| r == 1.0));
    assert_eq!(result.recall.len(), 2);
}

#[test]
fn test_evaluate_constant_predictor() {
    let examples = corpus(3, 1).to_examples();
    let result = evaluate(&mut Constant::new("positive"), &examples).expect("non-empty test set");

    assert_eq!(result.accuracy, 0.75);
    assert_eq!(result.precision.len(), 1);
    assert_eq!(result.precision["positive"], 0.75);
    assert_eq!(result.recall["positive"], 1.0);
    assert_eq!(result.recall["negative"], 0.0);
}

#[test]
fn test_evaluate_empty_set_is_error() {
    assert!(evaluate(&mut Constant::new("positive"), &[]).is_err());
}

#[test]
fn test_evaluate_propagates_prediction_errors() {
    let mut oracle = Oracle(HashMap::new());
    assert!(evaluate(&mut oracle, &corpus(1, 0).to_examples()).is_err());
}

#[test]
fn test_cross_validate_retrains_each_fold_without_persisting() {
    let corpus = corpus(4, 4);
    let mut predictor = Constant::new("positive");
    let result = cross_validate(&mut predictor, &corpus, 2).expect("valid folds");

    assert_eq!(predictor.trained, vec![(4, false), (4, false)]);
    assert_eq!(result.accuracy, 0.5);
    assert_eq!(result.precision["positive"], 0.5);
    assert_eq!(result.recall["positive"], 1.0);
    assert_eq!(result.recall["negative"], 0.0);
}

#[test]
fn test_cross_validate_missing_label_counts_zero() {
    let corpus = corpus(2, 2);
    let result = cross_validate(&mut Alternating::default(), &corpus, 2).expect("valid folds");

    assert_eq!(result.accuracy, 0.5);
    assert_eq!(result.precision["negative"], 0.25);
    assert_eq!(result.precision["positive"], 0.25);
    assert_eq!(result.recall["negative"], 0.5);
    assert_eq!(result.recall["positive"], 0.5);
}

#[test]
fn test_cross_validate_through_trait_object() {
    let corpus = corpus(4, 4);
    let mut boxed: Box<dyn SentencePredictor> = Box::new(Constant::new("negative"));
    let result = cross_validate(boxed.as_mut(), &corpus, 4).expect("valid folds");
    assert_eq!(result.accuracy, 0.5);
}

#[test]
fn test_cross_validate_rejects_small_k() {
    assert!(cross_validate(&mut Constant::new("positive"), &corpus(2, 2), 1).is_err());
}

#[test]
fn test_report_display() {
    let examples = corpus(3, 1).to_examples();
    let result = evaluate(&mut Constant::new("positive"), &examples).expect("non-empty test set");
    let report = result.to_string();
    assert!(report.starts_with("accuracy : 0.7500\n"));
    assert!(report.contains("precision :\n    positive : 0.7500\n"));
    assert!(report.contains("recall :\n    negative : 0.0000\n    positive : 1.0000\n"));
}

#[test]
fn test_result_serializes_to_json() {
    let examples = corpus(1, 1).to_examples();
    let result = evaluate(&mut Constant::new("negative"), &examples).expect("non-empty test set");
    let json = serde_json::to_value(&result).expect("serializable");
    assert_eq!(json["accuracy"], 0.5);
    assert_eq!(json["recall"]["negative"], 1.0);
}
