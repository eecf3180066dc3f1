//! Accuracy, precision and recall of sentence predictors.
//!
//! [`evaluate`] scores one pass over a labeled test set;
//! [`cross_validate`] averages it over label-stratified folds.

mod kfold;

pub use kfold::{Fold, StratifiedKFold};

use crate::corpus::{Corpus, LabeledExample};
use crate::error::{Result, SentirError};
use crate::sentence::SentencePredictor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Scores of one evaluation, as fractions in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Correct predictions over all predictions
    pub accuracy: f64,
    /// Per predicted label: correct over all predictions of that label
    pub precision: BTreeMap<String, f64>,
    /// Per actual label: correct over all examples of that label
    pub recall: BTreeMap<String, f64>,
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "accuracy : {:.4}", self.accuracy)?;
        writeln!(f, "precision :")?;
        for (label, value) in &self.precision {
            writeln!(f, "    {label} : {value:.4}")?;
        }
        writeln!(f, "recall :")?;
        for (label, value) in &self.recall {
            writeln!(f, "    {label} : {value:.4}")?;
        }
        Ok(())
    }
}

#[derive(Default, Clone, Copy)]
struct Tally {
    correct: usize,
    total: usize,
}

impl Tally {
    fn add(&mut self, is_correct: bool) {
        self.total += 1;
        if is_correct {
            self.correct += 1;
        }
    }

    fn ratio(self) -> f64 {
        self.correct as f64 / self.total as f64
    }
}

/// Predicts every test sentence and scores the predictions.
///
/// Precision covers only labels predicted at least once; recall covers only
/// labels present in the test set.
///
/// # Errors
///
/// Returns an error for an empty test set or when a prediction fails.
pub fn evaluate<P>(predictor: &mut P, testing_set: &[LabeledExample]) -> Result<EvaluationResult>
where
    P: SentencePredictor + ?Sized,
{
    if testing_set.is_empty() {
        return Err(SentirError::empty_input("no test sentences"));
    }

    let mut precision: BTreeMap<String, Tally> = BTreeMap::new();
    let mut recall: BTreeMap<String, Tally> = BTreeMap::new();
    let mut correct = 0_usize;

    for example in testing_set {
        let predicted = predictor.predict(&example.text)?;
        let is_correct = predicted == example.label;
        if is_correct {
            correct += 1;
        }
        recall.entry(example.label.clone()).or_default().add(is_correct);
        precision.entry(predicted).or_default().add(is_correct);
    }

    Ok(EvaluationResult {
        accuracy: correct as f64 / testing_set.len() as f64,
        precision: precision.into_iter().map(|(l, t)| (l, t.ratio())).collect(),
        recall: recall.into_iter().map(|(l, t)| (l, t.ratio())).collect(),
    })
}

/// K-fold cross-validation of a prepared predictor.
///
/// Each fold retrains the predictor on its training slice (without writing
/// the model cache) and evaluates it on its test slice. Scores are averaged
/// over all `folds`; a label missing from a fold counts as 0 there.
///
/// # Errors
///
/// Returns an error for `folds < 2`, an empty test slice, or a failure to
/// train or predict.
pub fn cross_validate<P>(
    predictor: &mut P,
    corpus: &Corpus,
    folds: usize,
) -> Result<EvaluationResult>
where
    P: SentencePredictor + ?Sized,
{
    let kfold = StratifiedKFold::new(folds);
    let mut total = EvaluationResult::default();

    for (idx, fold) in kfold.splits(corpus)?.into_iter().enumerate() {
        predictor.train(&fold.training, false)?;
        let result = evaluate(predictor, &fold.testing)?;
        log::info!(
            "{} fold {}/{folds}: accuracy {:.4}",
            predictor.name(),
            idx + 1,
            result.accuracy
        );

        total.accuracy += result.accuracy;
        for (label, value) in result.precision {
            *total.precision.entry(label).or_default() += value;
        }
        for (label, value) in result.recall {
            *total.recall.entry(label).or_default() += value;
        }
    }

    let k = folds as f64;
    total.accuracy /= k;
    total.precision.values_mut().for_each(|v| *v /= k);
    total.recall.values_mut().for_each(|v| *v /= k);
    Ok(total)
}

#[cfg(test)]
mod tests;
