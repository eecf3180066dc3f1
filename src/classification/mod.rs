//! Classification algorithms.
//!
//! This module is the statistical learning capability behind the trained
//! sentence predictors:
//! - Gaussian, Multinomial and Bernoulli Naive Bayes
//! - Logistic Regression (maximum entropy), one-vs-rest for multi-class
//! - Linear Support Vector Machine, one-vs-rest for multi-class
//!
//! All of them implement [`Classifier`], and [`Engine`] wraps them in one
//! serializable value so a fitted model can be cached and reloaded.
//!
//! # Example
//!
//! ```
//! use sentir::classification::{Classifier, ClassifierKind};
//! use sentir::primitives::Matrix;
//!
//! let x = Matrix::from_vec(4, 2, vec![
//!     1.0, 0.0,
//!     1.0, 0.0,
//!     0.0, 1.0,
//!     0.0, 1.0,
//! ]).expect("Matrix dimensions match data length");
//! let y = vec![0, 0, 2, 2];
//!
//! let mut engine = ClassifierKind::MultinomialNB.build();
//! engine.fit(&x, &y).expect("Training data is valid");
//! assert_eq!(engine.predict(&x).expect("fitted"), vec![0, 0, 2, 2]);
//! ```

mod linear;
mod naive_bayes;

use crate::error::{Result, SentirError};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use linear::{LinearSVM, LogisticRegression};
pub use naive_bayes::{BernoulliNB, GaussianNB, MultinomialNB};

/// The fit/predict capability every classifier provides.
///
/// Labels are arbitrary `usize` class ids; a classifier predicts only ids
/// it saw during `fit`.
pub trait Classifier {
    /// Fits the model to a feature matrix and one label per row.
    ///
    /// # Errors
    ///
    /// Returns an error for empty data, a row/label count mismatch, fewer
    /// than two distinct classes, or values the model cannot accept.
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()>;

    /// Predicts one label per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or the feature count
    /// differs from the one seen during `fit`.
    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>>;
}

/// Which classifier a trained predictor wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassifierKind {
    /// Gaussian Naive Bayes
    GaussianNB,
    /// Multinomial Naive Bayes
    MultinomialNB,
    /// Bernoulli Naive Bayes
    BernoulliNB,
    /// Logistic regression (maximum entropy)
    LogisticRegression,
    /// Linear support vector machine
    LinearSVM,
}

impl ClassifierKind {
    /// Every kind, in a stable order.
    pub const ALL: [ClassifierKind; 5] = [
        ClassifierKind::GaussianNB,
        ClassifierKind::MultinomialNB,
        ClassifierKind::BernoulliNB,
        ClassifierKind::LogisticRegression,
        ClassifierKind::LinearSVM,
    ];

    /// Creates an unfitted engine of this kind with default hyperparameters.
    #[must_use]
    pub fn build(self) -> Engine {
        match self {
            ClassifierKind::GaussianNB => Engine::GaussianNB(GaussianNB::new()),
            ClassifierKind::MultinomialNB => Engine::MultinomialNB(MultinomialNB::new()),
            ClassifierKind::BernoulliNB => Engine::BernoulliNB(BernoulliNB::new()),
            ClassifierKind::LogisticRegression => {
                Engine::LogisticRegression(LogisticRegression::new())
            }
            ClassifierKind::LinearSVM => Engine::LinearSVM(LinearSVM::new()),
        }
    }

    /// Short name used in predictor names and cache keys.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            ClassifierKind::GaussianNB => "GaussianNB",
            ClassifierKind::MultinomialNB => "MultinomialNB",
            ClassifierKind::BernoulliNB => "BernoulliNB",
            ClassifierKind::LogisticRegression => "MaxEnt",
            ClassifierKind::LinearSVM => "SVM",
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A classifier of any supported kind, fitted or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Engine {
    /// Gaussian Naive Bayes
    GaussianNB(GaussianNB),
    /// Multinomial Naive Bayes
    MultinomialNB(MultinomialNB),
    /// Bernoulli Naive Bayes
    BernoulliNB(BernoulliNB),
    /// Logistic regression
    LogisticRegression(LogisticRegression),
    /// Linear SVM
    LinearSVM(LinearSVM),
}

impl Engine {
    /// The kind of the wrapped classifier.
    #[must_use]
    pub fn kind(&self) -> ClassifierKind {
        match self {
            Engine::GaussianNB(_) => ClassifierKind::GaussianNB,
            Engine::MultinomialNB(_) => ClassifierKind::MultinomialNB,
            Engine::BernoulliNB(_) => ClassifierKind::BernoulliNB,
            Engine::LogisticRegression(_) => ClassifierKind::LogisticRegression,
            Engine::LinearSVM(_) => ClassifierKind::LinearSVM,
        }
    }
}

impl From<ClassifierKind> for Engine {
    fn from(kind: ClassifierKind) -> Self {
        kind.build()
    }
}

impl Classifier for Engine {
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        match self {
            Engine::GaussianNB(m) => m.fit(x, y),
            Engine::MultinomialNB(m) => m.fit(x, y),
            Engine::BernoulliNB(m) => m.fit(x, y),
            Engine::LogisticRegression(m) => m.fit(x, y),
            Engine::LinearSVM(m) => m.fit(x, y),
        }
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        match self {
            Engine::GaussianNB(m) => m.predict(x),
            Engine::MultinomialNB(m) => m.predict(x),
            Engine::BernoulliNB(m) => m.predict(x),
            Engine::LogisticRegression(m) => m.predict(x),
            Engine::LinearSVM(m) => m.predict(x),
        }
    }
}

/// Validates training input and returns the sorted distinct classes.
pub(crate) fn validate_fit_input(x: &Matrix<f32>, y: &[usize]) -> Result<Vec<usize>> {
    let n_samples = x.n_rows();
    if n_samples == 0 {
        return Err("Cannot fit with empty data".into());
    }
    if y.len() != n_samples {
        return Err(SentirError::dimension_mismatch("n_samples", n_samples, y.len()));
    }

    let mut classes = y.to_vec();
    classes.sort_unstable();
    classes.dedup();

    if classes.len() < 2 {
        return Err("Need at least 2 classes".into());
    }
    Ok(classes)
}

/// Checks the feature count of a prediction matrix against the fitted one.
pub(crate) fn check_n_features(x: &Matrix<f32>, expected: usize) -> Result<()> {
    if x.n_cols() == expected {
        Ok(())
    } else {
        Err(SentirError::dimension_mismatch("n_features", expected, x.n_cols()))
    }
}

/// Index of the largest score; the first one wins on ties.
pub(crate) fn argmax(scores: &[f32]) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = idx;
        }
    }
    best
}
