//! Linear models: logistic regression and linear SVM.
//!
//! Both are binary learners at heart. With more than two classes they are
//! trained one-vs-rest: one unit per class, prediction by highest decision
//! value.

use super::{argmax, check_n_features, validate_fit_input, Classifier};
use crate::error::{Result, SentirError};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Weights and intercept of one binary decision function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct LinearUnit {
    weights: Vec<f32>,
    intercept: f32,
}

impl LinearUnit {
    fn decision(&self, row: &[f32]) -> f32 {
        self.intercept
            + row
                .iter()
                .zip(&self.weights)
                .map(|(x, w)| x * w)
                .sum::<f32>()
    }
}

/// Fitted one-vs-rest state shared by the linear models.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OneVsRest {
    classes: Vec<usize>,
    /// One unit for binary problems (positive = `classes[1]`), else one per class.
    units: Vec<LinearUnit>,
}

impl OneVsRest {
    /// Trains one binary unit per target; `train_unit` sees targets in {0, 1}.
    fn train<F>(x: &Matrix<f32>, y: &[usize], mut train_unit: F) -> Result<Self>
    where
        F: FnMut(&[bool]) -> LinearUnit,
    {
        let classes = validate_fit_input(x, y)?;
        let positives: Vec<usize> = if classes.len() == 2 {
            vec![classes[1]]
        } else {
            classes.clone()
        };

        let units = positives
            .iter()
            .map(|&positive| {
                let targets: Vec<bool> = y.iter().map(|&label| label == positive).collect();
                train_unit(&targets)
            })
            .collect();

        Ok(Self { classes, units })
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        check_n_features(x, self.units[0].weights.len())?;
        Ok(x
            .rows()
            .map(|row| {
                if let [unit] = self.units.as_slice() {
                    self.classes[usize::from(unit.decision(row) >= 0.0)]
                } else {
                    let scores: Vec<f32> = self.units.iter().map(|u| u.decision(row)).collect();
                    self.classes[argmax(&scores)]
                }
            })
            .collect())
    }
}

/// Logistic Regression classifier (maximum entropy).
///
/// Each binary unit minimizes log loss with batch gradient descent. The
/// sign of the decision value decides between a unit's two outcomes.
///
/// # Example
///
/// ```
/// use sentir::classification::{Classifier, LogisticRegression};
/// use sentir::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,
///     0.0, 1.0,
///     1.0, 0.0,
///     1.0, 1.0,
/// ]).expect("4x2 matrix with 8 values");
/// let y = vec![0, 0, 1, 1];
///
/// let mut model = LogisticRegression::new().with_max_iter(500);
/// model.fit(&x, &y).expect("Valid training data");
/// assert_eq!(model.predict(&x).expect("fitted"), vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    learning_rate: f32,
    max_iter: usize,
    tol: f32,
    fitted: Option<OneVsRest>,
}

impl LogisticRegression {
    /// Creates a model with learning rate `0.5`, 200 iterations and tolerance `1e-4`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            learning_rate: 0.5,
            max_iter: 200,
            tol: 1e-4,
            fitted: None,
        }
    }

    /// Sets the gradient descent step size.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of gradient descent iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance on the gradient norm.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Logistic function `1 / (1 + e^-z)`.
    #[must_use]
    pub fn sigmoid(z: f32) -> f32 {
        1.0 / (1.0 + (-z).exp())
    }

    fn train_unit(&self, x: &Matrix<f32>, targets: &[bool]) -> LinearUnit {
        let (n_samples, n_features) = x.shape();
        let mut unit = LinearUnit {
            weights: vec![0.0; n_features],
            intercept: 0.0,
        };

        for _ in 0..self.max_iter {
            let mut grad_w = vec![0.0_f32; n_features];
            let mut grad_b = 0.0_f32;

            for (row, &target) in x.rows().zip(targets) {
                let error = Self::sigmoid(unit.decision(row)) - f32::from(u8::from(target));
                for (g, &value) in grad_w.iter_mut().zip(row) {
                    *g += error * value;
                }
                grad_b += error;
            }

            let scale = self.learning_rate / n_samples as f32;
            let mut norm = grad_b * grad_b;
            for (w, g) in unit.weights.iter_mut().zip(&grad_w) {
                *w -= scale * g;
                norm += g * g;
            }
            unit.intercept -= scale * grad_b;

            if norm.sqrt() / (n_samples as f32) < self.tol {
                break;
            }
        }
        unit
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LogisticRegression {
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        if self.learning_rate <= 0.0 {
            return Err(SentirError::InvalidHyperparameter {
                param: "learning_rate".to_string(),
                value: self.learning_rate.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        let fitted = OneVsRest::train(x, y, |targets| self.train_unit(x, targets))?;
        self.fitted = Some(fitted);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        self.fitted
            .as_ref()
            .ok_or_else(|| SentirError::not_fitted("LogisticRegression"))?
            .predict(x)
    }
}

/// Linear Support Vector Machine classifier.
///
/// Each binary unit minimizes the regularized hinge loss
/// ```text
/// min  λ||w||² + (1/n) Σᵢ max(0, 1 - yᵢ(w·xᵢ + b))
/// ```
/// by subgradient descent with a decaying step, where λ = 1/(2nC).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSVM {
    /// Larger C means less regularization
    c: f32,
    learning_rate: f32,
    max_iter: usize,
    tol: f32,
    fitted: Option<OneVsRest>,
}

impl LinearSVM {
    /// Creates a model with `C = 1.0`, learning rate `0.1`, 100 epochs and tolerance `1e-4`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            c: 1.0,
            learning_rate: 0.1,
            max_iter: 100,
            tol: 1e-4,
            fitted: None,
        }
    }

    /// Sets the regularization parameter C.
    #[must_use]
    pub fn with_c(mut self, c: f32) -> Self {
        self.c = c;
        self
    }

    /// Sets the initial subgradient step size.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of epochs.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance on the per-epoch weight change.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    fn train_unit(&self, x: &Matrix<f32>, targets: &[bool]) -> LinearUnit {
        let n_samples = x.n_rows();
        let mut unit = LinearUnit {
            weights: vec![0.0; x.n_cols()],
            intercept: 0.0,
        };
        let lambda = 1.0 / (2.0 * n_samples as f32 * self.c);

        for epoch in 0..self.max_iter {
            let eta = self.learning_rate / (1.0 + epoch as f32 * 0.01);
            let prev = unit.clone();

            for (row, &target) in x.rows().zip(targets) {
                let y_i = if target { 1.0 } else { -1.0 };
                let margin = y_i * unit.decision(row);

                if margin < 1.0 {
                    for (w, &value) in unit.weights.iter_mut().zip(row) {
                        *w -= eta * (2.0 * lambda * *w - y_i * value);
                    }
                    unit.intercept += eta * y_i;
                } else {
                    for w in &mut unit.weights {
                        *w -= eta * 2.0 * lambda * *w;
                    }
                }
            }

            let change: f32 = unit
                .weights
                .iter()
                .zip(&prev.weights)
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f32>()
                + (unit.intercept - prev.intercept).powi(2);
            if change.sqrt() < self.tol {
                break;
            }
        }
        unit
    }
}

impl Default for LinearSVM {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LinearSVM {
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        if self.c <= 0.0 {
            return Err(SentirError::InvalidHyperparameter {
                param: "C".to_string(),
                value: self.c.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        let fitted = OneVsRest::train(x, y, |targets| self.train_unit(x, targets))?;
        self.fitted = Some(fitted);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        self.fitted
            .as_ref()
            .ok_or_else(|| SentirError::not_fitted("LinearSVM"))?
            .predict(x)
    }
}
