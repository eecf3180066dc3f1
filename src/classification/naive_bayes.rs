//! Naive Bayes classifiers: Gaussian, Multinomial and Bernoulli.

use super::{argmax, check_n_features, validate_fit_input, Classifier};
use crate::error::{Result, SentirError};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Row indices per class, in class order.
fn class_members(y: &[usize], classes: &[usize]) -> Vec<Vec<usize>> {
    classes
        .iter()
        .map(|&class_label| {
            y.iter()
                .enumerate()
                .filter_map(|(i, &label)| (label == class_label).then_some(i))
                .collect()
        })
        .collect()
}

/// Gaussian Naive Bayes classifier.
///
/// Assumes features are conditionally independent given the class and
/// normally distributed within each class. Suited to real-valued lexicon
/// score features.
///
/// # Example
///
/// ```
/// use sentir::classification::{Classifier, GaussianNB};
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
/// let mut model = GaussianNB::new();
/// model.fit(&x, &y).expect("Valid training data");
/// let predictions = model.predict(&x).expect("Model is fitted");
/// assert_eq!(predictions.len(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianNB {
    /// Class prior probabilities P(y=c)
    class_priors: Option<Vec<f32>>,
    /// Feature means per class: means[class][feature]
    means: Option<Vec<Vec<f32>>>,
    /// Feature variances per class: variances[class][feature]
    variances: Option<Vec<Vec<f32>>>,
    /// Class labels
    classes: Option<Vec<usize>>,
    /// Added to every variance to avoid division by zero
    var_smoothing: f32,
}

impl GaussianNB {
    /// Creates a new Gaussian Naive Bayes classifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            class_priors: None,
            means: None,
            variances: None,
            classes: None,
            var_smoothing: 1e-9,
        }
    }

    /// Sets the variance smoothing parameter.
    #[must_use]
    pub fn with_var_smoothing(mut self, var_smoothing: f32) -> Self {
        self.var_smoothing = var_smoothing;
        self
    }

    /// Unnormalized log posterior of every class for one row.
    fn joint_log_likelihood(&self, row: &[f32]) -> Result<Vec<f32>> {
        let means = self
            .means
            .as_ref()
            .ok_or_else(|| SentirError::not_fitted("GaussianNB"))?;
        let variances = self
            .variances
            .as_ref()
            .ok_or_else(|| SentirError::not_fitted("GaussianNB"))?;
        let priors = self
            .class_priors
            .as_ref()
            .ok_or_else(|| SentirError::not_fitted("GaussianNB"))?;

        let scores = priors
            .iter()
            .zip(means.iter().zip(variances.iter()))
            .map(|(prior, (class_means, class_vars))| {
                let log_likelihood: f32 = row
                    .iter()
                    .zip(class_means.iter().zip(class_vars.iter()))
                    .map(|(&x_val, (&mean, &variance))| {
                        // Log of Gaussian PDF: -0.5 * log(2π*σ²) - (x-μ)² / (2σ²)
                        let diff = x_val - mean;
                        -0.5 * (2.0 * std::f32::consts::PI * variance).ln()
                            - (diff * diff) / (2.0 * variance)
                    })
                    .sum();
                prior.ln() + log_likelihood
            })
            .collect();
        Ok(scores)
    }
}

impl Default for GaussianNB {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for GaussianNB {
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        let classes = validate_fit_input(x, y)?;
        let (n_samples, n_features) = x.shape();

        let mut class_priors = Vec::with_capacity(classes.len());
        let mut means = Vec::with_capacity(classes.len());
        let mut variances = Vec::with_capacity(classes.len());

        for members in class_members(y, &classes) {
            let n_class = members.len() as f32;
            class_priors.push(n_class / n_samples as f32);

            let mut class_means = vec![0.0; n_features];
            for &i in &members {
                for (mean, &value) in class_means.iter_mut().zip(x.row(i)) {
                    *mean += value;
                }
            }
            for mean in &mut class_means {
                *mean /= n_class;
            }

            let mut class_vars = vec![0.0; n_features];
            for &i in &members {
                for ((var, &value), &mean) in class_vars.iter_mut().zip(x.row(i)).zip(&class_means)
                {
                    let diff = value - mean;
                    *var += diff * diff;
                }
            }
            for var in &mut class_vars {
                *var = *var / n_class + self.var_smoothing;
            }

            means.push(class_means);
            variances.push(class_vars);
        }

        self.class_priors = Some(class_priors);
        self.means = Some(means);
        self.variances = Some(variances);
        self.classes = Some(classes);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let classes = self
            .classes
            .as_ref()
            .ok_or_else(|| SentirError::not_fitted("GaussianNB"))?;
        let n_features = self.means.as_ref().map_or(0, |m| m[0].len());
        check_n_features(x, n_features)?;

        x.rows()
            .map(|row| Ok(classes[argmax(&self.joint_log_likelihood(row)?)]))
            .collect()
    }
}

/// Multinomial Naive Bayes classifier for count or presence features.
///
/// Feature log probabilities use additive (Laplace/Lidstone) smoothing:
/// `P(x_j|c) = (N_cj + alpha) / (N_c + alpha * n_features)`.
///
/// Features must be non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNB {
    alpha: f32,
    class_log_prior: Option<Vec<f32>>,
    feature_log_prob: Option<Vec<Vec<f32>>>,
    classes: Option<Vec<usize>>,
}

impl MultinomialNB {
    /// Creates a classifier with `alpha = 1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            class_log_prior: None,
            feature_log_prob: None,
            classes: None,
        }
    }

    /// Sets the additive smoothing parameter.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for MultinomialNB {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MultinomialNB {
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        if self.alpha < 0.0 {
            return Err(SentirError::InvalidHyperparameter {
                param: "alpha".to_string(),
                value: self.alpha.to_string(),
                constraint: ">= 0".to_string(),
            });
        }
        let classes = validate_fit_input(x, y)?;
        if x.min_value().is_some_and(|v| v < 0.0) {
            return Err("Negative values in data passed to MultinomialNB".into());
        }
        let (n_samples, n_features) = x.shape();

        let mut class_log_prior = Vec::with_capacity(classes.len());
        let mut feature_log_prob = Vec::with_capacity(classes.len());

        for members in class_members(y, &classes) {
            class_log_prior.push((members.len() as f32 / n_samples as f32).ln());

            let mut counts = vec![0.0_f32; n_features];
            for &i in &members {
                for (count, &value) in counts.iter_mut().zip(x.row(i)) {
                    *count += value;
                }
            }
            let total: f32 = counts.iter().sum::<f32>() + self.alpha * n_features as f32;
            feature_log_prob.push(
                counts
                    .iter()
                    .map(|&count| ((count + self.alpha) / total).ln())
                    .collect(),
            );
        }

        self.class_log_prior = Some(class_log_prior);
        self.feature_log_prob = Some(feature_log_prob);
        self.classes = Some(classes);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let (Some(classes), Some(priors), Some(log_probs)) = (
            self.classes.as_ref(),
            self.class_log_prior.as_ref(),
            self.feature_log_prob.as_ref(),
        ) else {
            return Err(SentirError::not_fitted("MultinomialNB"));
        };
        check_n_features(x, log_probs[0].len())?;

        Ok(x
            .rows()
            .map(|row| {
                let scores: Vec<f32> = priors
                    .iter()
                    .zip(log_probs)
                    .map(|(prior, class_log_probs)| {
                        prior
                            + row
                                .iter()
                                .zip(class_log_probs)
                                .map(|(v, lp)| v * lp)
                                .sum::<f32>()
                    })
                    .collect();
                classes[argmax(&scores)]
            })
            .collect())
    }
}

/// Bernoulli Naive Bayes classifier for binary features.
///
/// Values above the binarize threshold count as present. Unlike the
/// multinomial model, absent features contribute evidence too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BernoulliNB {
    alpha: f32,
    binarize: f32,
    class_log_prior: Option<Vec<f32>>,
    /// (log p, log (1 - p)) per class and feature
    feature_log_prob: Option<Vec<Vec<(f32, f32)>>>,
    classes: Option<Vec<usize>>,
}

impl BernoulliNB {
    /// Creates a classifier with `alpha = 1.0` and threshold `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            binarize: 0.0,
            class_log_prior: None,
            feature_log_prob: None,
            classes: None,
        }
    }

    /// Sets the additive smoothing parameter.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the threshold above which a feature counts as present.
    #[must_use]
    pub fn with_binarize(mut self, threshold: f32) -> Self {
        self.binarize = threshold;
        self
    }
}

impl Default for BernoulliNB {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for BernoulliNB {
    fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        if self.alpha <= 0.0 {
            return Err(SentirError::InvalidHyperparameter {
                param: "alpha".to_string(),
                value: self.alpha.to_string(),
                constraint: "> 0".to_string(),
            });
        }
        let classes = validate_fit_input(x, y)?;
        let (n_samples, n_features) = x.shape();

        let mut class_log_prior = Vec::with_capacity(classes.len());
        let mut feature_log_prob = Vec::with_capacity(classes.len());

        for members in class_members(y, &classes) {
            let n_class = members.len() as f32;
            class_log_prior.push((n_class / n_samples as f32).ln());

            let mut present = vec![0.0_f32; n_features];
            for &i in &members {
                for (count, &value) in present.iter_mut().zip(x.row(i)) {
                    if value > self.binarize {
                        *count += 1.0;
                    }
                }
            }
            feature_log_prob.push(
                present
                    .iter()
                    .map(|&count| {
                        let p = (count + self.alpha) / (n_class + 2.0 * self.alpha);
                        (p.ln(), (1.0 - p).ln())
                    })
                    .collect(),
            );
        }

        self.class_log_prior = Some(class_log_prior);
        self.feature_log_prob = Some(feature_log_prob);
        self.classes = Some(classes);
        Ok(())
    }

    fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        let (Some(classes), Some(priors), Some(log_probs)) = (
            self.classes.as_ref(),
            self.class_log_prior.as_ref(),
            self.feature_log_prob.as_ref(),
        ) else {
            return Err(SentirError::not_fitted("BernoulliNB"));
        };
        check_n_features(x, log_probs[0].len())?;

        Ok(x
            .rows()
            .map(|row| {
                let scores: Vec<f32> = priors
                    .iter()
                    .zip(log_probs)
                    .map(|(prior, class_log_probs)| {
                        prior
                            + row
                                .iter()
                                .zip(class_log_probs)
                                .map(|(&v, &(lp, lnp))| if v > self.binarize { lp } else { lnp })
                                .sum::<f32>()
                    })
                    .collect();
                classes[argmax(&scores)]
            })
            .collect())
    }
}
