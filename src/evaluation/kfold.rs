use crate::corpus::{Corpus, LabeledExample};
use crate::error::{Result, SentirError};

/// One train/test partition of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Every example outside the test slice
    pub training: Vec<LabeledExample>,
    /// The test slice of every label
    pub testing: Vec<LabeledExample>,
}

/// Label-stratified K-Fold splitter.
///
/// Fold `i` of `k` tests on the `floor(i*n/k)..floor((i+1)*n/k)` slice of
/// each label's examples and trains on the rest. Examples are not
/// shuffled; every example is tested in exactly one fold.
///
/// # Examples
///
/// ```
/// use sentir::corpus::Corpus;
/// use sentir::evaluation::StratifiedKFold;
///
/// let mut corpus = Corpus::new();
/// for i in 0..4 {
///     corpus.push("positive", format!("good {i}"));
///     corpus.push("negative", format!("bad {i}"));
/// }
///
/// let fold = StratifiedKFold::new(2).split(&corpus, 1).expect("valid fold");
/// assert_eq!(fold.testing.len(), 4);
/// assert_eq!(fold.testing[0].text, "bad 2");
/// assert_eq!(fold.training.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StratifiedKFold {
    n_splits: usize,
}

impl StratifiedKFold {
    /// Creates a splitter with `n_splits` folds.
    #[must_use]
    pub fn new(n_splits: usize) -> Self {
        Self { n_splits }
    }

    /// Number of folds.
    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Fold `fold` of the corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_splits < 2` or `fold >= n_splits`.
    pub fn split(&self, corpus: &Corpus, fold: usize) -> Result<Fold> {
        self.validate(fold)?;

        let k = self.n_splits;
        let mut training = Vec::new();
        let mut testing = Vec::new();
        for (label, texts) in corpus.iter() {
            let n = texts.len();
            let start = fold * n / k;
            let end = (fold + 1) * n / k;
            let example = |text: &String| LabeledExample::new(text.clone(), label);

            training.extend(texts[..start].iter().map(example));
            testing.extend(texts[start..end].iter().map(example));
            training.extend(texts[end..].iter().map(example));
        }
        Ok(Fold { training, testing })
    }

    /// Every fold, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_splits < 2`.
    pub fn splits(&self, corpus: &Corpus) -> Result<Vec<Fold>> {
        (0..self.n_splits)
            .map(|fold| self.split(corpus, fold))
            .collect()
    }

    fn validate(&self, fold: usize) -> Result<()> {
        if self.n_splits < 2 {
            return Err(SentirError::InvalidHyperparameter {
                param: "n_splits".to_string(),
                value: self.n_splits.to_string(),
                constraint: ">= 2".to_string(),
            });
        }
        if fold >= self.n_splits {
            return Err(SentirError::InvalidHyperparameter {
                param: "fold".to_string(),
                value: fold.to_string(),
                constraint: format!("< {}", self.n_splits),
            });
        }
        Ok(())
    }
}
