//! Error types for sentir operations.
//!
//! A single error enum covers classifier fitting, data set parsing,
//! cache I/O and label handling.

use std::fmt;

/// Main error type for sentir operations.
///
/// # Examples
///
/// ```
/// use sentir::error::SentirError;
///
/// let err = SentirError::UnknownLabel {
///     label: "bored".to_string(),
/// };
/// assert!(err.to_string().contains("bored"));
/// ```
#[derive(Debug)]
pub enum SentirError {
    /// Feature or sample dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A model or extractor was used before it was trained.
    NotFitted {
        /// Name of the component
        component: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Label outside the closed label set of the active mode.
    UnknownLabel {
        /// The offending label
        label: String,
    },

    /// A data set or lexicon file could not be parsed.
    Parse {
        /// File or data set name
        source_name: String,
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for SentirError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentirError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            SentirError::NotFitted { component } => {
                write!(f, "{component} is not fitted, call train() first")
            }
            SentirError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            SentirError::UnknownLabel { label } => write!(f, "Unknown label: {label}"),
            SentirError::Parse {
                source_name,
                line,
                message,
            } => write!(f, "Parse error in {source_name} at line {line}: {message}"),
            SentirError::Io(e) => write!(f, "I/O error: {e}"),
            SentirError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            SentirError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SentirError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentirError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SentirError {
    fn from(err: std::io::Error) -> Self {
        SentirError::Io(err)
    }
}

impl From<&str> for SentirError {
    fn from(msg: &str) -> Self {
        SentirError::Other(msg.to_string())
    }
}

impl From<String> for SentirError {
    fn from(msg: String) -> Self {
        SentirError::Other(msg)
    }
}

impl SentirError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }

    /// Create a not-fitted error for a named component
    #[must_use]
    pub fn not_fitted(component: &str) -> Self {
        Self::NotFitted {
            component: component.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, SentirError>;
