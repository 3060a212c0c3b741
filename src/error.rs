//! Error types shared by every stage of the pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed or empty dataset, or a bad split fraction.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Unsupported or out-of-domain training parameter.
    #[error("invalid hyperparameter `{name}`: {reason}")]
    InvalidHyperparameter { name: String, reason: String },
    /// Shapes disagree between two arrays, or between a model and its input.
    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("numerical failure: {0}")]
    Numerical(String),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Shortcut used by trainers when validating a parameter value.
    pub fn invalid_hyperparameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidHyperparameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Error::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }
}
