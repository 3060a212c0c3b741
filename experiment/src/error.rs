use std::io;

use skridge_datasets::LoadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExperimentError>;

/// Anything that aborts a run.
#[derive(Error, Debug)]
pub enum ExperimentError {
    #[error(transparent)]
    Core(#[from] skridge::Error),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("invalid configuration `{key}`: {reason}")]
    Config { key: String, reason: String },
    #[error("i/o: {0}")]
    Io(#[from] io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExperimentError {
    pub(crate) fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        ExperimentError::Config {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
