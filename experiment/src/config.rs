//! Experiment configuration
//!
//! Values are layered: built-in defaults, then an optional JSON file named by
//! `SKRIDGE_CONFIG`, then one environment variable per field.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skridge::{HyperparameterSet, Splitter, DEFAULT_TEST_SIZE};
use skridge_datasets::DEFAULT_TARGET;
use skridge_linear::ALPHA;

use crate::error::{ExperimentError, Result};
use crate::persist::MODEL_FILE_NAME;

pub const ENV_CONFIG: &str = "SKRIDGE_CONFIG";
pub const ENV_DATA: &str = "SKRIDGE_DATA";
pub const ENV_TARGET: &str = "SKRIDGE_TARGET";
pub const ENV_SEED: &str = "SKRIDGE_SEED";
pub const ENV_TEST_SIZE: &str = "SKRIDGE_TEST_SIZE";
pub const ENV_ALPHA: &str = "SKRIDGE_ALPHA";
pub const ENV_MODEL_PATH: &str = "SKRIDGE_MODEL_PATH";

/// Everything one run of the pipeline needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// CSV file to train on. Synthetic diabetes-shaped data when unset.
    pub data_path: Option<PathBuf>,
    /// Name of the label column in `data_path`.
    pub target_column: String,
    pub test_size: f64,
    pub seed: u64,
    /// Passed to the trainer untouched; validated when the model is fitted.
    pub hyperparameters: HyperparameterSet,
    /// Where the fitted model is written, overwritten on every run.
    pub model_path: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            data_path: None,
            target_column: DEFAULT_TARGET.to_string(),
            test_size: DEFAULT_TEST_SIZE,
            seed: 0,
            hyperparameters: HyperparameterSet::new().with(ALPHA, 0.5),
            model_path: PathBuf::from(MODEL_FILE_NAME),
        }
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ExperimentError::config(key, format!("`{}`: {}", value, e)))
}

impl ExperimentConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG) {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        if let Some(v) = lookup(ENV_DATA) {
            config.data_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup(ENV_TARGET) {
            config.target_column = v;
        }
        if let Some(v) = lookup(ENV_SEED) {
            config.seed = parse(ENV_SEED, &v)?;
        }
        if let Some(v) = lookup(ENV_TEST_SIZE) {
            config.test_size = parse(ENV_TEST_SIZE, &v)?;
        }
        if let Some(v) = lookup(ENV_ALPHA) {
            let alpha: f64 = parse(ENV_ALPHA, &v)?;
            config.hyperparameters.insert(ALPHA, alpha);
        }
        if let Some(v) = lookup(ENV_MODEL_PATH) {
            config.model_path = PathBuf::from(v);
        }

        Ok(config)
    }

    pub fn splitter(&self) -> Splitter {
        Splitter::new().test_size(self.test_size).seed(self.seed)
    }
}
