//! Load → split → train → evaluate → persist, as one pass.
//!
//! Every stage runs to completion before the next starts and any error aborts
//! the run. The model file is only written once all earlier stages succeeded.

use std::path::PathBuf;

use log::{info, warn};
use serde::Serialize;
use skridge::metrics::Metrics;
use skridge::prelude::*;
use skridge_linear::{FittedRidge, Ridge};

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::evaluate::model_metrics;
use crate::persist::save_model;

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub n_train: usize,
    pub n_test: usize,
    pub metrics: Metrics,
    pub model_path: PathBuf,
    #[serde(skip)]
    pub model: FittedRidge,
}

/// Read the configured CSV file, or draw the synthetic stand-in.
pub fn load_dataset(config: &ExperimentConfig) -> Result<Dataset> {
    let dataset = match &config.data_path {
        Some(path) => {
            info!("loading {}", path.display());
            skridge_datasets::from_csv(path, &config.target_column)?
        }
        None => {
            warn!("no data file configured, using synthetic diabetes-shaped data");
            skridge_datasets::diabetes_like(config.seed)?
        }
    };
    info!(
        "dataset: {} samples x {} features",
        dataset.nsamples(),
        dataset.nfeatures()
    );
    Ok(dataset)
}

pub fn split_data(dataset: &Dataset, config: &ExperimentConfig) -> skridge::Result<Split> {
    let split = config.splitter().split(dataset)?;
    info!(
        "split (seed {}, test_size {}): {} train / {} test",
        config.seed,
        config.test_size,
        split.train.nsamples(),
        split.test.nsamples()
    );
    Ok(split)
}

/// Fit ridge regression on the training side of `split`.
pub fn train_model(
    split: &Split,
    hyperparameters: &HyperparameterSet,
) -> skridge::Result<FittedRidge> {
    info!("training ridge with {}", hyperparameters);
    Ridge::from_hyperparameters(hyperparameters.clone()).fit(&split.train)
}

/// Run the whole pipeline from configuration.
pub fn run(config: &ExperimentConfig) -> Result<RunReport> {
    let dataset = load_dataset(config)?;
    run_on(&dataset, config)
}

/// Run every stage after loading on an in-memory dataset.
pub fn run_on(dataset: &Dataset, config: &ExperimentConfig) -> Result<RunReport> {
    let split = split_data(dataset, config)?;
    let model = train_model(&split, &config.hyperparameters)?;
    info!("model: {}", model);

    let metrics = model_metrics(&model, &split.test)?;
    for (name, value) in metrics.iter() {
        info!("{} = {}", name, value);
    }

    save_model(&model, &config.model_path)?;
    info!("saved model to {}", config.model_path.display());

    Ok(RunReport {
        n_train: split.train.nsamples(),
        n_test: split.test.nsamples(),
        metrics,
        model_path: config.model_path.clone(),
        model,
    })
}
