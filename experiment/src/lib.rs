//! Train a ridge regression model on a tabular dataset, score it on a held-out
//! split and save it.
//!
//! ```no_run
//! use skridge_experiment::{pipeline, ExperimentConfig};
//!
//! # fn main() -> skridge_experiment::Result<()> {
//! let report = pipeline::run(&ExperimentConfig::default())?;
//! println!("mse = {:?}", report.metrics.mse());
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
pub mod evaluate;
pub mod persist;
pub mod pipeline;

pub use config::ExperimentConfig;
pub use error::{ExperimentError, Result};
pub use evaluate::model_metrics;
pub use persist::{load_model, save_model, MODEL_FILE_NAME};
pub use pipeline::{run, run_on, RunReport};
