//! `skridge` provides the building blocks of a small, reproducible regression
//! experiment with Rust.
//!
//! Kin in spirit to Python's `scikit-learn`, it focuses on the everyday loop of
//! splitting a labelled table, fitting a model and scoring it on held-out data.
//! Model implementations live in the sibling crates (`skridge-linear`); this
//! crate holds the shared dataset type, the splitter, the error taxonomy and the
//! regression metrics.
//!

pub mod dataset;
pub mod error;
pub mod hyperparams;
mod metrics_regression;
pub mod prelude;
pub mod split;
pub mod traits;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use hyperparams::{HyperparameterSet, ParamValue};
pub use split::{train_test_split, Split, Splitter, DEFAULT_TEST_SIZE};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::{Metrics, Regression};
}
