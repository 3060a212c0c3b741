//! `skridge-datasets` provides the external data sources of the pipeline.
//!
//! Tabular files are read with [`from_csv`]: a header row names the columns, one
//! of them (by convention `Y`) holds the target and every other column becomes a
//! feature. For experiments without a file at hand, [`make_regression`] draws a
//! seeded synthetic problem and [`diabetes_like`] mimics the shape of the
//! classic diabetes table (442 samples, 10 features).

mod error;
mod generate;
mod tabular;

pub use error::{LoadError, Result};
pub use generate::{diabetes_like, make_regression, DIABETES_FEATURES};
pub use tabular::{from_csv, from_reader, DEFAULT_TARGET};
