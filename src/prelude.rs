//! skridge prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::dataset::Dataset;

#[doc(no_inline)]
pub use crate::hyperparams::{HyperparameterSet, ParamValue};

#[doc(no_inline)]
pub use crate::split::{train_test_split, Split, Splitter};

#[doc(no_inline)]
pub use crate::metrics_regression::{Metrics, Regression};
