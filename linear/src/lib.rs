//! # Ridge regression
//!
//! `skridge-linear` fits a linear model with an L2 penalty on its coefficients:
//!
//! ```text
//! minimise  ||y - X w - b||² + alpha * ||w||²
//! ```
//!
//! The intercept `b` is not penalised. Fitting centres the training data, forms
//! the regularised normal equations and solves them with a Cholesky
//! factorisation, so the result depends only on the data and the parameters.
//!
//! ```no_run
//! use skridge::prelude::*;
//! use skridge_linear::Ridge;
//!
//! # fn run(dataset: &Dataset) -> skridge::Result<()> {
//! let model = Ridge::new(0.5).fit(dataset)?;
//! let predictions = model.predict(dataset.records())?;
//! # Ok(())
//! # }
//! ```

mod params;
mod ridge;

pub use params::{RidgeParams, ALPHA, FIT_INTERCEPT};
pub use ridge::{FittedRidge, Ridge};
