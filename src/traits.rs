//! Provide traits for different classes of algorithms
//!

use ndarray::{Array1, ArrayView2};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. The
/// hyperparameters stay with the algorithm; the returned object owns everything learned from the
/// data and can be moved around independently of both.
pub trait Fit {
    type Object;

    fn fit(&self, dataset: &Dataset) -> Result<Self::Object>;
}

/// Predict with a fitted model
///
/// Implementors only provide the raw row-wise prediction; `predict` checks the feature count
/// before handing the records over.
pub trait Predict {
    /// Number of feature columns the model was fitted on.
    fn nfeatures(&self) -> usize;

    /// Predict one target per row. `records` is guaranteed to have `nfeatures()` columns.
    fn predict_records(&self, records: ArrayView2<'_, f64>) -> Array1<f64>;

    fn predict(&self, records: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if records.ncols() != self.nfeatures() {
            return Err(Error::dimension_mismatch(
                "features",
                self.nfeatures(),
                records.ncols(),
            ));
        }
        Ok(self.predict_records(records))
    }
}
