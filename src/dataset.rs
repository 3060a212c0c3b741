//! Labelled tabular data
//!
//! A `Dataset` pairs a two-dimensional matrix of records (one row per sample,
//! one column per feature) with a one-dimensional array of numeric targets.
//! Row counts always agree; that is checked once, at construction time, so the
//! rest of the crate can index both arrays with the same row number.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Array2<f64>,
    pub targets: Array1<f64>,
    feature_names: Vec<String>,
}

impl Dataset {
    /// Create a dataset from records and targets with matching row counts.
    pub fn new(records: Array2<f64>, targets: Array1<f64>) -> Result<Dataset> {
        if records.nrows() != targets.len() {
            return Err(Error::dimension_mismatch(
                "targets",
                records.nrows(),
                targets.len(),
            ));
        }

        Ok(Dataset {
            records,
            targets,
            feature_names: Vec::new(),
        })
    }

    /// Attach one name per feature column.
    pub fn with_feature_names<I, S>(mut self, names: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.nfeatures() {
            return Err(Error::dimension_mismatch(
                "feature names",
                self.nfeatures(),
                names.len(),
            ));
        }
        self.feature_names = names;
        Ok(self)
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nsamples() == 0
    }

    pub fn records(&self) -> ArrayView2<'_, f64> {
        self.records.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }

    /// Feature names, or `feat[i]` placeholders when none were attached.
    pub fn feature_names(&self) -> Vec<String> {
        if self.feature_names.is_empty() {
            (0..self.nfeatures()).map(|i| format!("feat[{}]", i)).collect()
        } else {
            self.feature_names.clone()
        }
    }

    /// Copy the given rows, in the given order, into a new dataset.
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        let ncols = self.nfeatures();
        let records = Array2::from_shape_fn((indices.len(), ncols), |(i, j)| {
            self.records[[indices[i], j]]
        });
        let targets = indices.iter().map(|&i| self.targets[i]).collect();

        Dataset {
            records,
            targets,
            feature_names: self.feature_names.clone(),
        }
    }
}
