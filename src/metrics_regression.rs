//! Common metrics for regression
//!
//! This module implements common comparison metrics for continuous variables.

use std::collections::btree_map::{self, BTreeMap};

use ndarray::{ArrayBase, ArrayView1, Data, Ix1};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn check(prediction: usize, truth: usize) -> Result<()> {
    if prediction != truth {
        return Err(Error::dimension_mismatch("predictions", truth, prediction));
    }
    if truth == 0 {
        return Err(Error::invalid_input("cannot score an empty set of predictions"));
    }
    Ok(())
}

/// Regression metrics trait
///
/// `self` holds the predictions, `compare_to` the ground truth.
pub trait Regression {
    /// Maximal absolute error between two continuous variables
    fn max_error(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64>;
    /// Mean absolute error between two continuous variables
    fn mean_absolute_error(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64>;
    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64>;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable
    ///
    /// Fails with [`Error::Numerical`] when the ground truth has zero variance.
    fn r2(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64>;
}

impl<S: Data<Elem = f64>> Regression for ArrayBase<S, Ix1> {
    fn max_error(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64> {
        check(self.len(), compare_to.len())?;

        Ok(self
            .iter()
            .zip(compare_to.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }

    fn mean_absolute_error(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64> {
        check(self.len(), compare_to.len())?;

        let total: f64 = self
            .iter()
            .zip(compare_to.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        Ok(total / self.len() as f64)
    }

    fn mean_squared_error(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64> {
        check(self.len(), compare_to.len())?;

        let total: f64 = self
            .iter()
            .zip(compare_to.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        Ok(total / self.len() as f64)
    }

    fn r2(&self, compare_to: ArrayView1<'_, f64>) -> Result<f64> {
        check(self.len(), compare_to.len())?;

        let mean = compare_to.sum() / compare_to.len() as f64;
        let ss_tot: f64 = compare_to.iter().map(|v| (v - mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return Err(Error::Numerical(
                "r2 is undefined for a constant target".to_string(),
            ));
        }
        let ss_res: f64 = self
            .iter()
            .zip(compare_to.iter())
            .map(|(a, b)| (b - a).powi(2))
            .sum();

        Ok(1.0 - ss_res / ss_tot)
    }
}

/// Named scalar scores of a fitted model, e.g. `{"mse": 3021.7}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, f64>);

impl Metrics {
    pub fn new() -> Metrics {
        Metrics::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Mean squared error, if recorded.
    pub fn mse(&self) -> Option<f64> {
        self.get("mse")
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, f64> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_same() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];

        assert_abs_diff_eq!(a.max_error(a.view()).unwrap(), 0.0);
        assert_abs_diff_eq!(a.mean_absolute_error(a.view()).unwrap(), 0.0);
        assert_abs_diff_eq!(a.mean_squared_error(a.view()).unwrap(), 0.0);
        assert_abs_diff_eq!(a.r2(a.view()).unwrap(), 1.0);
    }

    #[test]
    fn test_max_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.3, 0.2, 0.5, 0.7];

        assert_abs_diff_eq!(a.max_error(b.view()).unwrap(), 0.3, epsilon = 1e-5);
    }

    #[test]
    fn test_mean_absolute_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.4, 0.3, 0.2, 0.1, 0.0];

        assert_abs_diff_eq!(a.mean_absolute_error(b.view()).unwrap(), 0.24, epsilon = 1e-5);
    }

    #[test]
    fn test_mean_squared_error() {
        let a = array![0.0, 1.0, 2.0, 3.0, 4.0];
        let b = array![4.0, 3.0, 2.0, 1.0, 0.0];

        assert_abs_diff_eq!(a.mean_squared_error(b.view()).unwrap(), 8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_r2() {
        let truth = array![1.0, 2.0, 3.0, 4.0];
        let prediction = array![1.5, 2.0, 2.5, 4.0];

        // ss_res = 0.5, ss_tot = 5.0
        assert_abs_diff_eq!(prediction.r2(truth.view()).unwrap(), 0.9, epsilon = 1e-10);
    }

    #[test]
    fn r2_of_constant_target_is_an_error() {
        let truth = array![2.0, 2.0, 2.0];
        let prediction = array![1.0, 2.0, 3.0];

        assert!(matches!(
            prediction.r2(truth.view()),
            Err(Error::Numerical(_))
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let a = array![0.0, 1.0];
        let b = array![0.0, 1.0, 2.0];

        assert_eq!(
            a.mean_squared_error(b.view()).unwrap_err(),
            Error::dimension_mismatch("predictions", 3, 2)
        );
    }

    #[test]
    fn empty_predictions_are_rejected() {
        let a = ndarray::Array1::<f64>::zeros(0);

        assert!(matches!(
            a.mean_squared_error(a.view()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn metrics_serialize_as_flat_map() {
        let mut metrics = Metrics::new();
        metrics.insert("mse", 2.5);

        assert_eq!(metrics.mse(), Some(2.5));
        assert_eq!(serde_json::to_string(&metrics).unwrap(), r#"{"mse":2.5}"#);
    }
}
