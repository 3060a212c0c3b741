use std::convert::TryFrom;
use std::fmt;

use log::debug;
use ndarray::{Array1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use skridge::prelude::*;
use skridge_numrs::solve_spd;

use crate::params::{RidgeParams, ALPHA, FIT_INTERCEPT};

/// Ridge regression trainer
///
/// Holds the raw hyperparameters; they are validated by [`Fit::fit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ridge {
    hyperparameters: HyperparameterSet,
}

/// Configure and fit a ridge regression model
impl Ridge {
    /// Create a ridge trainer with the given regularisation strength.
    pub fn new(alpha: f64) -> Ridge {
        Ridge::default().alpha(alpha)
    }

    /// Create a trainer from a free-form parameter mapping such as `{"alpha": 0.5}`.
    pub fn from_hyperparameters(hyperparameters: HyperparameterSet) -> Ridge {
        Ridge { hyperparameters }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.hyperparameters.insert(ALPHA, alpha);
        self
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.hyperparameters.insert(FIT_INTERCEPT, fit_intercept);
        self
    }

    pub fn hyperparameters(&self) -> &HyperparameterSet {
        &self.hyperparameters
    }
}

impl Fit for Ridge {
    type Object = FittedRidge;

    fn fit(&self, dataset: &Dataset) -> Result<FittedRidge> {
        let params = RidgeParams::try_from(&self.hyperparameters)?;

        let x = dataset.records();
        let y = dataset.targets();
        if x.nrows() != y.len() {
            return Err(Error::dimension_mismatch("targets", x.nrows(), y.len()));
        }
        let (nsamples, nfeatures) = x.dim();
        if nsamples == 0 {
            return Err(Error::invalid_input("cannot fit on an empty training set"));
        }

        let (x_mean, y_mean) = if params.fit_intercept {
            // non-empty, so both means exist
            let x_mean = x
                .mean_axis(Axis(0))
                .unwrap_or_else(|| Array1::zeros(nfeatures));
            let y_mean = y.mean().unwrap_or(0.0);
            (x_mean, y_mean)
        } else {
            (Array1::zeros(nfeatures), 0.0)
        };

        let xc = &x - &x_mean;
        let yc = &y - y_mean;

        let mut gram = xc.t().dot(&xc);
        for i in 0..nfeatures {
            gram[[i, i]] += params.alpha;
        }
        let rhs = xc.t().dot(&yc);

        let coefficients = solve_spd(gram.view(), rhs.view())
            .map_err(|e| Error::Numerical(format!("ridge normal equations: {}", e)))?;
        let intercept = if params.fit_intercept {
            y_mean - x_mean.dot(&coefficients)
        } else {
            0.0
        };

        debug!(
            "fitted ridge on {} samples x {} features (alpha = {}, intercept = {})",
            nsamples, nfeatures, params.alpha, intercept
        );

        Ok(FittedRidge {
            params,
            intercept,
            coefficients,
            feature_names: dataset.feature_names(),
        })
    }
}

/// A fitted ridge regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedRidge {
    params: RidgeParams,
    intercept: f64,
    coefficients: Array1<f64>,
    feature_names: Vec<String>,
}

impl FittedRidge {
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// The validated parameters the model was fitted with.
    pub fn params(&self) -> &RidgeParams {
        &self.params
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl Predict for FittedRidge {
    fn nfeatures(&self) -> usize {
        self.coefficients.len()
    }

    fn predict_records(&self, records: ArrayView2<'_, f64>) -> Array1<f64> {
        records.dot(&self.coefficients) + self.intercept
    }
}

/// Renders the model as `b + name * w + ...`.
impl fmt::Display for FittedRidge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.intercept)?;
        for (name, w) in self.feature_names.iter().zip(self.coefficients.iter()) {
            write!(f, " + {} * {}", name, w)?;
        }
        Ok(())
    }
}
