use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use skridge::{Error, HyperparameterSet, Result};

/// Name of the regularisation strength parameter.
pub const ALPHA: &str = "alpha";
/// Name of the intercept switch.
pub const FIT_INTERCEPT: &str = "fit_intercept";

/// Validated ridge hyperparameters
///
/// Built from a [`HyperparameterSet`] when the model is fitted. Unknown names,
/// values of the wrong type and a negative or non-finite `alpha` are rejected
/// with [`Error::InvalidHyperparameter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RidgeParams {
    /// L2 penalty weight, `>= 0`. Zero is ordinary least squares.
    pub alpha: f64,
    /// Centre the data and fit an unpenalised intercept.
    pub fit_intercept: bool,
}

impl Default for RidgeParams {
    fn default() -> Self {
        RidgeParams {
            alpha: 1.0,
            fit_intercept: true,
        }
    }
}

impl RidgeParams {
    pub fn check(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(Error::invalid_hyperparameter(
                ALPHA,
                format!("must be a finite value >= 0, got {}", self.alpha),
            ));
        }
        Ok(())
    }
}

impl TryFrom<&HyperparameterSet> for RidgeParams {
    type Error = Error;

    fn try_from(set: &HyperparameterSet) -> Result<Self> {
        let mut params = RidgeParams::default();

        for (name, value) in set {
            match name.as_str() {
                ALPHA => {
                    params.alpha = value.as_f64().ok_or_else(|| {
                        Error::invalid_hyperparameter(
                            ALPHA,
                            format!("expected a float, got {}", value.type_name()),
                        )
                    })?;
                }
                FIT_INTERCEPT => {
                    params.fit_intercept = value.as_bool().ok_or_else(|| {
                        Error::invalid_hyperparameter(
                            FIT_INTERCEPT,
                            format!("expected a bool, got {}", value.type_name()),
                        )
                    })?;
                }
                other => {
                    return Err(Error::invalid_hyperparameter(
                        other,
                        "not a ridge regression parameter",
                    ))
                }
            }
        }

        params.check()?;
        Ok(params)
    }
}
