use log::debug;
use skridge::metrics::{Metrics, Regression};
use skridge::traits::Predict;
use skridge::{Dataset, Error, Result};

/// Score `model` on held-out data.
///
/// Always reports `mse` and `mae`, plus `n_samples`. `r2` is left out when the
/// held-out targets are constant.
pub fn model_metrics<M: Predict>(model: &M, test: &Dataset) -> Result<Metrics> {
    if model.nfeatures() != test.nfeatures() {
        return Err(Error::dimension_mismatch(
            "features",
            model.nfeatures(),
            test.nfeatures(),
        ));
    }
    if test.is_empty() {
        return Err(Error::invalid_input("cannot evaluate on an empty test set"));
    }

    let predictions = model.predict(test.records())?;

    let mut metrics = Metrics::new();
    metrics.insert("mse", predictions.mean_squared_error(test.targets())?);
    metrics.insert("mae", predictions.mean_absolute_error(test.targets())?);
    match predictions.r2(test.targets()) {
        Ok(r2) => metrics.insert("r2", r2),
        Err(e) => debug!("r2 skipped: {}", e),
    }
    metrics.insert("n_samples", test.nsamples() as f64);

    Ok(metrics)
}
