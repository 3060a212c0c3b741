use ndarray::{Array1, Array2};
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::{StandardNormal, Uniform};
use ndarray_rand::RandomExt;
use rand_chacha::ChaCha8Rng;
use skridge::{Dataset, Result};

/// Column names of the diabetes table.
pub const DIABETES_FEATURES: [&str; 10] = [
    "age", "sex", "bmi", "bp", "s1", "s2", "s3", "s4", "s5", "s6",
];

/// Draw a random linear regression problem.
///
/// Features are standard normal, the true coefficients uniform in `[0, 100)`
/// and the targets carry Gaussian noise with standard deviation `noise`. The
/// same arguments always produce the same dataset.
pub fn make_regression(
    n_samples: usize,
    n_features: usize,
    noise: f64,
    seed: u64,
) -> Result<Dataset> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let records = Array2::<f64>::random_using((n_samples, n_features), StandardNormal, &mut rng);
    let coef = Array1::<f64>::random_using(n_features, Uniform::new(0.0, 100.0), &mut rng);
    let noise = Array1::<f64>::random_using(n_samples, StandardNormal, &mut rng) * noise;
    let targets = records.dot(&coef) + noise;

    Dataset::new(records, targets)
}

/// A synthetic stand-in with the diabetes shape: 442 samples, 10 named features.
pub fn diabetes_like(seed: u64) -> Result<Dataset> {
    make_regression(442, DIABETES_FEATURES.len(), 50.0, seed)?
        .with_feature_names(DIABETES_FEATURES.iter().copied())
}
