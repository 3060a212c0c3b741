//! Deterministic train/test partitioning
//!
//! Row indices are shuffled with a Fisher-Yates pass driven by
//! `ChaCha8Rng::seed_from_u64(seed)`. The first `ceil(test_size * n)` shuffled
//! indices form the test side and the remainder the training side, both kept
//! in shuffled order. ChaCha8 has a fixed output stream, so the same dataset and
//! seed always produce the same partition.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Fraction of records held out for evaluation unless configured otherwise.
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// A partition of a dataset into disjoint training and evaluation subsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub train: Dataset,
    pub test: Dataset,
    train_indices: Vec<usize>,
    test_indices: Vec<usize>,
}

impl Split {
    /// Rows of the source dataset that ended up in `train`, in order.
    pub fn train_indices(&self) -> &[usize] {
        &self.train_indices
    }

    /// Rows of the source dataset that ended up in `test`, in order.
    pub fn test_indices(&self) -> &[usize] {
        &self.test_indices
    }
}

/// Partition `dataset` so that `test_size` of its records land in `test`.
///
/// Fails with [`Error::DimensionMismatch`] when records and targets disagree on
/// the number of rows, and with [`Error::InvalidInput`] when the dataset is
/// empty or `test_size` lies outside the open interval (0, 1).
pub fn train_test_split(dataset: &Dataset, test_size: f64, seed: u64) -> Result<Split> {
    // fields are public; `Dataset::new` row invariant may have been broken since
    if dataset.records.nrows() != dataset.targets.len() {
        return Err(Error::dimension_mismatch(
            "targets",
            dataset.records.nrows(),
            dataset.targets.len(),
        ));
    }
    if dataset.is_empty() {
        return Err(Error::invalid_input("cannot split an empty dataset"));
    }
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(Error::invalid_input(format!(
            "test_size must be in (0, 1), got {}",
            test_size
        )));
    }

    let n = dataset.nsamples();
    // 0.2 * 15 evaluates to 3.0000000000000004; absorb that before rounding up
    let n_test = ((test_size * n as f64 - 1e-9).ceil() as usize).min(n);

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train_indices = indices.split_off(n_test);
    let test_indices = indices;

    Ok(Split {
        train: dataset.select(&train_indices),
        test: dataset.select(&test_indices),
        train_indices,
        test_indices,
    })
}

/// Reusable split configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    test_size: f64,
    seed: u64,
}

impl Default for Splitter {
    fn default() -> Self {
        Splitter {
            test_size: DEFAULT_TEST_SIZE,
            seed: 0,
        }
    }
}

impl Splitter {
    pub fn new() -> Splitter {
        Splitter::default()
    }

    pub fn test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn split(&self, dataset: &Dataset) -> Result<Split> {
        train_test_split(dataset, self.test_size, self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Row `i` has every feature equal to `i` and target `i`, so rows can be
    /// traced through a split.
    fn indexed_dataset(n: usize, nfeatures: usize) -> Dataset {
        let records = Array2::from_shape_fn((n, nfeatures), |(i, _)| i as f64);
        let targets = Array1::from_shape_fn(n, |i| i as f64);
        Dataset::new(records, targets).unwrap()
    }

    #[test]
    fn diabetes_sized_split_has_353_train_and_89_test() {
        let dataset = indexed_dataset(442, 10);
        let split = train_test_split(&dataset, 0.2, 0).unwrap();

        assert_eq!(split.train.nsamples(), 353);
        assert_eq!(split.test.nsamples(), 89);
        assert_eq!(split.train.nfeatures(), 10);
        assert_eq!(split.test.nfeatures(), 10);
    }

    #[test]
    fn same_seed_gives_same_split() {
        let dataset = indexed_dataset(100, 3);
        let a = train_test_split(&dataset, 0.2, 42).unwrap();
        let b = train_test_split(&dataset, 0.2, 42).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let dataset = indexed_dataset(100, 3);
        let a = train_test_split(&dataset, 0.2, 1).unwrap();
        let b = train_test_split(&dataset, 0.2, 2).unwrap();

        assert_ne!(a.test_indices(), b.test_indices());
    }

    #[test]
    fn records_follow_their_indices() {
        let dataset = indexed_dataset(50, 2);
        let split = train_test_split(&dataset, 0.3, 7).unwrap();

        for (row, &idx) in split.test_indices().iter().enumerate() {
            assert_eq!(split.test.targets[row], idx as f64);
            assert_eq!(split.test.records[[row, 1]], idx as f64);
        }
        for (row, &idx) in split.train_indices().iter().enumerate() {
            assert_eq!(split.train.targets[row], idx as f64);
        }
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dataset = Dataset::new(Array2::zeros((0, 10)), Array1::zeros(0)).unwrap();
        let err = train_test_split(&dataset, 0.2, 0).unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn mismatched_rows_are_rejected() {
        let mut dataset = indexed_dataset(6, 2);
        dataset.targets = Array1::from(vec![1.0, 2.0]);

        assert_eq!(
            train_test_split(&dataset, 0.2, 0).unwrap_err(),
            Error::dimension_mismatch("targets", 6, 2)
        );
        assert!(Splitter::new().split(&dataset).is_err());
    }

    #[test]
    fn out_of_range_fractions_are_rejected() {
        let dataset = indexed_dataset(10, 1);
        for &test_size in &[0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let err = train_test_split(&dataset, test_size, 0).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{}", test_size);
        }
    }

    #[test]
    fn tiny_datasets_do_not_panic() {
        let one = indexed_dataset(1, 2);
        let split = train_test_split(&one, 0.2, 0).unwrap();
        assert_eq!(split.train.nsamples() + split.test.nsamples(), 1);

        let three = indexed_dataset(3, 2);
        let split = train_test_split(&three, 0.2, 0).unwrap();
        assert_eq!(split.test.nsamples(), 1);
        assert_eq!(split.train.nsamples(), 2);
    }

    #[test]
    fn splitter_defaults_match_function() {
        let dataset = indexed_dataset(20, 2);
        let from_splitter = Splitter::new().seed(3).split(&dataset).unwrap();
        let from_fn = train_test_split(&dataset, DEFAULT_TEST_SIZE, 3).unwrap();

        assert_eq!(from_splitter, from_fn);
    }

    proptest! {
        #[test]
        fn split_is_a_partition(n in 1usize..300, seed in any::<u64>(), test_size in 0.01f64..0.99) {
            let dataset = indexed_dataset(n, 2);
            let split = train_test_split(&dataset, test_size, seed).unwrap();

            prop_assert_eq!(split.train.nsamples() + split.test.nsamples(), n);

            let train: HashSet<usize> = split.train_indices().iter().copied().collect();
            let test: HashSet<usize> = split.test_indices().iter().copied().collect();
            prop_assert_eq!(train.len(), split.train.nsamples());
            prop_assert_eq!(test.len(), split.test.nsamples());
            prop_assert!(train.is_disjoint(&test));
            prop_assert_eq!(train.union(&test).count(), n);
        }

        #[test]
        fn test_share_is_within_one_record(n in 10usize..500, seed in any::<u64>()) {
            let dataset = indexed_dataset(n, 1);
            let split = train_test_split(&dataset, DEFAULT_TEST_SIZE, seed).unwrap();

            let expected = DEFAULT_TEST_SIZE * n as f64;
            prop_assert!((split.test.nsamples() as f64 - expected).abs() < 1.0);
        }
    }
}
