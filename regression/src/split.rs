use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::dataset::Dataset;
use crate::error::RegressionError;

/// Splits a dataset into train and test partitions.
///
/// Row indices are shuffled with a `StdRng` seeded from `seed`, so the split
/// is reproducible across runs. The test partition takes
/// `ceil(len * test_fraction)` samples, the rest go to the train partition.
///
/// # Errors
/// Returns `InvalidTestFraction` if `test_fraction` is outside (0, 1), and
/// `DegenerateSplit` if either partition would end up empty.
pub fn train_test_split(
    dataset: &Dataset,
    test_fraction: f64,
    seed: u64,
) -> Result<(Dataset, Dataset), RegressionError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(RegressionError::InvalidTestFraction {
            fraction: test_fraction,
        });
    }

    let len = dataset.len();
    let test_len = (len as f64 * test_fraction).ceil() as usize;
    if test_len == 0 || test_len >= len {
        return Err(RegressionError::DegenerateSplit {
            len,
            fraction: test_fraction,
        });
    }

    let mut indices: Vec<usize> = (0..len).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(test_len);

    let collect = |idx: &[usize]| {
        let xs = idx.iter().map(|&i| dataset.xs()[i]).collect();
        let ys = idx.iter().map(|&i| dataset.ys()[i]).collect();
        Dataset::new(xs, ys)
    };

    Ok((collect(train_idx)?, collect(test_idx)?))
}
