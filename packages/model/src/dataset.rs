//! Embedded Iris dataset, species label table and the seeded train/test split.

use crate::error::{ModelError, Result};
use linfa::{Dataset, DatasetBase};
use ndarray::{Axis, Ix1};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Labeled samples: `n x 4` measurements with one class index per row.
pub type Samples = Dataset<f64, usize, Ix1>;

/// The 150-sample Iris dataset shipped with `linfa-datasets`.
pub fn iris() -> Samples {
    linfa_datasets::iris()
}

/// Ordered species names, index-aligned with the classifier output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable(Vec<String>);

impl LabelTable {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn iris() -> Self {
        Self::new(["setosa", "versicolor", "virginica"])
    }

    pub fn name(&self, class: usize) -> Option<&str> {
        self.0.get(class).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Partitioning parameters for a shuffled train/test split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitParams {
    /// Fraction of rows assigned to the test partition
    pub test_fraction: f64,
    /// Seed of the row permutation
    pub seed: u64,
}

#[derive(Debug)]
pub struct TrainTestSplit {
    pub train: Samples,
    pub test: Samples,
}

impl SplitParams {
    /// The split the service evaluates on. Must never change between restarts.
    pub const EVALUATION: SplitParams = SplitParams {
        test_fraction: 0.2,
        seed: 42,
    };

    /// Shuffle row indices with a seeded RNG, take `ceil(n * test_fraction)`
    /// rows from the front as test set and the rest as training set.
    pub fn split(&self, samples: &Samples) -> Result<TrainTestSplit> {
        if !(self.test_fraction > 0.0 && self.test_fraction < 1.0) {
            return Err(ModelError::InvalidParams(format!(
                "test_fraction must be in (0, 1), got {}",
                self.test_fraction
            )));
        }

        let n_samples = samples.records().nrows();
        if n_samples == 0 {
            return Err(ModelError::EmptyDataset);
        }

        let n_test = (n_samples as f64 * self.test_fraction).ceil() as usize;
        if n_test >= n_samples {
            return Err(ModelError::InvalidParams(format!(
                "test_fraction {} leaves no training rows out of {}",
                self.test_fraction, n_samples
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(n_test);
        Ok(TrainTestSplit {
            train: select_rows(samples, train_idx),
            test: select_rows(samples, test_idx),
        })
    }
}

/// Copy the given rows (with repetition allowed) into a new dataset.
pub fn select_rows(samples: &Samples, indices: &[usize]) -> Samples {
    DatasetBase::new(
        samples.records().select(Axis(0), indices),
        samples.targets().select(Axis(0), indices),
    )
}
