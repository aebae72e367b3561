//! Random forest classifier
//!
//! A bagged ensemble of CART trees fitted with [`linfa_trees`]. Every tree sees
//! a bootstrap sample (rows drawn with replacement, same size as the input) and
//! the ensemble predicts the class with the most votes. Ties resolve to the
//! lowest class index.

use crate::dataset::{Samples, select_rows};
use crate::error::{ModelError, Result};
use crate::features::FeatureVector;
use linfa::traits::{Fit, Predict};
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Hyperparameters of the ensemble. Defaults mirror the stock random forest
/// classifier: 100 fully grown trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    /// Number of trees in the ensemble
    pub n_trees: usize,
    /// Maximum depth of each tree. None means unlimited.
    pub max_depth: Option<usize>,
    /// Minimum number of samples required to split a node
    pub min_samples_split: usize,
    /// Seed for bootstrap sampling
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            seed: 0,
        }
    }
}

impl ForestParams {
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.min_samples_split = min_samples_split;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(ModelError::InvalidParams(
                "n_trees must be at least 1".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(ModelError::InvalidParams(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(ModelError::InvalidParams(
                "min_samples_split must be at least 2".to_string(),
            ));
        }
        Ok(())
    }

    pub fn fit(&self, samples: &Samples) -> Result<RandomForest> {
        self.validate()?;

        let records = samples.records();
        let n_samples = records.nrows();
        if n_samples == 0 {
            return Err(ModelError::EmptyDataset);
        }
        let n_classes = samples.targets().iter().max().map_or(0, |max| max + 1);

        let tree_params = DecisionTree::<f64, usize>::params()
            .max_depth(self.max_depth)
            .min_weight_split(self.min_samples_split as f32);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::with_capacity(self.n_trees);
        for _ in 0..self.n_trees {
            let bootstrap: Vec<usize> = (0..n_samples)
                .map(|_| rng.random_range(0..n_samples))
                .collect();
            let sample = select_rows(samples, &bootstrap);
            let tree = tree_params
                .fit(&sample)
                .map_err(|e| ModelError::Fit(e.to_string()))?;
            trees.push(tree);
        }

        tracing::debug!(
            n_trees = trees.len(),
            n_samples,
            n_classes,
            "Fitted random forest"
        );

        Ok(RandomForest {
            trees,
            n_features: records.ncols(),
            n_classes,
            params: self.clone(),
        })
    }
}

/// A fitted ensemble. Immutable once fitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree<f64, usize>>,
    n_features: usize,
    n_classes: usize,
    params: ForestParams,
}

impl RandomForest {
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    /// Vote counts per row (`n_rows x n_classes`).
    pub fn votes(&self, records: &Array2<f64>) -> Result<Array2<usize>> {
        if records.ncols() != self.n_features {
            return Err(ModelError::ShapeMismatch {
                expected: self.n_features,
                found: records.ncols(),
            });
        }

        let mut votes = Array2::<usize>::zeros((records.nrows(), self.n_classes));
        for tree in &self.trees {
            let predictions: Array1<usize> = tree.predict(records);
            for (row, class) in predictions.iter().enumerate() {
                if *class < self.n_classes {
                    votes[[row, *class]] += 1;
                }
            }
        }
        Ok(votes)
    }

    /// Fraction of trees voting for each class (`n_rows x n_classes`).
    pub fn predict_proba(&self, records: &Array2<f64>) -> Result<Array2<f64>> {
        let n_trees = self.trees.len() as f64;
        Ok(self.votes(records)?.mapv(|count| count as f64 / n_trees))
    }

    /// Majority-vote class index per row.
    pub fn predict(&self, records: &Array2<f64>) -> Result<Array1<usize>> {
        let votes = self.votes(records)?;
        Ok(votes.rows().into_iter().map(majority).collect())
    }

    pub fn predict_one(&self, features: &FeatureVector) -> Result<usize> {
        let predictions = self.predict(&features.to_row())?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| ModelError::Fit("Got an empty prediction".to_string()))
    }
}

fn majority(row: ArrayView1<usize>) -> usize {
    let mut best = 0;
    for (class, count) in row.iter().enumerate() {
        if *count > row[best] {
            best = class;
        }
    }
    best
}
