//! Classification metrics computed against a labeled evaluation set.

use crate::dataset::{LabelTable, Samples};
use crate::error::{ModelError, Result};
use crate::forest::RandomForest;
use serde::{Deserialize, Serialize};

/// Classification accuracy metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Accuracy score (0.0 to 1.0)
    pub accuracy: f64,
    /// Number of correct predictions
    pub correct_count: usize,
    /// Total number of predictions
    pub total_count: usize,
}

impl AccuracyMetrics {
    pub fn from_predictions(predicted: &[usize], actual: &[usize]) -> Result<Self> {
        if predicted.len() != actual.len() {
            return Err(ModelError::LengthMismatch {
                predicted: predicted.len(),
                actual: actual.len(),
            });
        }
        if actual.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let correct_count = predicted
            .iter()
            .zip(actual.iter())
            .filter(|(p, a)| p == a)
            .count();
        let total_count = actual.len();

        Ok(Self {
            accuracy: correct_count as f64 / total_count as f64,
            correct_count,
            total_count,
        })
    }
}

/// Confusion matrix (rows = actual, cols = predicted) with weighted averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub matrix: Vec<Vec<usize>>,
    pub labels: Vec<String>,
    /// Support-weighted precision across classes
    pub precision: f64,
    /// Support-weighted recall across classes
    pub recall: f64,
    /// Support-weighted F1 score across classes
    pub f1_score: f64,
}

impl ConfusionMatrix {
    pub fn from_predictions(
        predicted: &[usize],
        actual: &[usize],
        labels: &LabelTable,
    ) -> Result<Self> {
        if predicted.len() != actual.len() {
            return Err(ModelError::LengthMismatch {
                predicted: predicted.len(),
                actual: actual.len(),
            });
        }
        if actual.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let n = labels.len();
        let mut matrix = vec![vec![0usize; n]; n];
        for (p, a) in predicted.iter().zip(actual.iter()) {
            if *p >= n || *a >= n {
                return Err(ModelError::InvalidParams(format!(
                    "class index out of range for {n} labels (predicted {p}, actual {a})"
                )));
            }
            matrix[*a][*p] += 1;
        }

        let total = actual.len() as f64;
        let (mut precision, mut recall, mut f1_score) = (0.0, 0.0, 0.0);
        for class in 0..n {
            let tp = matrix[class][class] as f64;
            let support: usize = matrix[class].iter().sum();
            let predicted_as: usize = matrix.iter().map(|row| row[class]).sum();

            let p = if predicted_as > 0 {
                tp / predicted_as as f64
            } else {
                0.0
            };
            let r = if support > 0 { tp / support as f64 } else { 0.0 };
            let f1 = if p + r > 0.0 {
                2.0 * p * r / (p + r)
            } else {
                0.0
            };

            let weight = support as f64 / total;
            precision += p * weight;
            recall += r * weight;
            f1_score += f1 * weight;
        }

        Ok(Self {
            matrix,
            labels: labels.names().to_vec(),
            precision,
            recall,
            f1_score,
        })
    }
}

/// Metrics of a model against one evaluation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub accuracy: AccuracyMetrics,
    pub confusion: ConfusionMatrix,
}

pub fn evaluate(model: &RandomForest, samples: &Samples, labels: &LabelTable) -> Result<Evaluation> {
    let predicted = model.predict(samples.records())?.to_vec();
    let actual = samples.targets().to_vec();

    Ok(Evaluation {
        accuracy: AccuracyMetrics::from_predictions(&predicted, &actual)?,
        confusion: ConfusionMatrix::from_predictions(&predicted, &actual, labels)?,
    })
}
