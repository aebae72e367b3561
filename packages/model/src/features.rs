//! Validated classifier input.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Number of measurements per flower: sepal length, sepal width, petal length, petal width.
pub const N_FEATURES: usize = 4;

/// Column names in feature order, in centimeters.
pub const FEATURE_NAMES: [&str; N_FEATURES] =
    ["Sepal Length", "Sepal Width", "Petal Length", "Petal Width"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("expected {expected} features, got {found}")]
    Arity { expected: usize, found: usize },

    #[error("feature {index} is not a finite number")]
    NonFinite { index: usize },
}

/// Exactly four finite measurements in feature order.
///
/// No range is enforced; any finite value is a valid measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    pub fn new(values: [f64; N_FEATURES]) -> Result<Self, FeatureError> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(FeatureError::NonFinite { index });
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.0
    }

    /// Reshape into a single-row matrix for the classifier.
    pub fn to_row(&self) -> Array2<f64> {
        Array2::from_shape_fn((1, N_FEATURES), |(_, col)| self.0[col])
    }

    /// Euclidean distance to another vector.
    pub fn distance(&self, other: &FeatureVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = FeatureError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let array: [f64; N_FEATURES] = values.try_into().map_err(|_| FeatureError::Arity {
            expected: N_FEATURES,
            found: values.len(),
        })?;
        Self::new(array)
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = FeatureError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.0.to_vec()
    }
}
