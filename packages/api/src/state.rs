//! Process-wide prediction context
//!
//! Built exactly once before the listener is bound and shared read-only with
//! every handler. There is no way back from a built context to an unloaded
//! one; the model is never reloaded.

use chrono::{DateTime, Utc};
use iris_model::dataset::{self, Samples};
use iris_model::metrics::evaluate;
use iris_model::{
    Evaluation, FeatureVector, LabelTable, ModelArtifact, ModelError, N_FEATURES, RandomForest,
    SplitParams, TrainingScope,
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServiceConfig;

pub type AppState = Arc<PredictionContext>;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to load model artifact from {path}: {source}")]
    Artifact { path: PathBuf, source: ModelError },

    #[error("Model artifact is incompatible with the dataset: {0}")]
    Incompatible(ModelError),

    #[error("Failed to evaluate model: {0}")]
    Evaluation(ModelError),
}

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Class index {0} has no label")]
    UnknownClass(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class_index: usize,
    pub label: String,
}

#[derive(Debug)]
pub struct PredictionContext {
    model: RandomForest,
    labels: LabelTable,
    evaluation: Evaluation,
    trained_at: DateTime<Utc>,
    scope: TrainingScope,
    trained_samples: usize,
}

impl PredictionContext {
    /// Load the artifact named by `config` and evaluate it on the fixed split
    /// of the embedded dataset.
    pub fn initialize(config: &ServiceConfig) -> Result<Self, StartupError> {
        let artifact =
            ModelArtifact::load(&config.model_path).map_err(|source| StartupError::Artifact {
                path: config.model_path.clone(),
                source,
            })?;
        Self::from_artifact(artifact, &dataset::iris())
    }

    pub fn from_artifact(artifact: ModelArtifact, samples: &Samples) -> Result<Self, StartupError> {
        let labels = LabelTable::iris();
        artifact
            .ensure_classes(&labels)
            .map_err(StartupError::Incompatible)?;
        if artifact.model.n_features() != N_FEATURES {
            return Err(StartupError::Incompatible(ModelError::ShapeMismatch {
                expected: N_FEATURES,
                found: artifact.model.n_features(),
            }));
        }

        let split = SplitParams::EVALUATION
            .split(samples)
            .map_err(StartupError::Evaluation)?;
        let evaluation =
            evaluate(&artifact.model, &split.test, &labels).map_err(StartupError::Evaluation)?;

        tracing::info!(
            accuracy = evaluation.accuracy.accuracy,
            correct = evaluation.accuracy.correct_count,
            total = evaluation.accuracy.total_count,
            n_trees = artifact.model.n_trees(),
            scope = %artifact.scope,
            "Model ready"
        );
        tracing::debug!(
            matrix = ?evaluation.confusion.matrix,
            precision = evaluation.confusion.precision,
            recall = evaluation.confusion.recall,
            f1 = evaluation.confusion.f1_score,
            "Evaluation confusion matrix"
        );

        Ok(Self {
            model: artifact.model,
            labels,
            evaluation,
            trained_at: artifact.trained_at,
            scope: artifact.scope,
            trained_samples: artifact.n_samples,
        })
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictionError> {
        let class_index = self.model.predict_one(features)?;
        let label = self
            .labels
            .name(class_index)
            .ok_or(PredictionError::UnknownClass(class_index))?;
        Ok(Prediction {
            class_index,
            label: label.to_string(),
        })
    }

    /// Held-out accuracy computed at startup.
    pub fn accuracy(&self) -> f64 {
        self.evaluation.accuracy.accuracy
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn model(&self) -> &RandomForest {
        &self.model
    }

    pub fn trained_at(&self) -> DateTime<Utc> {
        self.trained_at
    }

    pub fn scope(&self) -> TrainingScope {
        self.scope
    }

    pub fn trained_samples(&self) -> usize {
        self.trained_samples
    }
}
