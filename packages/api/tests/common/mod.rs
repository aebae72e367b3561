#![allow(dead_code)]

use iris_api::{AppState, PredictionContext};
use iris_model::dataset::iris;
use iris_model::{ForestParams, LabelTable, ModelArtifact, TrainingScope, train_artifact};
use std::sync::Arc;

pub fn artifact() -> ModelArtifact {
    artifact_with_labels(LabelTable::iris())
}

pub fn artifact_with_labels(labels: LabelTable) -> ModelArtifact {
    train_artifact(
        &iris(),
        &labels,
        &ForestParams::default().n_trees(20).seed(5),
        TrainingScope::Full,
    )
    .expect("training on iris succeeds")
}

pub fn state() -> AppState {
    Arc::new(PredictionContext::from_artifact(artifact(), &iris()).expect("context builds"))
}
