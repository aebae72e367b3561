mod common;

use iris_api::{PredictionContext, ServiceConfig, StartupError};
use iris_model::dataset::iris;
use iris_model::{FeatureVector, LabelTable, ModelError};
use std::path::Path;

fn config(model_path: &Path) -> ServiceConfig {
    ServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        model_path: model_path.to_path_buf(),
    }
}

#[test]
fn missing_artifact_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let result = PredictionContext::initialize(&config(&dir.path().join("absent.json")));
    assert!(matches!(
        result,
        Err(StartupError::Artifact {
            source: ModelError::Read { .. },
            ..
        })
    ));
}

#[test]
fn corrupt_artifact_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, b"{\"format_version\": 1, \"model\": 12}").unwrap();

    let result = PredictionContext::initialize(&config(&path));
    assert!(matches!(
        result,
        Err(StartupError::Artifact {
            source: ModelError::Serialization(_),
            ..
        })
    ));
}

#[test]
fn unknown_format_version_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let mut document: serde_json::Value =
        serde_json::from_slice(&common::artifact().to_json_vec().unwrap()).unwrap();
    document["format_version"] = serde_json::json!(2);
    std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

    let result = PredictionContext::initialize(&config(&path));
    assert!(matches!(
        result,
        Err(StartupError::Artifact {
            source: ModelError::UnsupportedFormat(2),
            ..
        })
    ));
}

#[test]
fn artifact_with_foreign_classes_fails_startup() {
    let artifact = common::artifact_with_labels(LabelTable::new(["a", "b", "c"]));
    let result = PredictionContext::from_artifact(artifact, &iris());
    assert!(matches!(result, Err(StartupError::Incompatible(_))));
}

#[test]
fn saved_artifact_initializes_and_predicts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    common::artifact().save(&path).unwrap();

    let context = PredictionContext::initialize(&config(&path)).unwrap();
    let prediction = context
        .predict(&FeatureVector::new([5.0, 3.4, 1.5, 0.2]).unwrap())
        .unwrap();
    assert_eq!(prediction.label, "setosa");
    assert_eq!(prediction.class_index, 0);
    assert_eq!(context.evaluation().accuracy.total_count, 30);
}

#[test]
fn restart_reproduces_accuracy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    common::artifact().save(&path).unwrap();

    let first = PredictionContext::initialize(&config(&path)).unwrap();
    let second = PredictionContext::initialize(&config(&path)).unwrap();
    assert_eq!(first.accuracy(), second.accuracy());
    assert_eq!(first.evaluation(), second.evaluation());
}
