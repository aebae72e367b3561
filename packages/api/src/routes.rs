use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use iris_model::{FeatureVector, SplitParams};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{ModelInfoResponse, PredictRequest, PredictResponse, WelcomeResponse};

/// Liveness. Never fails and never touches the model.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

#[tracing::instrument(name = "POST /predict/", skip(state, payload))]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::invalid_request(rejection.body_text()))?;
    let features = FeatureVector::try_from(request.features).map_err(ApiError::invalid_features)?;

    let prediction = state.predict(&features)?;
    tracing::debug!(
        features = ?features.values(),
        class = %prediction.label,
        "Predicted"
    );

    Ok(Json(PredictResponse {
        class: prediction.label,
        accuracy: state.accuracy(),
    }))
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    let evaluation = state.evaluation();
    Json(ModelInfoResponse {
        kind: "RandomForest".to_string(),
        n_trees: state.model().n_trees(),
        n_features: state.model().n_features(),
        classes: state.labels().names().to_vec(),
        trained_at: state.trained_at(),
        scope: state.scope(),
        trained_samples: state.trained_samples(),
        evaluation_split: SplitParams::EVALUATION,
        accuracy: evaluation.accuracy.accuracy,
        correct_count: evaluation.accuracy.correct_count,
        total_count: evaluation.accuracy.total_count,
    })
}
