use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use iris_model::FeatureError;
use serde::Serialize;

use crate::state::PredictionError;

/// Error returned by route handlers. Serialized as
/// `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    public_code: &'static str,
    public_message: Option<String>,
}

impl ApiError {
    fn new(status: StatusCode, public_code: &'static str, public_message: Option<String>) -> Self {
        Self {
            status,
            public_code,
            public_message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.public_code
    }

    /// Body could not be read as a prediction request.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Invalid request: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", Some(msg))
    }

    pub fn invalid_features(err: FeatureError) -> Self {
        let msg = err.to_string();
        tracing::warn!("Invalid features: {}", msg);
        Self::new(StatusCode::BAD_REQUEST, "INVALID_FEATURES", Some(msg))
    }

    pub fn prediction_failed(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Prediction failed: {}", msg);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "PREDICTION_FAILED", None)
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        Self::prediction_failed(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorEnvelope<'a> {
            error: ErrorBody<'a>,
        }

        #[derive(Serialize)]
        struct ErrorBody<'a> {
            code: &'a str,
            message: &'a str,
        }

        let message = self
            .public_message
            .as_deref()
            .unwrap_or_else(|| self.status.canonical_reason().unwrap_or("Error"));

        (
            self.status,
            Json(ErrorEnvelope {
                error: ErrorBody {
                    code: self.public_code,
                    message,
                },
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_errors_are_client_errors() {
        let err = ApiError::invalid_features(FeatureError::Arity {
            expected: 4,
            found: 2,
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "INVALID_FEATURES");
    }

    #[test]
    fn prediction_failures_hide_details() {
        let err = ApiError::prediction_failed("class 7 has no label");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message, None);
    }
}
