//! Iris prediction service
//!
//! A liveness route and a prediction route backed by a model loaded once at
//! startup.
//!
//! ```rust,ignore
//! use iris_api::{PredictionContext, ServiceConfig, construct_router};
//!
//! let config = ServiceConfig::from_env()?;
//! let state = Arc::new(PredictionContext::initialize(&config)?);
//! let app = construct_router(state);
//! ```

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
mod routes;
pub mod state;
pub mod types;

pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use state::{AppState, Prediction, PredictionContext, PredictionError, StartupError};

pub fn construct_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::welcome))
        .route("/predict", post(routes::predict))
        .route("/predict/", post(routes::predict))
        .route("/model", get(routes::model_info))
        .route("/model/", get(routes::model_info))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
