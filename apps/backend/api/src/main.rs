//! Iris prediction service
//!
//! ## Endpoints
//!
//! - `GET /` - Liveness
//! - `POST /predict/` - Classify one flower
//! - `GET /model/` - Loaded model metadata
//!
//! ## Environment
//!
//! - `PORT` (default 8000), `HOST` (default 0.0.0.0)
//! - `MODEL_PATH` (default `iris_model.json`)
//! - `RUST_LOG` (default `info`)

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use axum::Router;
use iris_api::{PredictionContext, ServiceConfig, construct_router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .init();

    tracing::info!("Starting Iris prediction service");

    let config = ServiceConfig::from_env()?;
    tracing::info!(model_path = %config.model_path.display(), "Loaded configuration");

    let context = PredictionContext::initialize(&config).inspect_err(|e| {
        tracing::error!(error = %e, "Model could not be loaded, refusing to start");
    })?;
    let state = Arc::new(context);

    let app = Router::new()
        .merge(construct_router(state))
        .layer(CorsLayer::permissive());

    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
