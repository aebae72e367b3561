use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use iris_client::{ClientError, PredictionClient};
use iris_model::FeatureVector;
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn features() -> FeatureVector {
    FeatureVector::new([5.0, 3.4, 1.5, 0.2]).unwrap()
}

#[tokio::test]
async fn health_reads_welcome_payload() {
    let url = serve(Router::new().route(
        "/",
        get(|| async { Json(json!({"message": "Welcome to the model API!"})) }),
    ))
    .await;

    let health = PredictionClient::new(&url).unwrap().health().await.unwrap();
    assert_eq!(health.message, "Welcome to the model API!");
}

#[tokio::test]
async fn predict_posts_features_and_reads_response() {
    let app = Router::new().route(
        "/predict/",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"features": [5.0, 3.4, 1.5, 0.2]}));
            Json(json!({"class": "setosa", "accuracy": 0.95}))
        }),
    );
    let url = serve(app).await;

    let prediction = PredictionClient::new(&url)
        .unwrap()
        .predict(&features())
        .await
        .unwrap();
    assert_eq!(prediction.class, "setosa");
    assert_eq!(prediction.accuracy, Some(0.95));
}

#[tokio::test]
async fn missing_accuracy_maps_to_none() {
    let app = Router::new().route(
        "/predict/",
        post(|| async { Json(json!({"class": "virginica"})) }),
    );
    let url = serve(app).await;

    let prediction = PredictionClient::new(&url)
        .unwrap()
        .predict(&features())
        .await
        .unwrap();
    assert_eq!(prediction.class, "virginica");
    assert_eq!(prediction.accuracy, None);
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let app = Router::new().route(
        "/predict/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = serve(app).await;

    let error = PredictionClient::new(&url)
        .unwrap()
        .predict(&features())
        .await
        .unwrap_err();
    match error {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let error = PredictionClient::new(&format!("http://{addr}"))
        .unwrap()
        .predict(&features())
        .await
        .unwrap_err();
    assert!(matches!(error, ClientError::Transport(_)));
}
