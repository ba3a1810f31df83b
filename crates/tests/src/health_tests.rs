use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use server::health::{health_router, HealthResponse};

use crate::common::{send, FakeBackend};

fn health_request() -> Request<Body> {
    Request::builder().uri("/health").body(Body::empty()).unwrap()
}

#[tokio::test]
async fn reports_connected_backend() {
    let fake = FakeBackend::start().await;
    let (status, _, body) = send(&health_router(fake.client()), health_request()).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.backend, "connected");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn reports_backend_error_without_failing() {
    let fake = FakeBackend::start().await;
    fake.set_health_down(true);
    let (status, _, body) = send(&health_router(fake.client()), health_request()).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert!(health.backend.starts_with("error:"));
}
