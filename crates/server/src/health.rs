use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

use crate::backend::BackendClient;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// `GET /health`. Always answers 200; the `backend` field reports whether the
/// backend's auth service is reachable.
pub async fn health_check(State(client): State<BackendClient>) -> Json<HealthResponse> {
    let backend = match client.health().await {
        Ok(()) => "connected".to_string(),
        Err(e) => format!("error: {}", e.message),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        backend,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Routes served next to the Dioxus app.
pub fn health_router(client: BackendClient) -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(health_check))
        .with_state(client)
}
