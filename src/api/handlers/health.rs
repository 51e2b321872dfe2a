use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use utoipa::ToSchema;

use crate::application::ports::AssetRepository;

const READINESS_TIMEOUT: Duration = Duration::from_secs(2);

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Store readiness response
#[derive(serde::Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Greeting", body = crate::application::dto::MessageResponse)
    )
)]
pub async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello World" }))
}

/// GET /health
/// Liveness check, does not touch the store
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /health/ready
/// Readiness probe with store connectivity check
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(repo): State<Arc<dyn AssetRepository>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let start_time = Instant::now();
    let check = tokio::time::timeout(READINESS_TIMEOUT, repo.ping()).await;
    let response_time = start_time.elapsed();

    match check {
        Ok(Ok(())) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": env!("CARGO_PKG_NAME"),
                "database": "connected",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": response_time.as_millis(),
            })),
        ),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "service": env!("CARGO_PKG_NAME"),
                    "database": "disconnected",
                    "error": "Database unreachable",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                    "response_time_ms": response_time.as_millis(),
                })),
            )
        }
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": env!("CARGO_PKG_NAME"),
                "database": "timeout",
                "error": format!(
                    "Database ping timed out after {} seconds",
                    READINESS_TIMEOUT.as_secs()
                ),
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": response_time.as_millis(),
            })),
        ),
    }
}
