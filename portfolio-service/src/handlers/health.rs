use crate::dtos::RootResponse;
use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Portfolio API running".to_string(),
    })
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "portfolio-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe: the database must answer a ping.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let store = state.store.as_ref().ok_or(AppError::ServiceUnavailable)?;

    store.ping().await.map_err(|e| {
        tracing::warn!("Readiness check failed: {}", e);
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}

/// Prometheus metrics endpoint.
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
