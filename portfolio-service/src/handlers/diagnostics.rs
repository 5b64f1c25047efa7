use crate::dtos::DiagnosticsReport;
use crate::services::diagnostics;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Reports whether the backend can reach its database.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(diagnostics::run(state.store.as_deref(), &state.config.mongodb).await)
}
