use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::doc;

use super::list_limit;
use crate::dtos::{CreatedResponse, ListQuery, ListResponse};
use crate::extract::ValidatedJson;
use crate::models::{project, Project};
use crate::services::{create_document, get_documents, to_public_record};
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state, query))]
pub async fn list_projects(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>, AppError> {
    let limit = list_limit(query)?;
    let store = state.store()?;

    let records = get_documents(store, project::COLLECTION, doc! {}, limit).await?;

    Ok(Json(ListResponse {
        items: records.into_iter().map(to_public_record).collect(),
    }))
}

#[tracing::instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Project>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let store = state.store()?;

    let id = create_document(store, project::COLLECTION, &payload).await?;
    tracing::info!(id = %id, "Project created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
