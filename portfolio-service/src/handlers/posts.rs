use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use mongodb::bson::doc;

use super::list_limit;
use crate::dtos::{CreatedResponse, ListQuery, ListResponse};
use crate::extract::ValidatedJson;
use crate::models::{blog_post, BlogPost};
use crate::services::{create_document, get_documents, to_public_record};
use crate::startup::AppState;
use service_core::error::AppError;

/// Lists published posts only; drafts are never exposed.
#[tracing::instrument(skip(state, query))]
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>, AppError> {
    let limit = list_limit(query)?;
    let store = state.store()?;

    let records = get_documents(
        store,
        blog_post::COLLECTION,
        doc! { "published": true },
        limit,
    )
    .await?;

    Ok(Json(ListResponse {
        items: records.into_iter().map(to_public_record).collect(),
    }))
}

#[tracing::instrument(skip(state, payload), fields(slug = %payload.slug))]
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BlogPost>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let store = state.store()?;

    let id = create_document(store, blog_post::COLLECTION, &payload).await?;
    tracing::info!(id = %id, published = payload.published, "Blog post created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
