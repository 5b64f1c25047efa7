pub mod diagnostics;
pub mod health;
pub mod posts;
pub mod projects;

pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint, readiness_check, root};
pub use posts::{create_post, list_posts};
pub use projects::{create_project, list_projects};

use crate::dtos::ListQuery;
use axum::extract::{rejection::QueryRejection, Query};
use service_core::error::AppError;

/// Unwraps the `?limit=` query. Non-integers and negatives are 422.
pub(crate) fn list_limit(
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Option<i64>, AppError> {
    let Query(query) =
        query.map_err(|e| AppError::Unprocessable(anyhow::anyhow!(e.body_text())))?;

    match query.limit {
        Some(limit) if limit < 0 => Err(AppError::Unprocessable(anyhow::anyhow!(
            "limit must be a non-negative integer"
        ))),
        limit => Ok(limit),
    }
}
