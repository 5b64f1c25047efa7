//! Connectivity report behind `GET /test`.

use super::store::DocumentStore;
use crate::config::MongoConfig;
use crate::dtos::DiagnosticsReport;
use service_core::error::AppError;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Probes `store` and describes what it finds. Never fails: problems are
/// folded into the report's `database` field.
pub async fn run(store: Option<&dyn DocumentStore>, mongo: &MongoConfig) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(mongo.uri.is_some()),
        database_name: set_marker(mongo.database.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        report.database = "⚠️  Available but not initialized".to_string();
        return report;
    };

    report.connection_status = "Connected".to_string();

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!("Diagnostics could not list collections: {}", e);
            report.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&raw_message(&e), MAX_ERROR_CHARS)
            );
        }
    }

    report
}

fn set_marker(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_string()
}

/// The underlying driver message, without the `AppError` display prefix.
fn raw_message(err: &AppError) -> String {
    match err {
        AppError::DatabaseError(inner) | AppError::InternalError(inner) => inner.to_string(),
        other => other.to_string(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
