//! Generic create/list helpers shared by every record kind.

use super::store::DocumentStore;
use mongodb::bson::{self, Bson, DateTime, Document};
use serde::Serialize;
use serde_json::{Map, Value};
use service_core::error::AppError;

/// Serializes `record`, stamps `created_at`/`updated_at` with the current
/// UTC time and inserts it into `collection`.
pub async fn create_document<T: Serialize>(
    store: &dyn DocumentStore,
    collection: &str,
    record: &T,
) -> Result<String, AppError> {
    let mut document = bson::to_document(record)?;
    let now = DateTime::now();
    document.insert("created_at", now);
    document.insert("updated_at", now);

    store.insert(collection, document).await
}

/// Returns the records of `collection` matching `filter`. A zero limit
/// means unlimited.
pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: &str,
    filter: Document,
    limit: Option<i64>,
) -> Result<Vec<Document>, AppError> {
    store
        .find(collection, filter, limit.filter(|l| *l > 0))
        .await
}

/// Stringifies a record id: ObjectIds as 24-char hex, strings verbatim,
/// anything else via its display form.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Maps a stored record to its public JSON form, replacing `_id` with a
/// string `id`.
pub fn to_public_record(mut record: Document) -> Value {
    let id = record.remove("_id").map(|id| id_to_string(&id));

    let mut object: Map<String, Value> = record
        .into_iter()
        .map(|(key, value)| (key, to_json(value)))
        .collect();

    if let Some(id) = id {
        object.insert("id".to_string(), Value::String(id));
    }

    Value::Object(object)
}

fn to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}
