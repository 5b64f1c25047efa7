use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;

/// The persistence seam used by the HTTP layer.
///
/// Implementations issue exactly one database call per method and never
/// retry.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts `record` into `collection` and returns the new id as a string.
    async fn insert(&self, collection: &str, record: Document) -> Result<String, AppError>;

    /// Returns the records of `collection` matching `filter` in natural
    /// order. `None` means no limit.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
