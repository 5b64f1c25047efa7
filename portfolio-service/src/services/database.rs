use super::documents::id_to_string;
use super::store::DocumentStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds the shared client. The driver connects lazily, so this only
    /// fails on a malformed connection string.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let mut options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        options.app_name = Some("portfolio-service".to_string());

        let client = MongoClient::with_options(options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }
}

#[async_trait]
impl DocumentStore for MongoDb {
    async fn insert(&self, collection: &str, record: Document) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;

        Ok(id_to_string(&result.inserted_id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            AppError::from(e)
        })
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.db.list_collection_names(None).await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
