#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use mongodb::bson::{oid::ObjectId, Document};
use portfolio_service::config::{CorsConfig, MongoConfig, PortfolioConfig};
use portfolio_service::services::DocumentStore;
use portfolio_service::startup::{build_router, AppState};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// `DocumentStore` backed by a map of collections, standing in for MongoDB.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Document>>>,
    failure: Option<String>,
}

impl InMemoryStore {
    /// A store whose every call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            collections: Mutex::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn seed(&self, collection: &str, record: Document) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    pub fn records(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

fn matches(record: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| record.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert(&self, collection: &str, mut record: Document) -> Result<String, AppError> {
        self.check()?;
        let id = ObjectId::new();
        record.insert("_id", id);
        self.seed(collection, record);
        Ok(id.to_hex())
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        self.check()?;
        let take = limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(self
            .records(collection)
            .into_iter()
            .filter(|record| matches(record, &filter))
            .take(take)
            .collect())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.check()?;
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}

/// Config pointing at `uri`, for exercising the real MongoDB connect path.
pub fn test_config_with_uri(uri: &str) -> PortfolioConfig {
    let mut config = test_config(true);
    config.mongodb.uri = Some(uri.to_string());
    config
}

pub fn test_config(with_database: bool) -> PortfolioConfig {
    let mongodb = if with_database {
        MongoConfig {
            uri: Some("mongodb://localhost:27017".to_string()),
            database: Some("portfolio_test".to_string()),
        }
    } else {
        MongoConfig::default()
    };

    PortfolioConfig {
        common: CoreConfig {
            port: 0,
            ..CoreConfig::default()
        },
        mongodb,
        cors: CorsConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Option<Arc<InMemoryStore>>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::default())
    }

    pub fn with_store(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        let state = AppState {
            config: test_config(true),
            store: Some(store.clone() as Arc<dyn DocumentStore>),
        };
        Self {
            router: build_router(state),
            store: Some(store),
        }
    }

    pub fn without_store() -> Self {
        let state = AppState {
            config: test_config(false),
            store: None,
        };
        Self {
            router: build_router(state),
            store: None,
        }
    }

    pub fn store(&self) -> &InMemoryStore {
        self.store.as_deref().expect("test app has no store")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }
}
