pub mod database;
pub mod diagnostics;
pub mod documents;
pub mod metrics;
pub mod store;

pub use database::MongoDb;
pub use documents::{create_document, get_documents, to_public_record};
pub use metrics::{get_metrics, init_metrics};
pub use store::DocumentStore;
