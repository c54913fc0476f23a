//! Document store backing the club collections.
//!
//! The API only needs three things from storage: insert one document, list a whole
//! collection, and list collection names. [`DocumentStore`] captures exactly that so the
//! router can be handed a SQLite store in production and a fake in tests.

mod memory;
mod sqlite;

pub use memory::*;
pub use sqlite::*;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::errors::AppError;

/// `DATABASE_URL` value selecting the process-local store.
pub const MEMORY_URL: &str = "memory://";

/// Schema-flexible storage of JSON documents grouped into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its generated identifier.
    async fn insert(&self, collection: &str, document: Map<String, Value>)
        -> Result<String, AppError>;

    /// Every document in the collection, each carrying its identifier under `_id`.
    ///
    /// An unknown collection is empty, not an error.
    async fn list_all(&self, collection: &str) -> Result<Vec<Map<String, Value>>, AppError>;

    /// Names of collections holding at least one document.
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;
}

/// Storage handle shared by all requests.
pub type SharedStore = Arc<dyn DocumentStore>;

/// Open the configured store.
///
/// Returns `None` when the database is not configured or cannot be opened; the server
/// still starts and data routes report a storage error.
pub async fn connect(config: &Config) -> Option<SharedStore> {
    let (Some(url), Some(database)) = (&config.database_url, &config.database_name) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, running without a database");
        return None;
    };

    if url == MEMORY_URL {
        tracing::info!("Using in-memory document store");
        return Some(Arc::new(MemoryDocumentStore::new()));
    }

    match SqliteDocumentStore::open(url, database).await {
        Ok(store) => {
            tracing::info!(database = %database, "Document store initialized");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::error!("Failed to initialize document store: {}", e);
            None
        }
    }
}
