//! Process-local document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::errors::AppError;
use crate::models::INTERNAL_ID_FIELD;

/// Keeps documents in memory for the life of the process. Insertion order is preserved.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<Map<String, Value>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Map<String, Value>,
    ) -> Result<String, AppError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        document.insert(INTERNAL_ID_FIELD.to_string(), Value::String(id.clone()));

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Map<String, Value>>, AppError> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self
            .collections
            .read()
            .await
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
