//! SQLite-backed document store.
//!
//! Documents are kept as JSON text in a single table, namespaced by database name and
//! collection. Rowid order is insertion order, so listing a collection is stable.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use uuid::Uuid;

use super::DocumentStore;
use crate::errors::AppError;
use crate::models::INTERNAL_ID_FIELD;

/// Document store over a SQLite database file.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    database: String,
}

impl SqliteDocumentStore {
    /// Open (creating if needed) the database at `url` and run migrations.
    ///
    /// `url` is either a `sqlite:` connection string or a plain file path.
    pub async fn open(url: &str, database: &str) -> Result<Self, AppError> {
        let pool = init_database(url).await?;
        Ok(Self::new(pool, database))
    }

    pub fn new(pool: SqlitePool, database: &str) -> Self {
        Self {
            pool,
            database: database.to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn insert(
        &self,
        collection: &str,
        document: Map<String, Value>,
    ) -> Result<String, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let body = serde_json::to_string(&document)?;

        sqlx::query(
            "INSERT INTO documents (id, namespace, collection, body, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&self.database)
        .bind(collection)
        .bind(&body)
        .bind(now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(collection, id = %id, "Inserted document");
        Ok(id.simple().to_string())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Map<String, Value>>, AppError> {
        let rows = sqlx::query(
            "SELECT id, body FROM documents WHERE namespace = ? AND collection = ? ORDER BY rowid",
        )
        .bind(&self.database)
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(document_from_row).collect()
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query(
            "SELECT DISTINCT collection FROM documents WHERE namespace = ? ORDER BY collection",
        )
        .bind(&self.database)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("collection")).collect())
    }
}

/// Initialize the connection pool and run migrations.
pub async fn init_database(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = if url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(url)?
    } else {
        let path = Path::new(url);
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        SqliteConnectOptions::new().filename(path)
    };

    let options = options
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id BLOB PRIMARY KEY,
            namespace TEXT NOT NULL,
            collection TEXT NOT NULL,
            body TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(namespace, collection);",
    )
    .execute(pool)
    .await?;

    Ok(())
}

fn document_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Map<String, Value>, AppError> {
    let id: Uuid = row.get("id");
    let body: String = row.get("body");
    let mut document: Map<String, Value> = serde_json::from_str(&body)?;
    document.insert(
        INTERNAL_ID_FIELD.to_string(),
        Value::String(id.simple().to_string()),
    );
    Ok(document)
}
