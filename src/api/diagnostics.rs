//! Liveness and database diagnostic endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::AppState;

/// Longest storage error excerpt included in the diagnostic report.
const MAX_ERROR_EXCERPT: usize = 80;

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET / - Static liveness message.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "College Club API running" }))
}

/// GET /test - Report configuration and storage reachability. Never fails.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_marker(state.config.database_url.is_some()),
        database_name: set_marker(state.config.database_name.is_some()),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match &state.store {
        None => report.database = "❌ Not Initialized".to_string(),
        Some(store) => match store.list_collection_names().await {
            Ok(collections) => {
                report.collections = collections;
                report.database = "✅ Connected & Working".to_string();
                report.connection_status = "Connected".to_string();
            }
            Err(e) => {
                tracing::warn!("Database introspection failed: {}", e);
                let excerpt: String = e.message().chars().take(MAX_ERROR_EXCERPT).collect();
                report.database = format!("⚠️ Connected but error: {}", excerpt);
            }
        },
    }

    Json(report)
}

fn set_marker(present: bool) -> String {
    if present { "✅ Set" } else { "❌ Not Set" }.to_string()
}
