//! Collection endpoints, one list and one create route per document kind.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::InsertedId;
use crate::errors::AppError;
use crate::models::{Document, ValidationError};
use crate::AppState;

/// GET /api/{collection} - List every document of the collection.
pub async fn list_documents<T: Document>(
    State(state): State<AppState>,
) -> Result<Json<Vec<T>>, AppError> {
    let store = state.store()?;
    let stored = store.list_all(T::COLLECTION).await?;

    let documents = stored
        .into_iter()
        .map(|doc| {
            T::from_document(doc).map_err(|e| {
                AppError::Internal(format!(
                    "Stored {} document failed validation: {}",
                    T::COLLECTION,
                    e
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(documents))
}

/// POST /api/{collection} - Validate and insert one document.
pub async fn create_document<T: Document>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<InsertedId>, AppError> {
    let Json(document) = payload.map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => ValidationError::body(e.body_text()).into(),
        other => AppError::BadRequest(other.body_text()),
    })?;

    // Validate before touching storage
    document.validate()?;

    let store = state.store()?;
    let inserted_id = store.insert(T::COLLECTION, document.to_document()?).await?;
    tracing::info!(collection = T::COLLECTION, id = %inserted_id, "Created document");

    Ok(Json(InsertedId { inserted_id }))
}
