//! Document schemas for the club website collections.
//!
//! Every inbound body and every stored document is deserialized into one of these
//! structs and passes [`Document::validate`] before it is written or returned, so the typed structs here are the only shape the
//! API ever exposes.

mod club;
mod event;
mod fields;
mod member;
mod social;

pub use club::*;
pub use event::*;
pub use fields::*;
pub use member::*;
pub use social::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Field holding the storage-generated identifier of a stored document.
pub const INTERNAL_ID_FIELD: &str = "_id";

/// A document kind stored in its own collection.
pub trait Document: Serialize + DeserializeOwned + Send + 'static {
    /// Collection name: the lowercase entity type name.
    const COLLECTION: &'static str;

    /// Check the constraints serde cannot: required values present, URLs well formed.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Deserialize and validate a stored document.
    ///
    /// Storage-internal fields are stripped first. Unknown fields are ignored.
    fn from_document(document: Map<String, Value>) -> Result<Self, ValidationError> {
        let parsed: Self = serde_json::from_value(Value::Object(strip_internal_fields(document)))
            .map_err(|e| ValidationError::body(e.to_string()))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Convert the validated document into the field mapping handed to storage.
    fn to_document(&self) -> serde_json::Result<Map<String, Value>> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

/// Remove storage-internal fields from a stored document.
///
/// Drops the identifier field and any other underscore-prefixed key the store may
/// attach, so they can never reach a response.
pub fn strip_internal_fields(mut document: Map<String, Value>) -> Map<String, Value> {
    document.retain(|key, _| key != INTERNAL_ID_FIELD && !key.starts_with('_'));
    document
}
