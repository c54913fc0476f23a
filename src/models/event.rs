//! Club events and their photo galleries.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Document, FieldChecks, ValidationError};

/// An event the club ran or is planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free-form, e.g. `2024-03-01` or `Spring semester`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Document for Event {
    const COLLECTION: &'static str = "event";

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("title", &self.title)
            .required("date", &self.date)
            .optional_url("cover_image", self.cover_image.as_deref())
            .urls("gallery", &self.gallery)
            .finish()
    }
}
