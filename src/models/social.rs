//! Club social media links.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Document, FieldChecks, ValidationError};

/// A social media profile of the club.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    /// e.g. Instagram, Twitter, LinkedIn
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub handle: Option<String>,
}

impl Document for Social {
    const COLLECTION: &'static str = "social";

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("platform", &self.platform)
            .required_url("url", &self.url)
            .finish()
    }
}
