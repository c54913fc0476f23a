//! Team member model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_default, Document, FieldChecks, ValidationError};

/// A member of the club team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Role in the club, e.g. `President`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Platform name to handle, link, or any richer value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub socials: Map<String, Value>,
}

impl Document for Member {
    const COLLECTION: &'static str = "member";

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new()
            .required("name", &self.name)
            .required("role", &self.role)
            .optional_url("avatar", self.avatar.as_deref())
            .finish()
    }
}
