//! Club profile shown on the landing page.

use serde::{Deserialize, Serialize};

use super::{null_as_default, Document, FieldChecks, ValidationError};

/// General information about the club. Colors are hex strings; their format is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub vision: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
}

impl Document for ClubInfo {
    const COLLECTION: &'static str = "clubinfo";

    fn validate(&self) -> Result<(), ValidationError> {
        FieldChecks::new().required("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_full_club_info() {
        let info: ClubInfo = serde_json::from_value(json!({
            "name": "Robotics Club",
            "tagline": "Build. Break. Repeat.",
            "primary_color": "#1e90ff",
            "secondary_color": "not-even-hex"
        }))
        .unwrap();

        assert!(info.validate().is_ok());
        assert_eq!(info.tagline.as_deref(), Some("Build. Break. Repeat."));
        assert_eq!(info.secondary_color.as_deref(), Some("not-even-hex"));
        assert!(info.about.is_none());
    }

    #[test]
    fn test_validate_requires_name() {
        let info: ClubInfo = serde_json::from_value(json!({ "tagline": "Nameless" })).unwrap();

        let err = info.validate().unwrap_err();
        assert!(err.has_field("name"));
    }
}
