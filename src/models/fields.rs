//! Field-level validation errors and checks shared by the document schemas.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All constraint failures found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// A body that could not be deserialized into the schema at all.
    pub fn body(message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new("body", message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether any failure concerns the given field (or one of its items).
    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.field == field || e.field.starts_with(&format!("{}[", field)))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.errors.len() == 1 { "" } else { "s" };
        write!(f, "{} validation error{}", self.errors.len(), plural)?;
        for (i, err) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, err.field, err.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Deserialize `null` the same as an absent field.
///
/// Pair with `#[serde(default)]` so both cases produce `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collects constraint failures that serde cannot express.
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required strings default to empty when absent, so empty means missing.
    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.errors.push(FieldError::new(field, "field required"));
        } else if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, "must not be blank"));
        }
        self
    }

    pub fn url(&mut self, field: &str, value: &str) -> &mut Self {
        if let Err(message) = check_http_url(value) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn required_url(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.required(field, value)
        } else {
            self.url(field, value)
        }
    }

    pub fn optional_url(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => self.url(field, value),
            None => self,
        }
    }

    pub fn urls(&mut self, field: &str, values: &[String]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            self.url(&format!("{}[{}]", field, i), value);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(std::mem::take(&mut self.errors)))
        }
    }
}

/// Accept absolute `http`/`https` URLs with a host.
pub fn check_http_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("invalid URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("URL scheme '{}' is not allowed", other)),
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err("URL host is required".to_string()),
    }
}
