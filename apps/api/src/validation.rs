//! Schema primitives shared by the resource models.
//!
//! Backing data is operator-maintained JSON, so a violation here is a
//! server-side fault: the facade maps `SchemaViolation` to a 5xx, never
//! to a client error.

use thiserror::Error;
use url::Url;
use validator::ValidateEmail;

/// A single broken constraint, addressed by dotted field path
/// (`personal.email`, `links[2].url`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' {constraint}")]
pub struct SchemaViolation {
    pub field: String,
    pub constraint: &'static str,
}

impl SchemaViolation {
    pub fn new(field: impl Into<String>, constraint: &'static str) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }

    /// Prefixes the field path with the parent object name.
    pub fn nested(mut self, parent: &str) -> Self {
        self.field = format!("{parent}.{}", self.field);
        self
    }

    /// Prefixes the field path with a sequence element address.
    pub fn at_index(mut self, parent: &str, index: usize) -> Self {
        self.field = format!("{parent}[{index}].{}", self.field);
        self
    }
}

/// A record that can check its own field constraints after deserialization.
/// Shape and primitive types are already enforced by serde; this covers
/// what the type system cannot express.
pub trait Validate {
    fn validate(&self) -> Result<(), SchemaViolation>;
}

/// Validates every element of a sequence, addressing failures by index.
pub fn validate_all<T: Validate>(items: &[T], parent: &str) -> Result<(), SchemaViolation> {
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .map_err(|violation| violation.at_index(parent, index))?;
    }
    Ok(())
}

pub fn require_filled(field: &str, value: &str) -> Result<(), SchemaViolation> {
    if value.trim().is_empty() {
        return Err(SchemaViolation::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn require_email(field: &str, value: &str) -> Result<(), SchemaViolation> {
    if !value.validate_email() {
        return Err(SchemaViolation::new(
            field,
            "must be a well-formed email address",
        ));
    }
    Ok(())
}

pub fn require_absolute_url(field: &str, value: &str) -> Result<(), SchemaViolation> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(SchemaViolation::new(
            field,
            "must be an absolute http(s) URL",
        )),
    }
}
