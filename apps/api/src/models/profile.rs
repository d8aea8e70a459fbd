use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{
    require_absolute_url, require_email, require_filled, validate_all, SchemaViolation, Validate,
};

/// A labeled outbound link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Landing-page profile card, backed by `profile.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Validate for Link {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("label", &self.label)?;
        require_absolute_url("url", &self.url)
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("name", &self.name)?;
        require_filled("role", &self.role)?;
        require_filled("tagline", &self.tagline)?;
        require_filled("location", &self.location)?;
        require_email("email", &self.email)?;
        validate_all(&self.links, "links")
    }
}
