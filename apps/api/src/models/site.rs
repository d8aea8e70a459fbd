//! Small presentation records for the landing page: the technology
//! timeline, the positioned info points, and the evangelist panels.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{require_filled, SchemaViolation, Validate};

/// Timeline entry, backed by `technologies.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Technology {
    pub name: String,
    pub start: String,
    pub description: String,
}

/// Positioned annotation dot, backed by `info_points.json`. `offset` is a
/// pixel offset and may be negative; `top` is a CSS length kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoPoint {
    pub id: String,
    pub title: String,
    pub body: String,
    pub offset: i64,
    pub top: String,
}

/// Opinion panel, backed by `evangelist.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvangelistPanel {
    pub title: String,
    pub body: String,
}

impl Validate for Technology {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("name", &self.name)?;
        require_filled("start", &self.start)?;
        require_filled("description", &self.description)
    }
}

impl Validate for InfoPoint {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("id", &self.id)?;
        require_filled("title", &self.title)?;
        require_filled("body", &self.body)?;
        require_filled("top", &self.top)
    }
}

impl Validate for EvangelistPanel {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("title", &self.title)?;
        require_filled("body", &self.body)
    }
}
