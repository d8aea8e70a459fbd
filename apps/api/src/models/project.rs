use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{require_filled, SchemaViolation, Validate};

/// Portfolio project entry, backed by `projects.json`.
///
/// `highlights` keeps the absent/empty distinction: a project with no
/// `highlights` key renders differently from one with an empty list, so
/// the field is optional rather than defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub project_technically_led: bool,
    #[serde(default)]
    pub was_llm_used: bool,
    #[serde(default)]
    pub was_agents_used: bool,
    pub summary: String,
    #[serde(default)]
    pub stack: Vec<String>,
    pub impact: String,
    pub icon: String,
    pub business_description: String,
    pub technical_description: String,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
}

impl Validate for Project {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("name", &self.name)?;
        require_filled("summary", &self.summary)?;
        require_filled("impact", &self.impact)?;
        require_filled("icon", &self.icon)?;
        require_filled("business_description", &self.business_description)?;
        require_filled("technical_description", &self.technical_description)?;
        require_filled("scope", &self.scope)
    }
}
