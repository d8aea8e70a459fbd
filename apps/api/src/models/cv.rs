use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{require_email, require_filled, validate_all, SchemaViolation, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CvPersonal {
    pub name: String,
    pub location: String,
    pub nationality: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CvExperience {
    pub start: String,
    pub end: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CvEducation {
    pub school: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CvCertification {
    pub school: String,
    pub degree: String,
    pub period: String,
}

/// Full curriculum vitae, backed by `cv.json`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Cv {
    pub summary: String,
    pub personal: CvPersonal,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<CvExperience>,
    #[serde(default)]
    pub education: Vec<CvEducation>,
    #[serde(default)]
    pub certifications: Vec<CvCertification>,
    #[serde(default)]
    pub hobby: Vec<String>,
}

impl Validate for CvPersonal {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("name", &self.name)?;
        require_filled("location", &self.location)?;
        require_filled("nationality", &self.nationality)?;
        require_email("email", &self.email)?;
        require_filled("phone", &self.phone)
    }
}

impl Validate for CvExperience {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("start", &self.start)?;
        require_filled("end", &self.end)?;
        require_filled("company", &self.company)?;
        require_filled("role", &self.role)
    }
}

impl Validate for CvEducation {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("school", &self.school)?;
        require_filled("degree", &self.degree)?;
        require_filled("period", &self.period)
    }
}

impl Validate for CvCertification {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("school", &self.school)?;
        require_filled("degree", &self.degree)?;
        require_filled("period", &self.period)
    }
}

impl Validate for Cv {
    fn validate(&self) -> Result<(), SchemaViolation> {
        require_filled("summary", &self.summary)?;
        self.personal
            .validate()
            .map_err(|violation| violation.nested("personal"))?;
        validate_all(&self.experience, "experience")?;
        validate_all(&self.education, "education")?;
        validate_all(&self.certifications, "certifications")
    }
}
