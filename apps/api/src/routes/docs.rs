//! Interactive API documentation, mounted only outside production.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::cv::{Cv, CvCertification, CvEducation, CvExperience, CvPersonal};
use crate::models::profile::{Link, Profile};
use crate::models::project::Project;
use crate::models::site::{EvangelistPanel, InfoPoint, Technology};
use crate::routes::{files, health, resources};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personal Page API",
        description = "JSON-backed portfolio data and CV file exchange"
    ),
    paths(
        health::health_handler,
        resources::profile,
        resources::cv,
        resources::projects,
        resources::technologies,
        resources::info_points,
        resources::evangelist,
        files::download_cv,
        files::photo,
        files::upload_cv,
    ),
    components(schemas(
        Profile,
        Link,
        Cv,
        CvPersonal,
        CvExperience,
        CvEducation,
        CvCertification,
        Project,
        Technology,
        InfoPoint,
        EvangelistPanel,
        files::UploadResponse,
    ))
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi())
}
