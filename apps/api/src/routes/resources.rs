//! JSON resource handlers. Each one re-reads its backing file, validates
//! the record(s) against the resource schema, and echoes the data back.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::cv::Cv;
use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::models::site::{EvangelistPanel, InfoPoint, Technology};
use crate::state::AppState;
use crate::store;
use crate::validation::{validate_all, Validate};

/// GET /api/profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses((status = 200, body = Profile), (status = 500, description = "Backing data missing or invalid"))
)]
pub async fn profile(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let profile: Profile = state.store.fetch(store::PROFILE_FILE).await?;
    profile.validate()?;
    Ok(Json(profile))
}

/// GET /api/cv
#[utoipa::path(
    get,
    path = "/api/cv",
    responses((status = 200, body = Cv), (status = 500, description = "Backing data missing or invalid"))
)]
pub async fn cv(State(state): State<AppState>) -> Result<Json<Cv>, AppError> {
    let cv: Cv = state.store.fetch(store::CV_FILE).await?;
    cv.validate()?;
    Ok(Json(cv))
}

/// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, body = [Project]), (status = 500, description = "Backing data missing or invalid"))
)]
pub async fn projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects: Vec<Project> = state.store.fetch(store::PROJECTS_FILE).await?;
    validate_all(&projects, "projects")?;
    Ok(Json(projects))
}

/// GET /api/technologies
#[utoipa::path(
    get,
    path = "/api/technologies",
    responses((status = 200, body = [Technology]), (status = 500, description = "Backing data missing or invalid"))
)]
pub async fn technologies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Technology>>, AppError> {
    let technologies: Vec<Technology> = state.store.fetch(store::TECHNOLOGIES_FILE).await?;
    validate_all(&technologies, "technologies")?;
    Ok(Json(technologies))
}

/// GET /api/info-points
#[utoipa::path(
    get,
    path = "/api/info-points",
    responses((status = 200, body = [InfoPoint]), (status = 500, description = "Backing data missing or invalid"))
)]
pub async fn info_points(State(state): State<AppState>) -> Result<Json<Vec<InfoPoint>>, AppError> {
    let info_points: Vec<InfoPoint> = state.store.fetch(store::INFO_POINTS_FILE).await?;
    validate_all(&info_points, "info_points")?;
    Ok(Json(info_points))
}

/// GET /api/evangelist
#[utoipa::path(
    get,
    path = "/api/evangelist",
    responses((status = 200, body = [EvangelistPanel]), (status = 500, description = "Backing data missing or invalid"))
)]
pub async fn evangelist(
    State(state): State<AppState>,
) -> Result<Json<Vec<EvangelistPanel>>, AppError> {
    let panels: Vec<EvangelistPanel> = state.store.fetch(store::EVANGELIST_FILE).await?;
    validate_all(&panels, "evangelist")?;
    Ok(Json(panels))
}
