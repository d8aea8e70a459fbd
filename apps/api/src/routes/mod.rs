pub mod docs;
pub mod files;
pub mod health;
pub mod resources;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::config::Config;
use crate::headers;
use crate::state::AppState;

/// Origin of the local frontend dev server, always permitted outside
/// production.
pub const DEV_ORIGIN: &str = "http://localhost:5173";

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/profile", get(resources::profile))
        .route("/api/cv", get(resources::cv))
        .route("/api/projects", get(resources::projects))
        .route("/api/technologies", get(resources::technologies))
        .route("/api/info-points", get(resources::info_points))
        .route("/api/evangelist", get(resources::evangelist))
        .route("/api/cv/download", get(files::download_cv))
        .route("/api/photo", get(files::photo))
        .route("/api/cv/upload", post(files::upload_cv));

    if !state.config.environment.is_production() {
        router = router.merge(docs::swagger_ui());
    }

    // Error collapse sits closest to the routes; security headers and CORS
    // decorate whatever it produces.
    let router = router.layer(middleware::from_fn_with_state(
        state.clone(),
        collapse_server_errors,
    ));
    let router = headers::apply(router).layer(cors_layer(&state.config));

    router.with_state(state)
}

/// In production, 5xx responses are replaced with a content-free envelope
/// so internals never reach an external caller. 4xx responses pass through
/// unchanged in both postures.
async fn collapse_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if state.config.environment.is_production() && response.status().is_server_error() {
        tracing::error!(status = %response.status(), "collapsed server error detail");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An internal server error occurred"
                }
            })),
        )
            .into_response();
    }
    response
}

/// Production grants cross-origin access only to configured origins; an
/// empty configuration grants none. Outside production the local dev
/// origin is always added. Read-style methods and a minimal header set.
fn cors_layer(config: &Config) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in &config.allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => tracing::warn!(%origin, "ignoring unparseable allowed origin"),
        }
    }
    if !config.environment.is_production() {
        if let Ok(dev) = DEV_ORIGIN.parse::<HeaderValue>() {
            origins.push(dev);
        }
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::HEAD])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE])
}
