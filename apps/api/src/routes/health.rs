use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Constant liveness probe; never touches the data directory.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
