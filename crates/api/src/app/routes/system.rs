use axum::{Json, http::StatusCode, response::IntoResponse};

/// GET /health - liveness check, no authentication.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "Healthy" })))
}
