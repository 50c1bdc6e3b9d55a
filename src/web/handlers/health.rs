// GET /health — liveness check for the hosting platform.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Always returns 200 OK.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "ok": true, "message": "Backend running fine!" })),
    )
}
