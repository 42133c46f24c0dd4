//! Root endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
