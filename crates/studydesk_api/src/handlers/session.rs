use axum::Json;
use serde_json::{json, Value};

pub const GUEST_USER_ID: &str = "guest";
pub const GUEST_USER_NAME: &str = "Guest";

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Stub login: every caller is the guest user.
pub async fn login_guest() -> Json<Value> {
    Json(json!({
        "success": true,
        "user": { "name": GUEST_USER_NAME, "id": GUEST_USER_ID }
    }))
}
