use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use studydesk_core::{generate_day_plan, today_plan, PlannerPreferences};

#[derive(Debug, Deserialize)]
pub struct PlannerRequest {
    pub preferences: PlannerPreferences,
}

pub async fn generate_plan(Json(request): Json<PlannerRequest>) -> Json<Value> {
    let plan = generate_day_plan(&request.preferences);
    Json(json!({ "success": true, "plan": plan }))
}

pub async fn get_today_plan() -> Json<Value> {
    Json(json!({ "success": true, "plan": today_plan() }))
}
