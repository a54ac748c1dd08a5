use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::SharedState;

pub async fn dashboard_stats(State(state): State<SharedState>) -> ApiResult<Json<Value>> {
    let dashboard = state.dashboard.dashboard()?;
    Ok(Json(json!({
        "success": true,
        "statistics": dashboard.statistics,
        "recent_activity": dashboard.recent_activity,
    })))
}
