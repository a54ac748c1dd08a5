use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use studydesk_core::Habit;

use crate::error::ApiResult;
use crate::state::SharedState;

pub async fn list_habits(State(state): State<SharedState>) -> ApiResult<Json<Value>> {
    let habits = state.habits.list_habits()?;
    Ok(Json(json!({ "success": true, "habits": habits })))
}

pub async fn get_habit(
    State(state): State<SharedState>,
    Path(habit_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let habit = state.habits.get_habit(&habit_id)?;
    Ok(Json(json!({ "success": true, "habit": habit })))
}

pub async fn create_habit(
    State(state): State<SharedState>,
    Json(habit): Json<Habit>,
) -> ApiResult<Json<Value>> {
    let habit = state.habits.create_habit(habit)?;
    Ok(Json(json!({ "success": true, "habit": habit })))
}

pub async fn update_habit(
    State(state): State<SharedState>,
    Path(habit_id): Path<String>,
    Json(habit): Json<Habit>,
) -> ApiResult<Json<Value>> {
    let habit = state.habits.update_habit(&habit_id, habit)?;
    Ok(Json(json!({ "success": true, "habit": habit })))
}

pub async fn delete_habit(
    State(state): State<SharedState>,
    Path(habit_id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.habits.delete_habit(&habit_id)?;
    Ok(Json(json!({ "success": true })))
}

pub async fn track_habit(
    State(state): State<SharedState>,
    Path(habit_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let habit = state.habits.track_habit(&habit_id)?;
    Ok(Json(json!({ "success": true, "habit": habit })))
}
