use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use studydesk_core::Task;

use crate::error::ApiResult;
use crate::state::SharedState;

#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<String>,
}

pub async fn list_tasks(
    State(state): State<SharedState>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Json<Value>> {
    let tasks = state.tasks.list_tasks(query.status.as_deref())?;
    Ok(Json(json!({ "success": true, "tasks": tasks })))
}

pub async fn get_task(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let task = state.tasks.get_task(&task_id)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

pub async fn create_task(
    State(state): State<SharedState>,
    Json(task): Json<Task>,
) -> ApiResult<Json<Value>> {
    let task = state.tasks.create_task(task)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

pub async fn update_task(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
    Json(task): Json<Task>,
) -> ApiResult<Json<Value>> {
    let task = state.tasks.update_task(&task_id, task)?;
    Ok(Json(json!({ "success": true, "task": task })))
}

pub async fn delete_task(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.tasks.delete_task(&task_id)?;
    Ok(Json(json!({ "success": true })))
}
