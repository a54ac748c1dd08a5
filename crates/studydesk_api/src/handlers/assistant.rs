use axum::extract::State;
use axum::Json;
use serde::Serialize;
use studydesk_core::AskRequest;

use crate::error::ApiResult;
use crate::state::SharedState;

/// Response body for `/ai/ask`.
///
/// Generation failures still answer `success: true`; the failure text is
/// carried in `answer`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub success: bool,
    pub answer: String,
}

pub async fn ask(
    State(state): State<SharedState>,
    Json(request): Json<AskRequest>,
) -> ApiResult<Json<AskResponse>> {
    let outcome = state.assistant.ask(&request).await?;
    Ok(Json(AskResponse {
        success: true,
        answer: outcome.answer_text(),
    }))
}
