use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;
use studydesk_core::Document;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;
use crate::upload::chunk_channel;

/// Multipart form field carrying the uploaded file.
const FILE_FIELD: &str = "file";

pub async fn list_documents(State(state): State<SharedState>) -> ApiResult<Json<Value>> {
    let documents = state.documents.list_documents()?;
    Ok(Json(json!({ "success": true, "documents": documents })))
}

pub async fn get_document(
    State(state): State<SharedState>,
    Path(doc_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let document = state.documents.get_document(&doc_id)?;
    Ok(Json(json!({ "success": true, "document": document })))
}

/// Accepts a multipart form with a `file` part.
///
/// The first `file` part is streamed to disk chunk by chunk; later parts are
/// not read.
///
/// # Returns
/// - 200 with the stored document metadata
/// - 400 if the form is malformed, the body breaks off, or there is no named
///   file part
pub async fn upload_document(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> ApiResult<Json<Value>> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::BadRequest(format!("Multipart error: {err}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("File part has no filename".to_string()))?;

        let document = stream_to_store(&state, filename, &mut field).await?;
        return Ok(Json(json!({ "success": true, "document": document })));
    }

    Err(ApiError::BadRequest(
        "Missing file in multipart form".to_string(),
    ))
}

async fn stream_to_store(
    state: &SharedState,
    filename: String,
    field: &mut Field<'_>,
) -> ApiResult<Document> {
    let (chunks, reader) = chunk_channel();
    let worker_state = Arc::clone(state);
    let worker = tokio::task::spawn_blocking(move || {
        worker_state
            .documents
            .upload_document_from(&filename, reader)
    });

    let mut read_error = None;
    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                // The writer stopped early; its own error is reported below.
                if chunks.send(Ok(chunk)).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(err) => {
                let message = format!("Read error: {err}");
                let _ = chunks.send(Err(io::Error::other(message.clone()))).await;
                read_error = Some(message);
                break;
            }
        }
    }
    drop(chunks);

    let stored = worker
        .await
        .map_err(|err| ApiError::Internal(format!("upload worker failed: {err}")))?;
    if let Some(message) = read_error {
        return Err(ApiError::BadRequest(message));
    }
    Ok(stored?)
}

pub async fn delete_document(
    State(state): State<SharedState>,
    Path(doc_id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.documents.delete_document(&doc_id)?;
    Ok(Json(json!({ "success": true })))
}

pub async fn summarize_document(
    State(state): State<SharedState>,
    Path(doc_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let summary = state.documents.summarize_document(&doc_id)?;
    Ok(Json(json!({ "success": true, "summary": summary })))
}

pub async fn document_quiz(
    State(state): State<SharedState>,
    Path(doc_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let questions = state.documents.document_quiz(&doc_id)?;
    Ok(Json(json!({ "success": true, "questions": questions })))
}
