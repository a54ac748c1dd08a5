//! Document-aware question answering through a generation backend.
//!
//! # Responsibility
//! - Resolve optional document context and assemble the prompt.
//! - Forward the prompt in one request and classify the result.
//!
//! # Invariants
//! - Unknown document ids and unreadable files degrade to a context-free
//!   prompt; they never fail the call.
//! - Backend failures become `AskOutcome::Failed`, not `ServiceError`.

use crate::ai::GenerationBackend;
use crate::model::document::Document;
use crate::repo::file_store::DocumentFileStore;
use crate::repo::{RepoError, Repository};
use crate::service::ServiceResult;
use log::{info, warn};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Instant;

/// Question payload accepted by the assistant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    /// Non-string ids are treated as absent.
    #[serde(default, deserialize_with = "string_or_absent")]
    pub document_id: Option<String>,
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        _ => None,
    })
}

/// Result of one assistant call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    Answered(String),
    Failed { backend: String, reason: String },
}

impl AskOutcome {
    /// Text shown to the caller for either outcome.
    pub fn answer_text(&self) -> String {
        match self {
            Self::Answered(text) => text.clone(),
            Self::Failed { backend, reason } => format!("Error contacting {backend}: {reason}"),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Document text attached to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub title: String,
    pub content: String,
}

/// Builds the generation prompt, embedding the document when it has content.
pub fn build_prompt(question: &str, context: Option<&PromptContext>) -> String {
    match context.filter(|context| !context.content.is_empty()) {
        Some(context) => format!(
            "\nHere is a document:\nTitle: {}\nContent:\n{}\n\nUser instruction: {}\n\nAnswer based solely on the above document.\nRespond concisely and clearly.\n",
            context.title, context.content, question
        ),
        None => format!("User instruction: {question}\nAnswer without document context."),
    }
}

/// Assistant proxy over a document collection and a generation backend.
pub struct AssistantService<R: Repository<Document>, B: GenerationBackend> {
    documents: R,
    files: DocumentFileStore,
    backend: B,
}

impl<R: Repository<Document>, B: GenerationBackend> AssistantService<R, B> {
    pub fn new(documents: R, files: DocumentFileStore, backend: B) -> Self {
        Self {
            documents,
            files,
            backend,
        }
    }

    /// Answers one question, optionally grounded in an uploaded document.
    ///
    /// # Errors
    /// Only storage faults while looking up the document; generation failures
    /// are reported through `AskOutcome::Failed`.
    pub async fn ask(&self, request: &AskRequest) -> ServiceResult<AskOutcome> {
        let question = request.question.trim();
        let context = self.resolve_context(request.document_id.as_deref())?;
        let prompt = build_prompt(question, context.as_ref());

        let started_at = Instant::now();
        let outcome = match self.backend.generate(&prompt).await {
            Ok(answer) => {
                info!(
                    "event=assistant_ask module=service status=ok backend={} with_document={} duration_ms={}",
                    self.backend.name(),
                    context.is_some(),
                    started_at.elapsed().as_millis()
                );
                AskOutcome::Answered(answer)
            }
            Err(err) => {
                warn!(
                    "event=assistant_ask module=service status=error backend={} duration_ms={} error={}",
                    self.backend.name(),
                    started_at.elapsed().as_millis(),
                    err
                );
                AskOutcome::Failed {
                    backend: self.backend.name().to_string(),
                    reason: err.to_string(),
                }
            }
        };
        Ok(outcome)
    }

    fn resolve_context(&self, document_id: Option<&str>) -> ServiceResult<Option<PromptContext>> {
        let Some(id) = document_id.filter(|id| !id.is_empty()) else {
            return Ok(None);
        };

        let document = match self.documents.get(id) {
            Ok(document) => document,
            Err(RepoError::NotFound { .. }) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let content = self.files.read_text(&document);
        if content.is_empty() {
            return Ok(None);
        }
        Ok(Some(PromptContext {
            title: document.title,
            content,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, AskOutcome, AskRequest, PromptContext};

    #[test]
    fn prompt_without_context_is_single_instruction() {
        assert_eq!(
            build_prompt("Hello", None),
            "User instruction: Hello\nAnswer without document context."
        );
    }

    #[test]
    fn prompt_embeds_title_and_content() {
        let context = PromptContext {
            title: "notes.txt".to_string(),
            content: "Mitochondria are organelles.".to_string(),
        };
        let prompt = build_prompt("What are mitochondria?", Some(&context));

        assert!(prompt.starts_with("\nHere is a document:\nTitle: notes.txt\nContent:\n"));
        assert!(prompt.contains("Mitochondria are organelles.\n\nUser instruction: What are mitochondria?"));
        assert!(prompt.ends_with("Respond concisely and clearly.\n"));
    }

    #[test]
    fn empty_content_falls_back_to_plain_prompt() {
        let context = PromptContext {
            title: "empty.txt".to_string(),
            content: String::new(),
        };
        assert!(build_prompt("q", Some(&context)).starts_with("User instruction: q"));
    }

    #[test]
    fn non_string_document_id_decodes_as_absent() {
        for payload in [
            r#"{"question":"Hi","document_id":42}"#,
            r#"{"question":"Hi","document_id":null}"#,
            r#"{"question":"Hi","document_id":{"id":"x"}}"#,
            r#"{"question":"Hi"}"#,
        ] {
            let request: AskRequest = serde_json::from_str(payload).unwrap();
            assert_eq!(request.document_id, None, "payload {payload}");
        }

        let request: AskRequest =
            serde_json::from_str(r#"{"question":"Hi","document_id":"doc-1"}"#).unwrap();
        assert_eq!(request.document_id.as_deref(), Some("doc-1"));
    }

    #[test]
    fn failure_text_names_backend() {
        let outcome = AskOutcome::Failed {
            backend: "Ollama".to_string(),
            reason: "request failed: connection refused".to_string(),
        };
        assert!(outcome.is_failure());
        assert_eq!(
            outcome.answer_text(),
            "Error contacting Ollama: request failed: connection refused"
        );
    }
}
