//! Text generation backends used by the assistant.
//!
//! # Responsibility
//! - Define the seam between the assistant service and an external
//!   language-model server.
//! - Classify failures so callers can decide how to surface them.

pub mod ollama;

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub use ollama::{OllamaBackend, OllamaConfig};

pub type GenerationResult<T> = Result<T, GenerationError>;

/// Failure talking to a generation service.
#[derive(Debug)]
pub enum GenerationError {
    /// Connection, timeout or other transport-level failure.
    Transport(String),
    /// The service answered with a non-success HTTP status.
    Status { status: u16, body: String },
    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::Status { status, body } => write!(f, "service returned {status}: {body}"),
            Self::Decode(message) => write!(f, "invalid response: {message}"),
        }
    }
}

impl Error for GenerationError {}

/// A single-shot, non-streaming text generator.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short name used in logs and user-facing failure text.
    fn name(&self) -> &str;

    /// Sends one prompt and returns the generated text.
    async fn generate(&self, prompt: &str) -> GenerationResult<String>;
}

#[async_trait]
impl<B: GenerationBackend + ?Sized> GenerationBackend for Arc<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        (**self).generate(prompt).await
    }
}
