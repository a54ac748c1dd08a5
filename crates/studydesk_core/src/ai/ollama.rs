//! Ollama `/api/generate` client.
//!
//! # Invariants
//! - Requests are non-streaming (`stream: false`).
//! - A missing `response` field decodes as empty text.

use super::{GenerationBackend, GenerationError, GenerationResult};
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
pub const DEFAULT_OLLAMA_TIMEOUT_SECS: u64 = 300;

/// Connection settings for an Ollama server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
    /// Per-request timeout; `0` waits indefinitely.
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout_secs: DEFAULT_OLLAMA_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Generation backend talking to a local Ollama server.
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl OllamaBackend {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
            timeout: (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs)),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        let started_at = Instant::now();
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let mut builder = self.client.post(self.generate_url()).json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|err| GenerationError::Decode(err.to_string()))?;

        debug!(
            "event=ollama_generate module=ai status=ok model={} duration_ms={} prompt_chars={}",
            self.model,
            started_at.elapsed().as_millis(),
            prompt.chars().count()
        );
        Ok(decoded.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{OllamaBackend, OllamaConfig};

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = OllamaBackend::new(OllamaConfig {
            base_url: "http://127.0.0.1:11434/".to_string(),
            ..OllamaConfig::default()
        });
        assert_eq!(backend.generate_url(), "http://127.0.0.1:11434/api/generate");
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let backend = OllamaBackend::new(OllamaConfig {
            timeout_secs: 0,
            ..OllamaConfig::default()
        });
        assert!(backend.timeout.is_none());
        assert_eq!(backend.model(), "llama3.2");
    }
}
