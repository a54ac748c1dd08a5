//! Server configuration.
//!
//! # Invariants
//! - A validated config has a non-empty model and an http(s) base URL.
//! - A configured frontend directory must exist at startup.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use studydesk_core::OllamaConfig;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPLOAD_DIR: &str = "uploaded_documents";
pub const DEFAULT_DATABASE_PATH: &str = "app.db";

/// Everything `serve` needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory receiving `{id}_{filename}` uploads.
    pub upload_dir: PathBuf,
    /// Static frontend served for unmatched paths.
    pub frontend_dir: Option<PathBuf>,
    /// SQLite file holding the relational schema.
    pub database_path: PathBuf,
    pub generation: OllamaConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            frontend_dir: None,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            generation: OllamaConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        let base_url = self.generation.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        if let Some(dir) = &self.frontend_dir {
            if !dir.is_dir() {
                return Err(ConfigError::MissingFrontendDir(dir.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyModel,
    InvalidBaseUrl(String),
    MissingFrontendDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyModel => write!(f, "generation model name cannot be empty"),
            Self::InvalidBaseUrl(url) => {
                write!(f, "generation base URL must start with http:// or https://, got `{url}`")
            }
            Self::MissingFrontendDir(dir) => {
                write!(f, "frontend directory `{}` does not exist", dir.display())
            }
        }
    }
}

impl Error for ConfigError {}
