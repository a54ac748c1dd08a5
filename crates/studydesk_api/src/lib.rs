//! HTTP surface for StudyDesk.
//!
//! # Responsibility
//! - Translate HTTP requests into core service calls and back.
//! - Own server bootstrap: config validation, schema creation, binding.
//!
//! # Invariants
//! - Handlers never touch storage directly.
//! - Not-found failures render as 404 with a `detail` message.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
mod upload;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::{AppState, SharedState};

use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use studydesk_core::db::{open_db, DbError};

/// Failure while starting or running the server.
#[derive(Debug)]
pub enum ServeError {
    Config(ConfigError),
    Db(DbError),
    Io(std::io::Error),
}

impl Display for ServeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Db(err) => write!(f, "database bootstrap failed: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for ServeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<DbError> for ServeError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for ServeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Runs the HTTP server until Ctrl-C.
///
/// # Side effects
/// - Creates the upload directory.
/// - Creates the relational schema in `config.database_path` if missing.
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    config.validate()?;

    std::fs::create_dir_all(&config.upload_dir)?;
    // Schema only; request handling stays on the in-memory collections.
    drop(open_db(&config.database_path)?);

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state, config.frontend_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=api status=ok addr={} upload_dir={} model={}",
        listener.local_addr()?,
        config.upload_dir.display(),
        config.generation.model
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("event=shutdown_signal module=api status=error error={err}");
        std::future::pending::<()>().await;
    }
}
