//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;
use studydesk_core::{
    AssistantService, DashboardService, Document, DocumentFileStore, DocumentService,
    GenerationBackend, Habit, HabitService, InMemoryRepository, OllamaBackend, Task, TaskService,
};

use crate::config::ServerConfig;

pub type TaskRepo = Arc<InMemoryRepository<Task>>;
pub type HabitRepo = Arc<InMemoryRepository<Habit>>;
pub type DocumentRepo = Arc<InMemoryRepository<Document>>;
pub type Backend = Arc<dyn GenerationBackend>;

/// Services wired over one set of in-memory collections.
pub struct AppState {
    pub tasks: TaskService<TaskRepo>,
    pub habits: HabitService<HabitRepo>,
    pub documents: DocumentService<DocumentRepo>,
    pub dashboard: DashboardService<TaskRepo, DocumentRepo>,
    pub assistant: AssistantService<DocumentRepo, Backend>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Builds fresh, empty collections around the given backend.
    pub fn new(upload_dir: impl Into<PathBuf>, backend: Backend) -> Self {
        let tasks: TaskRepo = Arc::new(InMemoryRepository::new());
        let habits: HabitRepo = Arc::new(InMemoryRepository::new());
        let documents: DocumentRepo = Arc::new(InMemoryRepository::new());
        let files = DocumentFileStore::new(upload_dir);

        Self {
            tasks: TaskService::new(Arc::clone(&tasks)),
            habits: HabitService::new(habits),
            documents: DocumentService::new(Arc::clone(&documents), files.clone()),
            dashboard: DashboardService::new(tasks, Arc::clone(&documents)),
            assistant: AssistantService::new(documents, files, backend),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let backend: Backend = Arc::new(OllamaBackend::new(config.generation.clone()));
        Self::new(config.upload_dir.clone(), backend)
    }
}
