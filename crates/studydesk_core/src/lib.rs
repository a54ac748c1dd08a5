//! Core domain logic for StudyDesk.
//! This crate owns the records, their CRUD rules and the assistant proxy;
//! transport layers only translate.

pub mod ai;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use ai::{GenerationBackend, GenerationError, OllamaBackend, OllamaConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::document::{Document, QuizQuestion};
pub use model::habit::Habit;
pub use model::planner::{BlockKind, DayPlan, PlannerPreferences, ScheduleBlock};
pub use model::task::Task;
pub use model::user::{NewUser, User};
pub use model::RecordId;
pub use repo::file_store::DocumentFileStore;
pub use repo::memory_repo::InMemoryRepository;
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{Record, RepoError, RepoResult, Repository};
pub use service::assistant_service::{AskOutcome, AskRequest, AssistantService};
pub use service::dashboard_service::{Dashboard, DashboardService};
pub use service::document_service::DocumentService;
pub use service::habit_service::HabitService;
pub use service::planner_service::{generate_day_plan, today_plan};
pub use service::task_service::TaskService;
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check probe.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
