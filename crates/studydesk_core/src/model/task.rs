//! Task record.
//!
//! # Invariants
//! - `id` is assigned by the store on create and re-stamped on replace.
//! - `status` is free-form text; only `pending` and `completed` carry meaning
//!   for defaults and dashboard counts.

use super::{empty_text, RecordId};
use serde::{Deserialize, Serialize};

/// Status assigned to tasks created without one.
pub const TASK_STATUS_PENDING: &str = "pending";
/// Status counted as done by the dashboard.
pub const TASK_STATUS_COMPLETED: &str = "completed";
pub const DEFAULT_TASK_PRIORITY: i64 = 2;
pub const DEFAULT_ESTIMATED_MINUTES: i64 = 30;

/// One actionable study task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-generated id; any client value is discarded on create.
    #[serde(default)]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default = "empty_text")]
    pub description: Option<String>,
    /// 1 low through 4 urgent, not enforced.
    #[serde(default = "default_priority")]
    pub priority: i64,
    #[serde(default = "empty_text")]
    pub category: Option<String>,
    #[serde(default = "default_estimated_minutes")]
    pub estimated_minutes: i64,
    /// Client-formatted due date, stored verbatim.
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Task {
    /// Creates an unsaved task with every optional field at its default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: empty_text(),
            priority: DEFAULT_TASK_PRIORITY,
            category: empty_text(),
            estimated_minutes: DEFAULT_ESTIMATED_MINUTES,
            due_date: None,
            status: default_status(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TASK_STATUS_COMPLETED
    }
}

fn default_priority() -> i64 {
    DEFAULT_TASK_PRIORITY
}

fn default_estimated_minutes() -> i64 {
    DEFAULT_ESTIMATED_MINUTES
}

fn default_status() -> String {
    TASK_STATUS_PENDING.to_string()
}
