//! Dashboard aggregates computed by scanning the live collections.

use crate::model::document::Document;
use crate::model::task::Task;
use crate::repo::Repository;
use crate::service::ServiceResult;
use serde::Serialize;

/// Number of most recently created tasks shown on the dashboard.
pub const RECENT_TASK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentCounts {
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyTotals {
    /// Sum of task estimates, in hours.
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStatistics {
    pub tasks: TaskCounts,
    pub documents: DocumentCounts,
    pub study: StudyTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    /// Oldest first, as stored.
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub statistics: DashboardStatistics,
    pub recent_activity: RecentActivity,
}

/// Read-only aggregate view over tasks and documents.
pub struct DashboardService<T: Repository<Task>, D: Repository<Document>> {
    tasks: T,
    documents: D,
}

impl<T: Repository<Task>, D: Repository<Document>> DashboardService<T, D> {
    pub fn new(tasks: T, documents: D) -> Self {
        Self { tasks, documents }
    }

    pub fn dashboard(&self) -> ServiceResult<Dashboard> {
        let tasks = self.tasks.list()?;
        let document_total = self.documents.list()?.len();

        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        // Widened so any mix of i64 estimates sums exactly.
        let total_minutes: i128 = tasks
            .iter()
            .map(|task| i128::from(task.estimated_minutes))
            .sum();
        let recent_start = tasks.len().saturating_sub(RECENT_TASK_COUNT);

        Ok(Dashboard {
            statistics: DashboardStatistics {
                tasks: TaskCounts {
                    total: tasks.len(),
                    completed,
                },
                documents: DocumentCounts {
                    total: document_total,
                },
                study: StudyTotals {
                    total_hours: total_minutes as f64 / 60.0,
                },
            },
            recent_activity: RecentActivity {
                tasks: tasks[recent_start..].to_vec(),
            },
        })
    }
}
