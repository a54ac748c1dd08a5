//! Task use-case service.
//!
//! # Invariants
//! - Created tasks always get a server-generated id.
//! - Replacing a task keeps the path id.
//! - Deleting an unknown task succeeds without changes.

use crate::model::task::Task;
use crate::repo::Repository;
use crate::service::ServiceResult;
use log::info;

/// CRUD service for tasks.
pub struct TaskService<R: Repository<Task>> {
    repo: R,
}

impl<R: Repository<Task>> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new task, discarding any id the caller supplied.
    pub fn create_task(&self, task: Task) -> ServiceResult<Task> {
        let stored = self.repo.create(task)?;
        info!(
            "event=task_create module=service status=ok id={}",
            stored.id.as_deref().unwrap_or_default()
        );
        Ok(stored)
    }

    /// Lists tasks in insertion order, optionally keeping one exact status.
    ///
    /// An empty `status` is treated as no filter.
    pub fn list_tasks(&self, status: Option<&str>) -> ServiceResult<Vec<Task>> {
        let tasks = self.repo.list()?;
        Ok(match status.filter(|value| !value.is_empty()) {
            Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
            None => tasks,
        })
    }

    pub fn get_task(&self, id: &str) -> ServiceResult<Task> {
        Ok(self.repo.get(id)?)
    }

    /// Replaces the whole task at `id` with `task`.
    pub fn update_task(&self, id: &str, task: Task) -> ServiceResult<Task> {
        let stored = self.repo.update(id, task)?;
        info!("event=task_update module=service status=ok id={id}");
        Ok(stored)
    }

    pub fn delete_task(&self, id: &str) -> ServiceResult<()> {
        let removed = self.repo.delete(id)?;
        info!("event=task_delete module=service status=ok id={id} removed={removed}");
        Ok(())
    }
}
