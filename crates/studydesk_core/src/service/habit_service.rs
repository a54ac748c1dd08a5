//! Habit use-case service.

use crate::model::habit::Habit;
use crate::repo::Repository;
use crate::service::ServiceResult;
use log::info;

/// CRUD and tracking service for habits.
pub struct HabitService<R: Repository<Habit>> {
    repo: R,
}

impl<R: Repository<Habit>> HabitService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_habit(&self, habit: Habit) -> ServiceResult<Habit> {
        let stored = self.repo.create(habit)?;
        info!(
            "event=habit_create module=service status=ok id={}",
            stored.id.as_deref().unwrap_or_default()
        );
        Ok(stored)
    }

    pub fn list_habits(&self) -> ServiceResult<Vec<Habit>> {
        Ok(self.repo.list()?)
    }

    pub fn get_habit(&self, id: &str) -> ServiceResult<Habit> {
        Ok(self.repo.get(id)?)
    }

    pub fn update_habit(&self, id: &str, habit: Habit) -> ServiceResult<Habit> {
        let stored = self.repo.update(id, habit)?;
        info!("event=habit_update module=service status=ok id={id}");
        Ok(stored)
    }

    pub fn delete_habit(&self, id: &str) -> ServiceResult<()> {
        let removed = self.repo.delete(id)?;
        info!("event=habit_delete module=service status=ok id={id} removed={removed}");
        Ok(())
    }

    /// Records one completion for the habit at `id`.
    ///
    /// # Contract
    /// - `current_streak` and `total_completions` grow by one.
    /// - `longest_streak` is raised to `current_streak` when exceeded.
    pub fn track_habit(&self, id: &str) -> ServiceResult<Habit> {
        let tracked = self.repo.update_with(id, &mut |habit: &mut Habit| habit.track())?;
        info!(
            "event=habit_track module=service status=ok id={} current_streak={} longest_streak={}",
            id, tracked.current_streak, tracked.longest_streak
        );
        Ok(tracked)
    }
}
