//! Day planner payloads.

use serde::{Deserialize, Serialize};

/// Client scheduling preferences. Only `wake_up_time` affects output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerPreferences {
    #[serde(default = "default_wake_up_time")]
    pub wake_up_time: String,
    #[serde(default = "default_sleep_time")]
    pub sleep_time: String,
    #[serde(default = "default_energy_pattern")]
    pub energy_pattern: String,
}

impl Default for PlannerPreferences {
    fn default() -> Self {
        Self {
            wake_up_time: default_wake_up_time(),
            sleep_time: default_sleep_time(),
            energy_pattern: default_energy_pattern(),
        }
    }
}

/// Kind of activity in a schedule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Study,
    Break,
}

/// One time slot of a day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    /// `HH:MM` label.
    pub start: String,
    pub end: String,
    pub activity: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Minutes.
    pub duration: u32,
}

impl ScheduleBlock {
    pub fn new(start: &str, end: &str, activity: &str, kind: BlockKind, duration: u32) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            activity: activity.to_string(),
            kind,
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub schedule: Vec<ScheduleBlock>,
}

fn default_wake_up_time() -> String {
    "08:00".to_string()
}

fn default_sleep_time() -> String {
    "23:00".to_string()
}

fn default_energy_pattern() -> String {
    "standard".to_string()
}
