//! Habit record and streak tracking.
//!
//! # Invariants
//! - After `track`, `longest_streak >= current_streak`.
//! - Streak counters only move forward, except when a client replaces the
//!   whole record.

use super::{empty_text, RecordId};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HABIT_FREQUENCY: &str = "daily";

/// A recurring habit with completion counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    #[serde(default)]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default = "empty_text")]
    pub description: Option<String>,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    #[serde(default)]
    pub current_streak: i64,
    #[serde(default)]
    pub longest_streak: i64,
    #[serde(default)]
    pub total_completions: i64,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: empty_text(),
            frequency: default_frequency(),
            current_streak: 0,
            longest_streak: 0,
            total_completions: 0,
        }
    }

    /// Records one completion.
    pub fn track(&mut self) {
        self.current_streak = self.current_streak.saturating_add(1);
        self.total_completions = self.total_completions.saturating_add(1);
        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }
    }
}

fn default_frequency() -> String {
    DEFAULT_HABIT_FREQUENCY.to_string()
}

#[cfg(test)]
mod tests {
    use super::Habit;

    #[test]
    fn track_raises_longest_streak_with_current() {
        let mut habit = Habit::new("flashcards");
        habit.track();
        habit.track();

        assert_eq!(habit.current_streak, 2);
        assert_eq!(habit.longest_streak, 2);
        assert_eq!(habit.total_completions, 2);
    }

    #[test]
    fn track_keeps_higher_longest_streak() {
        let mut habit = Habit::new("run");
        habit.longest_streak = 10;
        habit.track();

        assert_eq!(habit.current_streak, 1);
        assert_eq!(habit.longest_streak, 10);
    }

    #[test]
    fn track_repairs_replaced_counters() {
        let mut habit = Habit::new("journal");
        habit.current_streak = 7;
        habit.longest_streak = 3;
        habit.track();

        assert_eq!(habit.current_streak, 8);
        assert_eq!(habit.longest_streak, 8);
    }

    #[test]
    fn decode_defaults_frequency_and_counters() {
        let habit: Habit = serde_json::from_str(r#"{"name":"read"}"#).unwrap();
        assert_eq!(habit, Habit::new("read"));
        assert_eq!(habit.frequency, "daily");
    }

    #[test]
    fn negative_counters_are_accepted_and_tracked() {
        let mut habit: Habit = serde_json::from_str(
            r#"{"name":"meditate","current_streak":-2,"longest_streak":-5,"total_completions":-1}"#,
        )
        .unwrap();
        assert_eq!(habit.current_streak, -2);

        habit.track();

        assert_eq!(habit.current_streak, -1);
        assert_eq!(habit.longest_streak, -1);
        assert_eq!(habit.total_completions, 0);
    }

    #[test]
    fn track_saturates_at_the_counter_limit() {
        let mut habit = Habit::new("forever");
        habit.current_streak = i64::MAX;
        habit.total_completions = i64::MAX;
        habit.track();

        assert_eq!(habit.current_streak, i64::MAX);
        assert_eq!(habit.longest_streak, i64::MAX);
        assert_eq!(habit.total_completions, i64::MAX);
    }
}
