//! Fixed day-plan generator.
//!
//! Output does not depend on tasks or preferences beyond the first block's
//! start label.

use crate::model::planner::{BlockKind, DayPlan, PlannerPreferences, ScheduleBlock};
use log::debug;

/// Builds the three-block plan starting at the preferred wake-up time.
pub fn generate_day_plan(preferences: &PlannerPreferences) -> DayPlan {
    debug!(
        "event=planner_generate module=service status=ok wake_up_time={} sleep_time={} energy_pattern={}",
        preferences.wake_up_time, preferences.sleep_time, preferences.energy_pattern
    );
    DayPlan {
        schedule: vec![
            ScheduleBlock::new(
                &preferences.wake_up_time,
                "10:00",
                "Morning Study",
                BlockKind::Study,
                120,
            ),
            ScheduleBlock::new("10:00", "10:30", "Break", BlockKind::Break, 30),
            ScheduleBlock::new("10:30", "12:30", "Project Work", BlockKind::Study, 120),
        ],
    }
}

/// Returns today's fixed plan.
pub fn today_plan() -> DayPlan {
    DayPlan {
        schedule: vec![
            ScheduleBlock::new("08:00", "10:00", "Morning Study", BlockKind::Study, 120),
            ScheduleBlock::new("10:00", "10:30", "Break", BlockKind::Break, 30),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_day_plan, today_plan};
    use crate::model::planner::{BlockKind, PlannerPreferences};

    #[test]
    fn generated_plan_starts_at_wake_up_time() {
        let preferences = PlannerPreferences {
            wake_up_time: "06:30".to_string(),
            sleep_time: "21:00".to_string(),
            energy_pattern: "night_owl".to_string(),
        };
        let plan = generate_day_plan(&preferences);

        assert_eq!(plan.schedule.len(), 3);
        assert_eq!(plan.schedule[0].start, "06:30");
        assert_eq!(plan.schedule[0].end, "10:00");
        assert_eq!(plan.schedule[1].kind, BlockKind::Break);
        assert_eq!(plan.schedule[2].activity, "Project Work");
    }

    #[test]
    fn sleep_time_does_not_change_the_plan() {
        let early = generate_day_plan(&PlannerPreferences::default());
        let late = generate_day_plan(&PlannerPreferences {
            sleep_time: "02:00".to_string(),
            ..PlannerPreferences::default()
        });
        assert_eq!(early, late);
    }

    #[test]
    fn today_plan_serializes_block_type() {
        let json = serde_json::to_value(today_plan()).unwrap();
        assert_eq!(json["schedule"][0]["type"], "study");
        assert_eq!(json["schedule"][1]["type"], "break");
        assert_eq!(json["schedule"][1]["duration"], 30);
    }
}
