use chrono::NaiveDate;

use super::calendar::{ScheduleTable, TimeWindow};
use super::rotation::TopicRotation;

/// The outcome of planning one day: either there is nothing to plan, or a
/// set of free windows with exactly one rotated topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyPlan {
    Rest,
    Study {
        date: NaiveDate,
        windows: Vec<TimeWindow>,
        topic: String,
    },
}

/// Composes the plan for a date from the schedule table and topic rotation.
///
/// Window computation runs first; only when it yields free time is one
/// rotation step consumed. A day without free windows (including an unknown
/// date) leaves the cursor untouched, so topic rotation progresses only on
/// days with time to study.
///
/// A window-computation error is degraded to a rest day with a warning; it
/// cannot occur for a table admitted by `ScheduleTable::new`.
pub fn compose_daily_plan(
    date: NaiveDate,
    schedule: &ScheduleTable,
    rotation: &mut TopicRotation,
) -> DailyPlan {
    let windows = match schedule.free_windows(date) {
        Ok(windows) => windows,
        Err(e) => {
            tracing::warn!("Free-window computation failed for {}: {}", date, e);
            Vec::new()
        }
    };

    if windows.is_empty() {
        return DailyPlan::Rest;
    }

    let topic = rotation.advance();
    DailyPlan::Study { date, windows, topic }
}

impl DailyPlan {
    /// Renders the plan as the user-facing message text.
    pub fn to_message(&self) -> String {
        match self {
            DailyPlan::Rest => {
                "You have no free time for studying today. Get some rest! 🛌".to_string()
            }
            DailyPlan::Study { date, windows, topic } => {
                let slots = windows
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut plan = format!("📚 Study plan for {date}:\n");
                plan.push_str(&format!("⏳ Free time: {slots}\n"));
                plan.push_str(&format!("🎯 Topic: {topic}\n"));
                plan.push_str("🔹 Suggested session: 1-2 hours\n");
                plan.push_str("🔹 Tip: take a break every 25 minutes (Pomodoro)\n");
                plan
            }
        }
    }
}
