//! The scheduling core: work calendar, free-window calculator, topic
//! rotation, settings, and the planner context threaded through handlers.

/// Work calendar model and free-window calculator
pub mod calendar;
/// Daily plan composition and rendering
pub mod plan;
/// Study topic rotation
pub mod rotation;
/// User-togglable study preferences
pub mod settings;

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::utils::datetime::{format_hhmm, parse_hhmm};

pub use calendar::{DayEntry, ScheduleTable, TimeWindow};
pub use plan::{compose_daily_plan, DailyPlan};
pub use rotation::TopicRotation;
pub use settings::{SettingToggle, StudySettings};

/// The planner context: schedule table, topic rotation, and settings, built
/// once at startup and shared behind an `Arc`.
///
/// The dispatcher may process updates concurrently, so the two mutable pieces
/// each sit behind a mutex; every mutation is a single critical section,
/// which keeps rotation at exactly one advance per surfaced topic.
pub struct StudyPlanner {
    schedule: ScheduleTable,
    rotation: Mutex<TopicRotation>,
    settings: Mutex<StudySettings>,
}

impl StudyPlanner {
    pub fn new(schedule: ScheduleTable, topics: Vec<String>) -> Result<Self> {
        Ok(Self {
            schedule,
            rotation: Mutex::new(TopicRotation::new(topics)?),
            settings: Mutex::new(StudySettings::default()),
        })
    }

    /// Builds a planner over the built-in work calendar and topic list.
    pub fn with_builtin_data() -> Result<Self> {
        Self::new(builtin_schedule()?, builtin_topics())
    }

    pub fn schedule(&self) -> &ScheduleTable {
        &self.schedule
    }

    pub async fn topic_count(&self) -> usize {
        self.rotation.lock().await.len()
    }

    pub async fn rotation_cursor(&self) -> usize {
        self.rotation.lock().await.cursor()
    }

    /// Composes the plan for a date, consuming one rotation step only when
    /// the date has free windows.
    pub async fn today_plan(&self, date: NaiveDate) -> DailyPlan {
        let mut rotation = self.rotation.lock().await;
        compose_daily_plan(date, &self.schedule, &mut rotation)
    }

    /// Surfaces the next topic, always advancing the cursor.
    pub async fn next_topic(&self) -> String {
        self.rotation.lock().await.advance()
    }

    pub async fn settings(&self) -> StudySettings {
        *self.settings.lock().await
    }

    /// Flips one setting and returns the updated snapshot.
    pub async fn toggle(&self, toggle: SettingToggle) -> StudySettings {
        let mut settings = self.settings.lock().await;
        toggle.apply(&mut settings);
        *settings
    }

    /// Renders the full schedule dump.
    pub fn schedule_overview(&self) -> String {
        let mut text = String::from("📅 Your current schedule:\n\n");
        for (date, entry) in self.schedule.iter() {
            text.push_str(&format!("📌 {}: {}\n", date, entry.kind()));
            match entry {
                DayEntry::DayOff { windows } => {
                    if !windows.is_empty() {
                        let slots = windows
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        text.push_str(&format!("   Available: {slots}\n"));
                    }
                }
                DayEntry::DayShift { work_start, work_end, .. }
                | DayEntry::NightShift { work_start, work_end, .. } => {
                    text.push_str(&format!(
                        "   Work: {} - {}\n",
                        format_hhmm(*work_start),
                        format_hhmm(*work_end)
                    ));
                }
            }
            text.push('\n');
        }
        text
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid calendar date {year}-{month:02}-{day:02}"))
}

fn window(start: &str, end: &str) -> Result<TimeWindow> {
    TimeWindow::new(parse_hhmm(start)?, parse_hhmm(end)?)
}

fn shift_hours(start: &str, end: &str) -> Result<(NaiveTime, NaiveTime)> {
    Ok((parse_hhmm(start)?, parse_hhmm(end)?))
}

/// The built-in work calendar.
fn builtin_schedule() -> Result<ScheduleTable> {
    let mut entries = BTreeMap::new();

    entries.insert(
        date(2025, 6, 21)?,
        DayEntry::DayOff { windows: vec![window("09:00", "11:00")?] },
    );

    let (work_start, work_end) = shift_hours("08:00", "20:00")?;
    entries.insert(
        date(2025, 6, 22)?,
        DayEntry::DayShift { work_start, work_end, travel_minutes: 90 },
    );

    let (work_start, work_end) = shift_hours("20:00", "08:00")?;
    entries.insert(
        date(2025, 6, 23)?,
        DayEntry::NightShift { work_start, work_end, travel_minutes: 90 },
    );

    entries.insert(
        date(2025, 6, 24)?,
        DayEntry::DayOff { windows: vec![window("09:00", "23:59")?] },
    );

    entries.insert(
        date(2025, 6, 25)?,
        DayEntry::DayOff { windows: vec![window("00:00", "23:59")?] },
    );

    ScheduleTable::new(entries)
}

/// The built-in study topic list, cycled in order.
fn builtin_topics() -> Vec<String> {
    [
        "Linux basics: the filesystem and core commands",
        "Working in the terminal: pipes, redirection, filters",
        "Process management: ps, top, kill, jobs, bg, fg",
        "Package management: apt, yum, dpkg, rpm",
        "Text processing: grep, sed, awk, cut, sort",
        "Bash scripting: variables, conditionals, loops",
        "File permissions and ownership: chmod, chown",
        "Network utilities: ping, netstat, ss, curl, wget",
        "System daemons and services: systemd, journalctl",
        "Git fundamentals: init, commit, push, pull, merge",
        "Docker fundamentals: containers, images, Dockerfile",
        "CI/CD fundamentals: concepts, Jenkins, GitLab CI",
        "Cloud fundamentals: AWS, GCP, Azure",
        "Infrastructure as code: Terraform",
        "Orchestration: Kubernetes, Docker Swarm",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}
