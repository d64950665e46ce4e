use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::datetime::{checked_sub_minutes, format_hhmm};

/// Earliest wall-clock time a study session may start before a day shift.
fn earliest_morning() -> NaiveTime {
    NaiveTime::from_hms_opt(5, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Start of the default free window on a day off with no configured windows.
fn default_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Last plannable minute of any day.
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

/// A free time-of-day interval, `start` strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(anyhow!(
                "Window start {} must be before end {}",
                format_hhmm(start),
                format_hhmm(end)
            ));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

/// One calendar day in the work schedule.
///
/// Shift work hours are kept as a raw start/end pair because a night shift
/// legitimately crosses midnight (e.g. 20:00-08:00); only free windows carry
/// the `start < end` invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayEntry {
    DayOff {
        /// Explicit free windows. Empty means the default full day applies.
        windows: Vec<TimeWindow>,
    },
    DayShift {
        work_start: NaiveTime,
        work_end: NaiveTime,
        travel_minutes: u32,
    },
    NightShift {
        work_start: NaiveTime,
        work_end: NaiveTime,
        travel_minutes: u32,
    },
}

impl DayEntry {
    pub fn kind(&self) -> &'static str {
        match self {
            DayEntry::DayOff { .. } => "day off",
            DayEntry::DayShift { .. } => "day shift",
            DayEntry::NightShift { .. } => "night shift",
        }
    }

    /// Checks the entry's own invariants: ordered day-off windows, and a
    /// travel buffer that fits between midnight and the shift start.
    fn validate(&self) -> Result<()> {
        match self {
            DayEntry::DayOff { windows } => {
                for window in windows {
                    if window.start >= window.end {
                        return Err(anyhow!(
                            "Day-off window {} is not ordered",
                            window
                        ));
                    }
                }
                Ok(())
            }
            DayEntry::DayShift { work_start, travel_minutes, .. }
            | DayEntry::NightShift { work_start, travel_minutes, .. } => {
                checked_sub_minutes(*work_start, *travel_minutes)
                    .map(|_| ())
                    .with_context(|| {
                        format!(
                            "Travel buffer of {} minutes does not fit before a {} start at {}",
                            travel_minutes,
                            self.kind(),
                            format_hhmm(*work_start)
                        )
                    })
            }
        }
    }
}

/// The fixed work calendar: one entry per known date.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    entries: BTreeMap<NaiveDate, DayEntry>,
}

impl ScheduleTable {
    /// Builds a table, rejecting any malformed entry up front so the
    /// free-window calculator cannot fail at request time.
    pub fn new(entries: BTreeMap<NaiveDate, DayEntry>) -> Result<Self> {
        for (date, entry) in &entries {
            entry
                .validate()
                .with_context(|| format!("Invalid schedule entry for {date}"))?;
        }
        Ok(Self { entries })
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.entries.get(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &DayEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the free time-of-day windows for a date.
    ///
    /// Pure function of the date and the table: a day off yields its
    /// configured windows (or the default full day), a day shift frees the
    /// early morning up to the commute, a night shift frees the evening after
    /// which the commute begins, and an unknown date yields nothing.
    ///
    /// Subtracting the travel buffer never wraps across midnight; entries
    /// admitted by [`ScheduleTable::new`] cannot trigger the error path.
    pub fn free_windows(&self, date: NaiveDate) -> Result<Vec<TimeWindow>> {
        let Some(entry) = self.entries.get(&date) else {
            return Ok(Vec::new());
        };

        match entry {
            DayEntry::DayOff { windows } => {
                if windows.is_empty() {
                    Ok(vec![TimeWindow::new(default_day_start(), end_of_day())?])
                } else {
                    Ok(windows.clone())
                }
            }
            DayEntry::DayShift { work_start, travel_minutes, .. } => {
                let morning_end = checked_sub_minutes(*work_start, *travel_minutes)?;
                if earliest_morning() < morning_end {
                    Ok(vec![TimeWindow::new(earliest_morning(), morning_end)?])
                } else {
                    Ok(Vec::new())
                }
            }
            DayEntry::NightShift { work_start, travel_minutes, .. } => {
                let evening_start = checked_sub_minutes(*work_start, *travel_minutes)?;
                if evening_start < end_of_day() {
                    Ok(vec![TimeWindow::new(evening_start, end_of_day())?])
                } else {
                    Ok(Vec::new())
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_window_display() {
        let window = TimeWindow::new(hm(9, 0), hm(11, 0)).unwrap();
        assert_eq!(window.to_string(), "09:00-11:00");
    }

    #[test]
    fn test_time_window_rejects_inverted_bounds() {
        assert!(TimeWindow::new(hm(11, 0), hm(9, 0)).is_err());
        assert!(TimeWindow::new(hm(9, 0), hm(9, 0)).is_err());
    }

    #[test]
    fn test_day_entry_kind_labels() {
        assert_eq!(DayEntry::DayOff { windows: vec![] }.kind(), "day off");
        let shift = DayEntry::DayShift {
            work_start: hm(8, 0),
            work_end: hm(20, 0),
            travel_minutes: 90,
        };
        assert_eq!(shift.kind(), "day shift");
    }
}
