#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use study_scheduler_bot::planner::{DayEntry, ScheduleTable, TimeWindow};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn window(start: (u32, u32), end: (u32, u32)) -> TimeWindow {
    TimeWindow::new(hm(start.0, start.1), hm(end.0, end.1)).unwrap()
}

fn sample_table() -> ScheduleTable {
    let mut entries = BTreeMap::new();
    entries.insert(
        date(21),
        DayEntry::DayOff { windows: vec![window((9, 0), (11, 0))] },
    );
    entries.insert(
        date(22),
        DayEntry::DayShift {
            work_start: hm(8, 0),
            work_end: hm(20, 0),
            travel_minutes: 90,
        },
    );
    entries.insert(
        date(23),
        DayEntry::NightShift {
            work_start: hm(20, 0),
            work_end: hm(8, 0),
            travel_minutes: 90,
        },
    );
    entries.insert(date(24), DayEntry::DayOff { windows: vec![] });
    ScheduleTable::new(entries).unwrap()
}

#[test]
fn test_day_off_windows_returned_verbatim() {
    let table = sample_table();
    let windows = table.free_windows(date(21)).unwrap();
    assert_eq!(windows, vec![window((9, 0), (11, 0))]);
}

#[test]
fn test_day_off_without_windows_defaults_to_full_day() {
    let table = sample_table();
    let windows = table.free_windows(date(24)).unwrap();
    assert_eq!(windows, vec![window((9, 0), (23, 59))]);
}

#[test]
fn test_day_shift_frees_morning_before_commute() {
    let table = sample_table();
    let windows = table.free_windows(date(22)).unwrap();
    assert_eq!(windows, vec![window((5, 0), (6, 30))]);
}

#[test]
fn test_night_shift_frees_evening_before_commute() {
    let table = sample_table();
    let windows = table.free_windows(date(23)).unwrap();
    assert_eq!(windows, vec![window((18, 30), (23, 59))]);
}

#[test]
fn test_unknown_date_yields_no_windows() {
    let table = sample_table();
    let windows = table.free_windows(date(30)).unwrap();
    assert!(windows.is_empty());
}

#[test]
fn test_day_shift_without_morning_room_yields_no_windows() {
    // Commute ends the morning at 04:30, before the 05:00 earliest start
    let mut entries = BTreeMap::new();
    entries.insert(
        date(22),
        DayEntry::DayShift {
            work_start: hm(6, 0),
            work_end: hm(18, 0),
            travel_minutes: 90,
        },
    );
    let table = ScheduleTable::new(entries).unwrap();
    assert!(table.free_windows(date(22)).unwrap().is_empty());
}

#[test]
fn test_night_shift_starting_at_end_of_day_yields_no_windows() {
    let mut entries = BTreeMap::new();
    entries.insert(
        date(23),
        DayEntry::NightShift {
            work_start: hm(23, 59),
            work_end: hm(8, 0),
            travel_minutes: 0,
        },
    );
    let table = ScheduleTable::new(entries).unwrap();
    assert!(table.free_windows(date(23)).unwrap().is_empty());
}

#[test]
fn test_construction_rejects_shift_crossing_midnight() {
    // A 90-minute commute before a 01:00 start would wrap to the previous day
    let mut entries = BTreeMap::new();
    entries.insert(
        date(22),
        DayEntry::DayShift {
            work_start: hm(1, 0),
            work_end: hm(13, 0),
            travel_minutes: 90,
        },
    );
    let result = ScheduleTable::new(entries);
    assert!(result.is_err());
    let error_msg = result.unwrap_err().to_string();
    assert!(error_msg.contains("2025-06-22"));
}

#[test]
fn test_construction_rejects_inverted_day_off_window() {
    let mut entries = BTreeMap::new();
    entries.insert(
        date(21),
        DayEntry::DayOff {
            windows: vec![TimeWindow { start: hm(11, 0), end: hm(9, 0) }],
        },
    );
    assert!(ScheduleTable::new(entries).is_err());
}

#[test]
fn test_time_window_constructor_rejects_inverted_bounds() {
    assert!(TimeWindow::new(hm(11, 0), hm(9, 0)).is_err());
    assert!(TimeWindow::new(hm(9, 0), hm(9, 0)).is_err());
}
