use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, NaiveTime, Timelike};

/// Parses a wall-clock time in `HH:MM` form.
pub fn parse_hhmm(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| anyhow!("Invalid time '{}', expected HH:MM", input.trim()))
}

/// Renders a wall-clock time as `HH:MM`.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Subtracts whole minutes from a wall-clock time.
///
/// The schedule model never wraps across midnight, so a subtraction that
/// would land on the previous day is an error, not a wrapped time.
pub fn checked_sub_minutes(time: NaiveTime, minutes: u32) -> Result<NaiveTime> {
    let from_midnight = time.hour() * 60 + time.minute();
    if minutes > from_midnight {
        return Err(anyhow!(
            "Subtracting {} minutes from {} would cross midnight",
            minutes,
            format_hhmm(time)
        ));
    }
    let remaining = from_midnight - minutes;
    NaiveTime::from_hms_opt(remaining / 60, remaining % 60, 0)
        .ok_or_else(|| anyhow!("Time arithmetic produced an out-of-range value"))
}

/// The caller's current calendar date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
