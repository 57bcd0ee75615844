//! Inclusive date ranges and day arithmetic.

use crate::date::CalendarDate;

/// Enumerates every date from `start` to `end` inclusive, ascending.
///
/// Returns an empty vector when `start > end`.
///
/// # Example
///
/// ```
/// use planificador_calendar::{CalendarDate, enumerate_range};
///
/// let start: CalendarDate = "2024-12-30".parse().unwrap();
/// let end: CalendarDate = "2025-01-02".parse().unwrap();
/// let dates = enumerate_range(start, end);
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[2].to_string(), "2025-01-01");
/// ```
pub fn enumerate_range(start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
    if start > end {
        return Vec::new();
    }
    let n_days = days_between(start, end) as usize + 1;
    let mut dates = Vec::with_capacity(n_days);
    dates.push(start);
    let mut current = start;
    while current < end {
        match current.succ() {
            Some(next) => {
                dates.push(next);
                current = next;
            }
            None => break,
        }
    }
    dates
}

/// Signed number of days from `start` to `end`.
pub fn days_between(start: CalendarDate, end: CalendarDate) -> i64 {
    start.days_until(end)
}

/// Shifts `date` by `delta` days. See [`CalendarDate::add_days`].
pub fn add_days(date: CalendarDate, delta: i64) -> CalendarDate {
    date.add_days(delta)
}

/// Enumerates a range given as raw strings.
///
/// Either bound being empty or malformed yields an empty vector.
pub fn enumerate_range_str(start: &str, end: &str) -> Vec<CalendarDate> {
    match (CalendarDate::parse(start), CalendarDate::parse(end)) {
        (Ok(start), Ok(end)) => enumerate_range(start, end),
        _ => Vec::new(),
    }
}

/// Shifts a raw `YYYY-MM-DD` string by `delta` days.
///
/// Returns an empty string for empty or malformed input.
pub fn add_days_str(date: &str, delta: i64) -> String {
    CalendarDate::parse(date)
        .map(|d| d.add_days(delta).to_string())
        .unwrap_or_default()
}
