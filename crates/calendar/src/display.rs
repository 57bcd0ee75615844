//! Short display forms for dates and times.

use chrono::NaiveTime;

use crate::date::CalendarDate;

/// Formats `date` as `DD/MM`, the short Spanish display form.
pub fn format_display_date(date: CalendarDate) -> String {
    format!("{:02}/{:02}", date.day(), date.month())
}

/// Formats a raw `YYYY-MM-DD` string as `DD/MM`.
///
/// Returns an empty string for empty or malformed input.
pub fn display_date_str(date: &str) -> String {
    CalendarDate::parse(date)
        .map(format_display_date)
        .unwrap_or_default()
}

/// Truncates `HH:MM:SS` or `HH:MM` to `HH:MM`.
///
/// Empty or malformed input (including out-of-range hours or minutes)
/// yields an empty string.
pub fn format_time_short(time: &str) -> String {
    let trimmed = time.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}
