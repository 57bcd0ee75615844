//! Single-letter weekday labels for board column headers.

use crate::date::CalendarDate;

/// Spanish weekday initials indexed by days from Sunday (`0 = Sunday`).
///
/// Wednesday is `X` so it does not collide with Tuesday's `M`.
pub const WEEKDAY_LABELS: [char; 7] = ['D', 'L', 'M', 'X', 'J', 'V', 'S'];

/// Returns the single-letter label for the weekday of `date`.
///
/// # Examples
///
/// ```
/// use planificador_calendar::{CalendarDate, day_of_week_label};
///
/// let christmas: CalendarDate = "2024-12-25".parse().unwrap();
/// assert_eq!(day_of_week_label(christmas), 'X'); // Wednesday
/// ```
pub fn day_of_week_label(date: CalendarDate) -> char {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Label for a raw `YYYY-MM-DD` string.
///
/// Returns an empty string for empty or malformed input.
pub fn day_of_week_label_str(date: &str) -> String {
    CalendarDate::parse(date)
        .map(|d| day_of_week_label(d).to_string())
        .unwrap_or_default()
}
