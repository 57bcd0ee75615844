//! Single-day holidays.

use planificador_calendar::CalendarDate;
use serde::{Deserialize, Serialize};

/// A single non-working calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Store identifier.
    pub id: String,
    /// The holiday's date.
    pub date: CalendarDate,
    /// Display name, e.g. "Navidad".
    pub name: String,
}

impl Holiday {
    /// Creates a holiday.
    pub fn new(id: impl Into<String>, date: CalendarDate, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date,
            name: name.into(),
        }
    }
}

/// Returns the first holiday falling on `date`, if any.
///
/// Several holidays on one date is not an error; the earliest in `holidays`
/// wins.
pub fn is_holiday(date: CalendarDate, holidays: &[Holiday]) -> Option<&Holiday> {
    holidays.iter().find(|h| h.date == date)
}

/// Returns `true` if any holiday falls on `date`.
pub fn is_holiday_date(date: CalendarDate, holidays: &[Holiday]) -> bool {
    is_holiday(date, holidays).is_some()
}

/// Holidays in ascending date order. Ties keep their input order.
pub fn sorted_holidays(holidays: &[Holiday]) -> Vec<&Holiday> {
    let mut sorted: Vec<&Holiday> = holidays.iter().collect();
    sorted.sort_by_key(|h| h.date);
    sorted
}
