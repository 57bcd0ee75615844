//! Per-day classification for board column headers.

use planificador_calendar::{CalendarDate, day_of_week_label, enumerate_range, format_display_date};
use tracing::trace;

use crate::holiday::{Holiday, is_holiday};
use crate::plan::{HolidayPlan, within_any_plan};

/// Everything a board column header needs to know about one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    /// The day being described.
    pub date: CalendarDate,
    /// Weekday initial, see [`day_of_week_label`].
    pub label: char,
    /// `DD/MM` display form.
    pub display: String,
    /// Name of the first holiday on this date, if any.
    pub holiday: Option<String>,
    /// Saturday or Sunday.
    pub weekend: bool,
    /// Falls inside at least one holiday plan.
    pub in_plan: bool,
}

impl DayInfo {
    /// Returns `true` if a holiday falls on this day.
    pub fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }

    /// Returns `true` for weekends and holidays.
    pub fn is_non_working(&self) -> bool {
        self.weekend || self.is_holiday()
    }
}

/// Classifies a single day against holidays and plans.
pub fn classify_day(date: CalendarDate, holidays: &[Holiday], plans: &[HolidayPlan]) -> DayInfo {
    DayInfo {
        date,
        label: day_of_week_label(date),
        display: format_display_date(date),
        holiday: is_holiday(date, holidays).map(|h| h.name.clone()),
        weekend: date.is_weekend(),
        in_plan: within_any_plan(date, plans),
    }
}

/// Classifies every day of `start..=end`. Empty when `start > end`.
pub fn classify_range(
    start: CalendarDate,
    end: CalendarDate,
    holidays: &[Holiday],
    plans: &[HolidayPlan],
) -> Vec<DayInfo> {
    let days: Vec<DayInfo> = enumerate_range(start, end)
        .into_iter()
        .map(|d| classify_day(d, holidays, plans))
        .collect();
    trace!(%start, %end, n_days = days.len(), "classified range");
    days
}
