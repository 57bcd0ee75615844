//! Two-click date range picker used to define holiday plans.

use planificador_calendar::CalendarDate;

use crate::error::HolidayError;
use crate::plan::HolidayPlan;

/// A date range being picked on a month calendar.
///
/// The first click sets the start. The next click sets the end if it is
/// later, becomes the new start (the old start turning into the end) if it
/// is earlier, or clears the selection if it hits the start again. Once both
/// ends are set, a further click starts over. The start never ends up after
/// the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl RangeSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a click on `date`.
    pub fn click(&mut self, date: CalendarDate) {
        *self = match (self.start, self.end) {
            (Some(start), None) if date < start => Self {
                start: Some(date),
                end: Some(start),
            },
            (Some(start), None) if date == start => Self::default(),
            (Some(start), None) => Self {
                start: Some(start),
                end: Some(date),
            },
            _ => Self {
                start: Some(date),
                end: None,
            },
        };
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// First selected day.
    pub fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    /// Last selected day.
    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Returns `true` once both ends are set.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns `true` if `date` lies strictly between the two ends.
    pub fn is_between(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }

    /// Builds a plan from the completed selection.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::IncompleteSelection`] if either end is
    /// missing, or [`HolidayError::EmptyName`] for a blank name.
    pub fn into_plan(
        self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<HolidayPlan, HolidayError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => HolidayPlan::new(id, name, start, end),
            _ => Err(HolidayError::IncompleteSelection),
        }
    }
}
