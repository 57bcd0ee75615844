//! Error types for the planificador-holidays crate.

use planificador_calendar::CalendarDate;

/// Error type for constructing holidays and holiday plans.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when a plan ends before it starts.
    #[error("plan '{name}' ends ({end}) before it starts ({start})")]
    InvertedPlan {
        /// Name of the rejected plan.
        name: String,
        /// Requested first day.
        start: CalendarDate,
        /// Requested last day.
        end: CalendarDate,
    },

    /// Returned when a plan name is empty or only whitespace.
    #[error("plan name must not be empty")]
    EmptyName,

    /// Returned when a range selection is missing its start or end.
    #[error("range selection is incomplete (needs both start and end)")]
    IncompleteSelection,
}
