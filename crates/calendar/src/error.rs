//! Error types for the planificador-calendar crate.

/// Error type for the parsing and construction boundaries of the
/// planificador-calendar crate.
///
/// Date arithmetic, range enumeration, and display formatting never fail;
/// only turning raw input into a [`CalendarDate`](crate::CalendarDate) can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when the input string is empty or only whitespace.
    #[error("empty date")]
    Empty,

    /// Returned when the input is not a `YYYY-MM-DD` date.
    #[error("malformed date: {input:?} (expected YYYY-MM-DD)")]
    Malformed {
        /// The raw input that failed to parse.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number does not exist in the given month.
    #[error("invalid day: {day} for {year}-{month:02}")]
    InvalidDay {
        /// The year of the rejected date.
        year: i32,
        /// The month of the rejected date.
        month: u32,
        /// The invalid day number that was provided.
        day: u32,
    },
}
