//! # planificador-calendar
//!
//! Pure calendar arithmetic for the delivery planner board: dates,
//! inclusive ranges, weekday labels, and short display formats.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str (YYYY-MM-DD)"] -->|"CalendarDate::parse()"| B["CalendarDate"]
//!     B -->|".add_days(n)"| B
//!     B -->|"enumerate_range()"| C["Vec of CalendarDate"]
//!     B -->|"day_of_week_label()"| D["'D' 'L' 'M' 'X' 'J' 'V' 'S'"]
//!     B -->|"format_display_date()"| E["DD/MM"]
//!     F["HH:MM:SS"] -->|"format_time_short()"| G["HH:MM"]
//! ```
//!
//! Every operation past parsing is total. The `*_str` helpers take raw
//! strings straight from stored records and degrade to empty output on
//! absent or malformed input.
//!
//! ## Quick Start
//!
//! ```
//! use planificador_calendar::{CalendarDate, enumerate_range, day_of_week_label};
//!
//! let start: CalendarDate = "2024-12-23".parse().unwrap();
//! let columns = enumerate_range(start, start.add_days(6));
//! let labels: String = columns.iter().map(|d| day_of_week_label(*d)).collect();
//! assert_eq!(labels, "LMXJVSD");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `CalendarDate` value type and day arithmetic |
//! | `range` | Inclusive range enumeration |
//! | `weekday` | Sunday-first weekday initials |
//! | `display` | `DD/MM` and `HH:MM` formatting |
//! | `error` | Error types |

mod date;
mod display;
mod error;
mod range;
mod weekday;

pub use chrono::Weekday;
pub use date::CalendarDate;
pub use display::{display_date_str, format_display_date, format_time_short};
pub use error::CalendarError;
pub use range::{add_days, add_days_str, days_between, enumerate_range, enumerate_range_str};
pub use weekday::{WEEKDAY_LABELS, day_of_week_label, day_of_week_label_str};
