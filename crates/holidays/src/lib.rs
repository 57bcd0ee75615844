//! # planificador-holidays
//!
//! Holidays, holiday plans ("puentes"), and the per-day classification the
//! planner board draws its column headers from.
//!
//! A [`Holiday`] marks one non-working date. A [`HolidayPlan`] is a named
//! inclusive range used as a quick date-range selector; plans may overlap.
//!
//! ```
//! use planificador_calendar::CalendarDate;
//! use planificador_holidays::{Holiday, HolidayPlan, is_holiday, within_any_plan};
//!
//! let xmas: CalendarDate = "2024-12-25".parse().unwrap();
//! let holidays = vec![Holiday::new("h1", xmas, "Navidad")];
//! let plans = vec![HolidayPlan::new("p1", "Navidad", xmas.add_days(-1), xmas.add_days(1)).unwrap()];
//!
//! assert_eq!(is_holiday(xmas, &holidays).map(|h| h.name.as_str()), Some("Navidad"));
//! assert!(within_any_plan(xmas, &plans));
//! assert!(!within_any_plan(xmas.add_days(2), &plans));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `holiday` | Single-day holidays and first-match lookup |
//! | `plan` | Inclusive date-range plans and containment |
//! | `classify` | Per-day header info for the board |
//! | `selection` | Two-click range picker for new plans |
//! | `error` | Error types |

mod classify;
mod error;
mod holiday;
mod plan;
mod selection;

pub use classify::{DayInfo, classify_day, classify_range};
pub use error::HolidayError;
pub use holiday::{Holiday, is_holiday, is_holiday_date, sorted_holidays};
pub use plan::{HolidayPlan, find_plan, plans_containing, sorted_plans, within_any_plan};
pub use selection::RangeSelection;
