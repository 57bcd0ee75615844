//! Named inclusive date ranges ("puentes") used as planning windows.

use planificador_calendar::{CalendarDate, days_between, enumerate_range};
use serde::{Deserialize, Serialize};

use crate::error::HolidayError;

/// A named inclusive date range, such as a multi-day bridge holiday.
///
/// Invariant: `start_date <= end_date` and the name is not blank. Both are
/// checked on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlanFields")]
pub struct HolidayPlan {
    id: String,
    name: String,
    start_date: CalendarDate,
    end_date: CalendarDate,
}

#[derive(Deserialize)]
struct PlanFields {
    id: String,
    name: String,
    start_date: CalendarDate,
    end_date: CalendarDate,
}

impl TryFrom<PlanFields> for HolidayPlan {
    type Error = HolidayError;

    fn try_from(f: PlanFields) -> Result<Self, Self::Error> {
        HolidayPlan::new(f.id, f.name, f.start_date, f.end_date)
    }
}

impl HolidayPlan {
    /// Creates a plan covering `start_date..=end_date`.
    ///
    /// The name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::EmptyName`] for a blank name and
    /// [`HolidayError::InvertedPlan`] when `start_date > end_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: CalendarDate,
        end_date: CalendarDate,
    ) -> Result<Self, HolidayError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(HolidayError::EmptyName);
        }
        if start_date > end_date {
            return Err(HolidayError::InvertedPlan {
                name,
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id: id.into(),
            name,
            start_date,
            end_date,
        })
    }

    /// Returns the store identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first day of the plan.
    pub fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    /// Returns the last day of the plan.
    pub fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    /// Returns `true` if `date` lies within the plan, bounds included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of days covered, both ends included.
    pub fn len_days(&self) -> usize {
        days_between(self.start_date, self.end_date) as usize + 1
    }

    /// Every date in the plan, ascending.
    pub fn dates(&self) -> Vec<CalendarDate> {
        enumerate_range(self.start_date, self.end_date)
    }
}

/// Returns `true` if `date` falls inside any plan.
///
/// Plans are checked independently and may overlap.
pub fn within_any_plan(date: CalendarDate, plans: &[HolidayPlan]) -> bool {
    plans.iter().any(|p| p.contains(date))
}

/// Every plan containing `date`, in input order.
pub fn plans_containing(date: CalendarDate, plans: &[HolidayPlan]) -> Vec<&HolidayPlan> {
    plans.iter().filter(|p| p.contains(date)).collect()
}

/// Looks a plan up by id, falling back to an exact name match.
pub fn find_plan<'a>(plans: &'a [HolidayPlan], key: &str) -> Option<&'a HolidayPlan> {
    plans
        .iter()
        .find(|p| p.id == key)
        .or_else(|| plans.iter().find(|p| p.name == key))
}

/// Plans in ascending start-date order. Ties keep their input order.
pub fn sorted_plans(plans: &[HolidayPlan]) -> Vec<&HolidayPlan> {
    let mut sorted: Vec<&HolidayPlan> = plans.iter().collect();
    sorted.sort_by_key(|p| p.start_date);
    sorted
}
