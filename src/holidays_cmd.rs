//! Holidays command: list configured holidays and plans.

use std::path::Path;

use anyhow::Result;
use tracing::info_span;

use planificador_calendar::{day_of_week_label, format_display_date};
use planificador_holidays::{Holiday, HolidayPlan, sorted_holidays, sorted_plans};

use crate::config;
use crate::convert;

/// Run the holidays command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let _cmd = info_span!("holidays").entered();
    let config = config::load(config_path)?;
    let holidays = convert::build_holidays(&config.holidays)?;
    let plans = convert::build_plans(&config.plans)?;
    print!("{}", render_listing(&holidays, &plans));
    Ok(())
}

/// Holidays by date, then plans by start date.
pub fn render_listing(holidays: &[Holiday], plans: &[HolidayPlan]) -> String {
    let mut out = String::from("Holidays:\n");
    if holidays.is_empty() {
        out.push_str("  (none)\n");
    }
    for h in sorted_holidays(holidays) {
        out.push_str(&format!(
            "  {} {}  {}\n",
            day_of_week_label(h.date),
            format_display_date(h.date),
            h.name
        ));
    }
    out.push_str("Plans:\n");
    if plans.is_empty() {
        out.push_str("  (none)\n");
    }
    for p in sorted_plans(plans) {
        out.push_str(&format!(
            "  {}  {} - {}  ({} days)\n",
            p.name(),
            format_display_date(p.start_date()),
            format_display_date(p.end_date()),
            p.len_days()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use planificador_calendar::CalendarDate;

    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn listing_sorted() {
        let holidays = vec![
            Holiday::new("b", date("2025-01-06"), "Reyes"),
            Holiday::new("a", date("2024-12-25"), "Navidad"),
        ];
        let plans =
            vec![HolidayPlan::new("p", "Puente", date("2024-12-06"), date("2024-12-09")).unwrap()];
        assert_eq!(
            render_listing(&holidays, &plans),
            "Holidays:\n  X 25/12  Navidad\n  L 06/01  Reyes\nPlans:\n  Puente  06/12 - 09/12  (4 days)\n"
        );
    }

    #[test]
    fn listing_empty() {
        assert_eq!(render_listing(&[], &[]), "Holidays:\n  (none)\nPlans:\n  (none)\n");
    }
}
