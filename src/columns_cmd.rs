//! Columns command: print the board's date headers.

use std::path::Path;

use anyhow::Result;
use tracing::{info, info_span};

use planificador_calendar::CalendarDate;
use planificador_holidays::{DayInfo, classify_range};

use crate::cli::ColumnsArgs;
use crate::config;
use crate::convert;

/// Run the columns command.
pub fn run(args: ColumnsArgs, config_path: Option<&Path>) -> Result<()> {
    let _cmd = info_span!("columns").entered();
    let config = config::load(config_path)?;
    let holidays = convert::build_holidays(&config.holidays)?;
    let plans = convert::build_plans(&config.plans)?;

    let (start, end) =
        convert::resolve_window(&args.window, &config.board, &plans, CalendarDate::today())?;
    let days = classify_range(start, end, &holidays, &plans);
    info!(%start, %end, n_columns = days.len(), "board columns computed");

    print!("{}", render_columns(&days));
    Ok(())
}

/// One line per day: ISO date, weekday initial, `DD/MM`, then markers.
pub fn render_columns(days: &[DayInfo]) -> String {
    let mut out = String::new();
    for day in days {
        out.push_str(&format!("{}  {}  {}", day.date, day.label, day.display));
        if let Some(name) = &day.holiday {
            out.push_str(&format!("  holiday: {name}"));
        }
        if day.weekend {
            out.push_str("  weekend");
        }
        if day.in_plan {
            out.push_str("  plan");
        }
        out.push('\n');
    }
    out
}
