//! Shift command: date arithmetic from the command line.

use anyhow::Result;
use tracing::debug;

use planificador_calendar::day_of_week_label;

use crate::cli::ShiftArgs;

/// Run the shift command.
pub fn run(args: ShiftArgs) -> Result<()> {
    let shifted = args.date.add_days(args.days);
    debug!(date = %args.date, days = args.days, %shifted, "shifted date");
    println!("{shifted} {}", day_of_week_label(shifted));
    Ok(())
}
