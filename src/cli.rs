use std::path::PathBuf;

use clap::{Parser, Subcommand};
use planificador_calendar::CalendarDate;

/// Delivery and loading planner.
#[derive(Parser)]
#[command(
    name = "planificador",
    version,
    about = "Plan deliveries across a date range, with holidays and loading reports"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: planificador.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the board's date columns with holiday and plan markers.
    Columns(ColumnsArgs),
    /// Print the loading report for a file of orders.
    Report(ReportArgs),
    /// List configured holidays and holiday plans.
    Holidays,
    /// Shift a date by a number of days.
    Shift(ShiftArgs),
}

/// Date window shared by `columns` and `report`.
#[derive(clap::Args)]
pub struct WindowArgs {
    /// First day (YYYY-MM-DD). Defaults to today plus `[board].lead_days`.
    #[arg(long)]
    pub start: Option<CalendarDate>,

    /// Last day (YYYY-MM-DD). Defaults to today plus `[board].span_days`.
    #[arg(long)]
    pub end: Option<CalendarDate>,

    /// Use a configured holiday plan (id or name) as the window.
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub plan: Option<String>,
}

/// Arguments for the `columns` subcommand.
#[derive(clap::Args)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

/// Arguments for the `report` subcommand.
#[derive(clap::Args)]
pub struct ReportArgs {
    /// JSON array of orders.
    #[arg(short, long)]
    pub orders: PathBuf,

    /// Record shape of the orders file: `document` or `relational`.
    #[arg(short, long, default_value = "document")]
    pub source: String,

    /// Only include this carrier.
    #[arg(short, long)]
    pub transport: Option<String>,

    #[command(flatten)]
    pub window: WindowArgs,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Date to shift (YYYY-MM-DD).
    #[arg(long)]
    pub date: CalendarDate,

    /// Days to add; negative moves backwards.
    #[arg(long, allow_hyphen_values = true)]
    pub days: i64,
}
