mod cli;
mod columns_cmd;
mod config;
mod convert;
mod holidays_cmd;
mod logging;
mod report_cmd;
mod shift_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Columns(args) => columns_cmd::run(args, cli.config.as_deref()),
        Command::Report(args) => report_cmd::run(args, cli.config.as_deref()),
        Command::Holidays => holidays_cmd::run(cli.config.as_deref()),
        Command::Shift(args) => shift_cmd::run(args),
    }
}
