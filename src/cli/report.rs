//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::report::{format_summary, format_trend};
use crate::error::ExpenseResult;
use crate::reports::{monthly_trend, summarize};
use crate::storage::ExpenseStore;

use super::parse_date;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show total, current-month and per-category spending
    Summary {
        /// Date that counts as "now" (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Show spending per month over a trailing window
    Trend {
        /// Number of trailing months to include
        #[arg(short, long)]
        months: Option<u32>,
    },
}

/// Handle report commands
pub fn handle_report_command<S: ExpenseStore>(
    store: &S,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let expenses = store.list()?;

    match cmd {
        ReportCommands::Summary { as_of } => {
            let as_of = match as_of.as_deref() {
                Some(s) => parse_date(s)?,
                None => Local::now().date_naive(),
            };
            let summary = summarize(&expenses, as_of);
            print!("{}", format_summary(&summary, &settings.currency_symbol));
        }
        ReportCommands::Trend { months } => {
            let months = months.unwrap_or(settings.trend_months);
            let trend = monthly_trend(&expenses, Local::now().date_naive(), months);
            print!("{}", format_trend(&trend, &settings.currency_symbol));
        }
    }

    Ok(())
}
