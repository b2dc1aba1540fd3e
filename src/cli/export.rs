//! Export CLI command
//!
//! Writes the (optionally filtered) expense list to a CSV file.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::error::ExpenseResult;
use crate::export::{default_export_filename, export_to_file};
use crate::filter::filter_expenses;
use crate::storage::ExpenseStore;

use super::expense::sort_newest_first;
use super::FilterArgs;

/// Arguments for `spendlog export`
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Output file; defaults to expenses-<today>.csv in the current directory
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle `spendlog export`
pub fn handle_export_command<S: ExpenseStore>(store: &S, args: ExportArgs) -> ExpenseResult<()> {
    let filter = args.filter.to_filter()?;

    let mut expenses = store.list()?;
    sort_newest_first(&mut expenses);
    let filtered = filter_expenses(&expenses, &filter);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_export_filename(Local::now().date_naive())));

    export_to_file(&filtered, &output)?;

    println!("Exported {} expense(s) to: {}", filtered.len(), output.display());
    Ok(())
}
