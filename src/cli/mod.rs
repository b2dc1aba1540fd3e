//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Shared argument
//! parsing helpers live here; the per-command handlers are in submodules.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{
    handle_add, handle_delete, handle_edit, handle_list, handle_show, AddArgs, EditArgs, ListArgs,
};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;
use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::ExpenseFilter;
use crate::models::{Category, Money};

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ExpenseError::Validation(format!("invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse an amount argument
pub(crate) fn parse_amount(s: &str) -> ExpenseResult<Money> {
    Money::parse(s).map_err(|e| ExpenseError::Validation(e.to_string()))
}

/// Filter flags shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only expenses in this category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Case-insensitive text search in description or category name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only expenses on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only expenses on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl FilterArgs {
    /// Build the filter, parsing the date bounds
    pub fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        Ok(ExpenseFilter {
            category: self.category,
            search: self.search.clone(),
            date_from: self.from.as_deref().map(parse_date).transpose()?,
            date_to: self.to.as_deref().map(parse_date).transpose()?,
        })
    }
}
