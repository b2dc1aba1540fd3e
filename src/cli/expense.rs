//! Expense CLI commands
//!
//! Implements add/list/show/edit/delete against the service layer.

use std::io::{self, BufRead, Write};

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::filter_expenses;
use crate::models::{Category, Expense, ExpensePatch};
use crate::services::{find_expense, CreateExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

use super::{parse_amount, parse_date, FilterArgs};

/// Arguments for `spendlog add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    pub amount: String,

    /// What the money was spent on
    pub description: String,

    /// Spending category
    #[arg(short, long, value_enum, default_value_t = Category::Food)]
    pub category: Category,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `spendlog list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Maximum number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `spendlog edit`
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Expense id (full or the short prefix shown by `list`)
    pub id: String,

    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,

    /// New category
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// New description
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle `spendlog add`
pub fn handle_add<S: ExpenseStore>(store: &mut S, args: AddArgs) -> ExpenseResult<()> {
    let date = match args.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let mut service = ExpenseService::new(store);
    let expense = service.create(CreateExpenseInput {
        amount: parse_amount(&args.amount)?,
        category: args.category,
        description: args.description,
        date,
    })?;

    println!("Recorded expense {}: {}", expense.id, expense);
    Ok(())
}

/// Handle `spendlog list`
pub fn handle_list<S: ExpenseStore>(
    store: &S,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let filter = args.filter.to_filter()?;

    let mut expenses = store.list()?;
    sort_newest_first(&mut expenses);

    let mut filtered = filter_expenses(&expenses, &filter);
    if let Some(limit) = args.limit {
        filtered.truncate(limit);
    }

    print!("{}", format_expense_list(&filtered, &settings.currency_symbol));
    Ok(())
}

/// Handle `spendlog show`
pub fn handle_show<S: ExpenseStore>(
    store: &S,
    settings: &Settings,
    id: &str,
) -> ExpenseResult<()> {
    let expense = find_expense(store, id)?;
    print!("{}", format_expense_details(&expense, &settings.currency_symbol));
    Ok(())
}

/// Handle `spendlog edit`
pub fn handle_edit<S: ExpenseStore>(store: &mut S, args: EditArgs) -> ExpenseResult<()> {
    let patch = ExpensePatch {
        amount: args.amount.as_deref().map(parse_amount).transpose()?,
        category: args.category,
        description: args.description,
        date: args.date.as_deref().map(parse_date).transpose()?,
    };

    if patch.is_empty() {
        return Err(ExpenseError::Validation(
            "nothing to change; pass at least one of --amount, --category, --description, --date"
                .into(),
        ));
    }

    let mut service = ExpenseService::new(store);
    let id = service.find(&args.id)?.id;
    let updated = service.update(id, patch)?;

    println!("Updated expense {}: {}", updated.id, updated);
    Ok(())
}

/// Handle `spendlog delete`
pub fn handle_delete<S: ExpenseStore>(store: &mut S, id: &str, force: bool) -> ExpenseResult<()> {
    let mut service = ExpenseService::new(store);
    let expense = service.find(id)?;

    if !force && !confirm(&format!("Delete expense {} ({})?", expense.id, expense)) {
        println!("Aborted.");
        return Ok(());
    }

    service.delete(expense.id)?;
    println!("Deleted expense {}.", expense.id);
    Ok(())
}

/// Sort for display: most recent date first, newest record first within a day
pub(crate) fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

/// Ask a yes/no question on the terminal; anything but y/yes declines
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
