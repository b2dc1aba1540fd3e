//! Expense summary computation
//!
//! Aggregates a record list into the dashboard numbers: grand total,
//! current-month total, the exhaustive category breakdown, and the top-3
//! categories with their share of total spending.

use chrono::{Datelike, NaiveDate};

use crate::models::{CategoryBreakdown, CategoryShare, Expense, ExpenseSummary};

/// Maximum number of categories reported in `top_categories`
const TOP_CATEGORY_LIMIT: usize = 3;

/// Compute summary statistics over `expenses` as of the given date
///
/// `as_of` determines which calendar month counts as "this month"; the
/// monthly total covers its first through last day inclusive. Passing an
/// empty slice yields the all-zero summary.
pub fn summarize(expenses: &[Expense], as_of: NaiveDate) -> ExpenseSummary {
    let mut by_category = CategoryBreakdown::new();
    let mut summary = ExpenseSummary::default();

    for expense in expenses {
        summary.total += expense.amount;
        by_category.add(expense.category, expense.amount);

        if expense.date.year() == as_of.year() && expense.date.month() == as_of.month() {
            summary.monthly_total += expense.amount;
        }
    }

    // Positive categories only, largest first. The sort is stable over the
    // enum-ordered breakdown, so ties keep enumeration order.
    let mut shares: Vec<CategoryShare> = by_category
        .iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: if summary.total.is_zero() {
                0.0
            } else {
                amount.cents() as f64 / summary.total.cents() as f64 * 100.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    shares.truncate(TOP_CATEGORY_LIMIT);

    summary.by_category = by_category;
    summary.top_categories = shares;
    summary
}
