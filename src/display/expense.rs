//! Expense display formatting
//!
//! Formats expense records for terminal output: list rows and the detail
//! view. Amounts are rendered with the configured currency symbol.

use crate::models::Expense;

/// Format a single expense as a list row
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "{} {} {:16} {:30} {:>10}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.category.name(),
        truncate(&expense.description, 30),
        expense.amount.format_with_symbol(currency)
    )
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:8} {:10} {:16} {:30} {:>10}\n",
        "Id", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(78));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }

    output.push_str(&format!("{} expense(s)\n", expenses.len()));
    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Truncate a string to a maximum length, padding shorter ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            Money::from_cents(1250),
            Category::Food,
            "Lunch",
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        )
    }

    #[test]
    fn test_format_expense_row() {
        let formatted = format_expense_row(&sample(), "$");
        assert!(formatted.contains("2024-02-10"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("Lunch"));
        assert!(formatted.contains("$12.50"));
    }

    #[test]
    fn test_format_respects_currency_symbol() {
        let formatted = format_expense_row(&sample(), "€");
        assert!(formatted.contains("€12.50"));
    }

    #[test]
    fn test_format_empty_list() {
        let formatted = format_expense_list(&[], "$");
        assert!(formatted.contains("No expenses found"));
    }

    #[test]
    fn test_format_list_has_count() {
        let formatted = format_expense_list(&[sample()], "$");
        assert!(formatted.contains("1 expense(s)"));
    }

    #[test]
    fn test_format_details() {
        let formatted = format_expense_details(&sample(), "$");
        assert!(formatted.contains("Amount:      $12.50"));
        assert!(formatted.contains("Category:    Food"));
        assert!(formatted.contains("Description: Lunch"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim_end(), "Short");
        let result = truncate("A very long description indeed", 10);
        assert_eq!(result.len(), 10);
        assert!(result.ends_with("..."));
    }
}
