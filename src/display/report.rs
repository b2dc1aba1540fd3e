//! Report display formatting
//!
//! Renders the summary and trend reports as plain-text tables.

use crate::models::{ExpenseSummary, MonthlyTotal};

/// Format the expense summary for terminal display
pub fn format_summary(summary: &ExpenseSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Expense Summary\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "Total spending:   {}\n",
        summary.total.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "This month:       {}\n\n",
        summary.monthly_total.format_with_symbol(currency)
    ));

    output.push_str(&format!("{:<18} {:>12} {:>8}\n", "Category", "Amount", "%"));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for (category, amount) in summary.by_category.iter() {
        let percentage = if summary.total.is_zero() {
            0.0
        } else {
            amount.cents() as f64 / summary.total.cents() as f64 * 100.0
        };
        output.push_str(&format!(
            "{:<18} {:>12} {:>7.1}%\n",
            category.name(),
            amount.format_with_symbol(currency),
            percentage
        ));
    }

    if !summary.top_categories.is_empty() {
        output.push_str("\nTop categories:\n");
        for (i, share) in summary.top_categories.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} {} ({:.1}%)\n",
                i + 1,
                share.category,
                share.amount.format_with_symbol(currency),
                share.percentage
            ));
        }
    }

    output
}

/// Format the monthly trend as a table with a bar per month
pub fn format_trend(trend: &[MonthlyTotal], currency: &str) -> String {
    if trend.is_empty() {
        return "No months in range.\n".to_string();
    }

    let max_cents = trend.iter().map(|b| b.total.cents()).max().unwrap_or(0);

    let mut output = String::new();
    output.push_str("Monthly Spending Trend\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');

    for bucket in trend {
        let bar_len = if max_cents == 0 {
            0
        } else {
            (bucket.total.cents() * 24 / max_cents) as usize
        };
        output.push_str(&format!(
            "{:9} {:>12} {}\n",
            bucket.month.format("%b %Y"),
            bucket.total.format_with_symbol(currency),
            "#".repeat(bar_len)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money};
    use crate::reports::{monthly_trend, summarize};
    use chrono::NaiveDate;

    fn expenses() -> Vec<Expense> {
        vec![
            Expense::new(
                Money::from_cents(8000),
                Category::Food,
                "Groceries",
                NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            ),
            Expense::new(
                Money::from_cents(2000),
                Category::Bills,
                "Water",
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_format_summary() {
        let summary = summarize(&expenses(), NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        let formatted = format_summary(&summary, "$");

        assert!(formatted.contains("Total spending:   $100.00"));
        assert!(formatted.contains("This month:       $100.00"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("80.0%"));
        assert!(formatted.contains("1. Food"));
    }

    #[test]
    fn test_format_summary_all_zero() {
        let summary = summarize(&[], NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        let formatted = format_summary(&summary, "$");

        assert!(formatted.contains("Total spending:   $0.00"));
        assert!(!formatted.contains("Top categories"));
    }

    #[test]
    fn test_format_trend() {
        let trend = monthly_trend(
            &expenses(),
            NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            3,
        );
        let formatted = format_trend(&trend, "$");

        assert!(formatted.contains("Feb 2024"));
        assert!(formatted.contains("$100.00"));
        assert!(formatted.contains('#'));
    }

    #[test]
    fn test_format_trend_empty() {
        assert!(format_trend(&[], "$").contains("No months in range"));
    }
}
