//! CSV export functionality
//!
//! Serializes expense records to comma-separated text. The description is
//! always wrapped in double quotes with embedded quotes doubled, so free
//! text can never break the row structure.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Write expenses as CSV to any writer
///
/// Header row `Date,Description,Category,Amount`, then one row per record in
/// the order given. No trailing newline. An empty record list is rejected
/// before any output is produced.
pub fn write_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    if expenses.is_empty() {
        return Err(ExpenseError::Export("no expenses to export".into()));
    }

    write!(writer, "Date,Description,Category,Amount")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        write!(
            writer,
            "\n{},{},{},{}",
            expense.date.format("%Y-%m-%d"),
            quote_field(&expense.description),
            expense.category,
            expense.amount.to_plain_string()
        )
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Serialize expenses to a CSV string
pub fn to_csv(expenses: &[Expense]) -> ExpenseResult<String> {
    let mut buf = Vec::new();
    write_csv(expenses, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Write expenses as CSV to a file
pub fn export_to_file<P: AsRef<Path>>(expenses: &[Expense], path: P) -> ExpenseResult<()> {
    // Reject the empty case before touching the filesystem
    if expenses.is_empty() {
        return Err(ExpenseError::Export("no expenses to export".into()));
    }

    let path = path.as_ref();
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write_csv(expenses, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Default export filename for a given export date: `expenses-YYYY-MM-DD.csv`
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("expenses-{}.csv", date.format("%Y-%m-%d"))
}

/// Quote a description field, doubling any embedded quotes
fn quote_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use tempfile::TempDir;

    fn expense(
        cents: i64,
        category: Category,
        description: &str,
        date: (i32, u32, u32),
    ) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            description,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    #[test]
    fn test_single_record_output() {
        let expenses = vec![expense(1250, Category::Food, "Lunch", (2024, 2, 10))];

        let csv = to_csv(&expenses).unwrap();
        assert_eq!(
            csv,
            "Date,Description,Category,Amount\n2024-02-10,\"Lunch\",Food,12.5"
        );
    }

    #[test]
    fn test_rows_keep_input_order() {
        let expenses = vec![
            expense(5000, Category::Bills, "Electric", (2024, 3, 1)),
            expense(1250, Category::Food, "Lunch", (2024, 2, 10)),
        ];

        let csv = to_csv(&expenses).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-03-01,\"Electric\",Bills,50");
        assert_eq!(lines[2], "2024-02-10,\"Lunch\",Food,12.5");
    }

    #[test]
    fn test_description_with_comma_stays_one_field() {
        let expenses = vec![expense(
            999,
            Category::Shopping,
            "Socks, the good ones",
            (2024, 1, 5),
        )];

        let csv = to_csv(&expenses).unwrap();
        assert!(csv.contains("\"Socks, the good ones\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let expenses = vec![expense(
            2500,
            Category::Entertainment,
            "Tickets for \"Hamlet\"",
            (2024, 1, 5),
        )];

        let csv = to_csv(&expenses).unwrap();
        assert!(csv.contains("\"Tickets for \"\"Hamlet\"\"\""));
    }

    #[test]
    fn test_empty_export_rejected() {
        let err = to_csv(&[]).unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }

    #[test]
    fn test_empty_export_creates_no_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        assert!(export_to_file(&[], &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        let expenses = vec![expense(1250, Category::Food, "Lunch", (2024, 2, 10))];
        export_to_file(&expenses, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Date,Description,Category,Amount"));
        assert!(contents.contains("\"Lunch\""));
    }

    #[test]
    fn test_default_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(default_export_filename(date), "expenses-2024-02-15.csv");
    }
}
