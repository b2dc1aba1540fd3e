//! Monthly spending trend
//!
//! Buckets expenses into trailing calendar months for the trend report,
//! zero-filling months with no activity.

use chrono::{Datelike, NaiveDate};

use crate::models::{Expense, Money, MonthlyTotal};

/// Total spending per calendar month over the trailing `months` window
///
/// The window ends at `as_of`'s month (inclusive) and buckets are returned
/// oldest first. `months` of zero yields an empty vector.
pub fn monthly_trend(expenses: &[Expense], as_of: NaiveDate, months: u32) -> Vec<MonthlyTotal> {
    let mut buckets: Vec<MonthlyTotal> = (0..months)
        .rev()
        .map(|back| MonthlyTotal {
            month: month_start_back(as_of, back),
            total: Money::zero(),
        })
        .collect();

    for expense in expenses {
        let key = expense
            .date
            .with_day(1)
            .expect("day 1 exists in every month");
        if let Some(bucket) = buckets.iter_mut().find(|b| b.month == key) {
            bucket.total += expense.amount;
        }
    }

    buckets
}

/// First day of the month `back` months before `as_of`'s month
fn month_start_back(as_of: NaiveDate, back: u32) -> NaiveDate {
    let months_since_epoch = as_of.year() * 12 + as_of.month0() as i32 - back as i32;
    let year = months_since_epoch.div_euclid(12);
    let month0 = months_since_epoch.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("valid month start")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn expense(cents: i64, date: (i32, u32, u32)) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            Category::Other,
            "test",
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_shape() {
        let trend = monthly_trend(&[], day(2024, 6, 15), 6);

        assert_eq!(trend.len(), 6);
        assert_eq!(trend[0].month, day(2024, 1, 1));
        assert_eq!(trend[5].month, day(2024, 6, 1));
        assert!(trend.iter().all(|b| b.total.is_zero()));
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let trend = monthly_trend(&[], day(2024, 2, 10), 4);

        let months: Vec<NaiveDate> = trend.iter().map(|b| b.month).collect();
        assert_eq!(
            months,
            vec![
                day(2023, 11, 1),
                day(2023, 12, 1),
                day(2024, 1, 1),
                day(2024, 2, 1)
            ]
        );
    }

    #[test]
    fn test_bucketing_and_zero_fill() {
        let expenses = vec![
            expense(1000, (2024, 4, 3)),
            expense(2000, (2024, 4, 28)),
            expense(500, (2024, 6, 1)),
            // Outside the window, ignored
            expense(9999, (2023, 12, 31)),
        ];

        let trend = monthly_trend(&expenses, day(2024, 6, 15), 3);

        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].month, day(2024, 4, 1));
        assert_eq!(trend[0].total.cents(), 3000);
        assert_eq!(trend[1].total.cents(), 0);
        assert_eq!(trend[2].total.cents(), 500);
    }

    #[test]
    fn test_zero_months_is_empty() {
        assert!(monthly_trend(&[], day(2024, 6, 15), 0).is_empty());
    }
}
