//! Filter engine
//!
//! Pure record selection: a set of optional criteria combined with logical
//! AND. The empty filter is the identity and relative order is always
//! preserved.

use chrono::NaiveDate;

use crate::models::{Category, Expense};

/// Optional predicates used to select a record subset
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Keep only records with this exact category
    pub category: Option<Category>,
    /// Case-insensitive substring match against description or category name
    pub search: Option<String>,
    /// Keep records dated on or after this day
    pub date_from: Option<NaiveDate>,
    /// Keep records dated on or before this day
    pub date_to: Option<NaiveDate>,
}

impl ExpenseFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by free-text search
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Check whether any criterion is active
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.search.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Check a single record against all active criteria
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_description = expense.description.to_lowercase().contains(&needle);
            let in_category = expense.category.name().to_lowercase().contains(&needle);
            if !in_description && !in_category {
                return false;
            }
        }

        if let Some(from) = self.date_from {
            if expense.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if expense.date > to {
                return false;
            }
        }

        true
    }
}

/// Select the records matching `filter`, preserving relative order
pub fn filter_expenses(expenses: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| filter.matches(e))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn expense(description: &str, category: Category, date: (i32, u32, u32)) -> Expense {
        Expense::new(
            Money::from_cents(1000),
            category,
            description,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            expense("Groceries at the market", Category::Food, (2024, 1, 10)),
            expense("Bus pass", Category::Transportation, (2024, 2, 5)),
            expense("Cinema tickets", Category::Entertainment, (2024, 2, 10)),
            expense("Electric bill", Category::Bills, (2024, 3, 1)),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let expenses = sample_expenses();
        let filtered = filter_expenses(&expenses, &ExpenseFilter::new());

        assert_eq!(filtered.len(), expenses.len());
        for (a, b) in expenses.iter().zip(&filtered) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_category_filter_preserves_order() {
        let mut expenses = sample_expenses();
        expenses.push(expense("Takeaway", Category::Food, (2024, 3, 2)));

        let filtered = filter_expenses(&expenses, &ExpenseFilter::new().category(Category::Food));

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].description, "Groceries at the market");
        assert_eq!(filtered[1].description, "Takeaway");
    }

    #[test]
    fn test_search_matches_description_case_insensitive() {
        let expenses = sample_expenses();
        let filtered = filter_expenses(&expenses, &ExpenseFilter::new().search("CINEMA"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Cinema tickets");
    }

    #[test]
    fn test_search_matches_category_name() {
        let expenses = sample_expenses();
        // "transport" is a substring of the Transportation category name
        let filtered = filter_expenses(&expenses, &ExpenseFilter::new().search("transport"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].description, "Bus pass");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let expenses = sample_expenses();
        let filtered = filter_expenses(
            &expenses,
            &ExpenseFilter::new().date_range(
                NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            ),
        );

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].description, "Bus pass");
        assert_eq!(filtered[1].description, "Cinema tickets");
    }

    #[test]
    fn test_from_only_and_to_only() {
        let expenses = sample_expenses();

        let from_only = ExpenseFilter {
            date_from: Some(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
            ..Default::default()
        };
        assert_eq!(filter_expenses(&expenses, &from_only).len(), 2);

        let to_only = ExpenseFilter {
            date_to: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            ..Default::default()
        };
        assert_eq!(filter_expenses(&expenses, &to_only).len(), 1);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let expenses = sample_expenses();
        let filter = ExpenseFilter::new()
            .category(Category::Food)
            .search("market")
            .date_range(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            );

        assert_eq!(filter_expenses(&expenses, &filter).len(), 1);

        // Same criteria but a date window that excludes the record
        let filter = ExpenseFilter {
            date_from: Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
            ..filter
        };
        assert!(filter_expenses(&expenses, &filter).is_empty());
    }

    #[test]
    fn test_filter_on_empty_list() {
        let filtered = filter_expenses(&[], &ExpenseFilter::new().category(Category::Food));
        assert!(filtered.is_empty());
    }
}
