//! Derived summary types
//!
//! These are computed from a record list by the `reports` module and are
//! never persisted.

use chrono::NaiveDate;

use super::category::Category;
use super::money::Money;

/// Exhaustive per-category totals
///
/// Backed by an array indexed by `Category::index`, so every category always
/// has an entry (zero if unused) and adding a category to the enum forces
/// this type to grow with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryBreakdown([Money; Category::COUNT]);

impl CategoryBreakdown {
    /// Create an all-zero breakdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Total for one category
    pub fn get(&self, category: Category) -> Money {
        self.0[category.index()]
    }

    /// Add an amount to a category's total
    pub fn add(&mut self, category: Category, amount: Money) {
        self.0[category.index()] += amount;
    }

    /// Iterate totals in category enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Sum of all category totals
    pub fn total(&self) -> Money {
        self.0.iter().copied().sum()
    }
}

/// One category's share of total spending
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Money,
    /// Percentage of the grand total (0.0 when the total is zero)
    pub percentage: f64,
}

/// Aggregate statistics over a list of expenses
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSummary {
    /// Sum of all amounts
    pub total: Money,
    /// Sum of amounts falling in the as-of calendar month
    pub monthly_total: Money,
    /// Per-category totals, exhaustive over the closed set
    pub by_category: CategoryBreakdown,
    /// Top categories by amount (at most 3), descending
    pub top_categories: Vec<CategoryShare>,
}

/// Total spending for one calendar month, used by the trend report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// First day of the month this bucket covers
    pub month: NaiveDate,
    pub total: Money,
}
