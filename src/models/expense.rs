//! Expense record model
//!
//! Represents a single recorded expense: how much was spent, on what, and
//! when. Validation runs before a record is persisted so invalid data never
//! reaches the store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, stable for the record's lifetime
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Free-text description (non-empty after trimming)
    pub description: String,

    /// Calendar date the expense occurred (no time component)
    pub date: NaiveDate,

    /// When the record was created (audit only, never business logic)
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id and creation timestamp
    pub fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: description.into().trim().to_string(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Validate the record, collecting every failing field
    ///
    /// Returns all violations rather than stopping at the first so callers
    /// can report per-field errors in one pass.
    pub fn validate(&self) -> Result<(), Vec<ExpenseValidationError>> {
        let mut errors = Vec::new();

        if !self.amount.is_positive() {
            errors.push(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            errors.push(ExpenseValidationError::EmptyDescription);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Apply a partial patch, leaving `id` and `created_at` untouched
    pub fn apply_patch(&mut self, patch: ExpensePatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// A set of optional field overrides for updating an expense
///
/// Fields left as `None` keep their current value; `id` and `created_at`
/// are never patchable.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ExpensePatch {
    /// Check whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

/// Validation errors for expense records, one per offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
}

impl ExpenseValidationError {
    /// Name of the field this error applies to
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount(_) => "amount",
            Self::EmptyDescription => "description",
        }
    }
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero (got {})", amount)
            }
            Self::EmptyDescription => write!(f, "description must not be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
