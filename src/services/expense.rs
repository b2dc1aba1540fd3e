//! Expense service
//!
//! CRUD operations over the record store. Every write is validated first;
//! nothing reaches the store on validation failure.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    Category, Expense, ExpenseId, ExpensePatch, ExpenseValidationError, Money,
};
use crate::storage::ExpenseStore;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
}

/// Service for expense record management
pub struct ExpenseService<'a, S: ExpenseStore> {
    store: &'a mut S,
}

impl<'a, S: ExpenseStore> ExpenseService<'a, S> {
    /// Create a new expense service over a store
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Create and persist a new expense
    pub fn create(&mut self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::new(input.amount, input.category, input.description, input.date);

        expense.validate().map_err(validation_error)?;

        self.store.add(expense.clone())?;
        Ok(expense)
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.store.get(id)
    }

    /// Resolve a user-supplied identifier to a record
    ///
    /// See [`find_expense`]; this is the same lookup through the service's
    /// borrow.
    pub fn find(&self, identifier: &str) -> ExpenseResult<Expense> {
        find_expense(&*self.store, identifier)
    }

    /// List all expenses
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.list()
    }

    /// Apply a partial patch to an existing expense
    ///
    /// The merged record is validated before the store is touched, so a bad
    /// patch leaves the stored record unchanged.
    pub fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> ExpenseResult<Expense> {
        let mut merged = self
            .store
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        merged.apply_patch(patch.clone());
        merged.validate().map_err(validation_error)?;

        self.store.update(id, patch)
    }

    /// Delete an expense; `false` if no record matched
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        self.store.delete(id)
    }
}

/// Resolve a user-supplied identifier to a record through a shared borrow
///
/// Accepts the full UUID or a unique prefix (at least 4 characters, as shown
/// in listings). An ambiguous prefix is a validation error rather than a
/// silent pick. Read-only callers use this directly without constructing a
/// service over a mutable store.
pub fn find_expense<S: ExpenseStore>(store: &S, identifier: &str) -> ExpenseResult<Expense> {
    let matches: Vec<Expense> = store
        .list()?
        .into_iter()
        .filter(|e| e.id.matches(identifier))
        .collect();

    match matches.len() {
        0 => Err(ExpenseError::expense_not_found(identifier)),
        1 => Ok(matches.into_iter().next().expect("one match")),
        n => Err(ExpenseError::Validation(format!(
            "id '{}' is ambiguous ({} matches); use more characters",
            identifier, n
        ))),
    }
}

/// Collapse the per-field report into one error message
fn validation_error(errors: Vec<ExpenseValidationError>) -> ExpenseError {
    let joined = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    ExpenseError::Validation(joined)
}
