//! In-memory expense store
//!
//! Same contract as the JSON store minus the file; used by tests and any
//! caller that wants the pure logic without touching disk.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpensePatch};

use super::ExpenseStore;

/// Volatile store backed by a plain `Vec`
#[derive(Debug, Default)]
pub struct MemoryExpenseStore {
    expenses: Vec<Expense>,
}

impl MemoryExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn list(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        Ok(self.expenses.iter().find(|e| e.id == id).cloned())
    }

    fn add(&mut self, expense: Expense) -> ExpenseResult<()> {
        if self.position(expense.id).is_some() {
            return Err(ExpenseError::duplicate_expense(expense.id.to_string()));
        }
        self.expenses.push(expense);
        Ok(())
    }

    fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> ExpenseResult<Expense> {
        let pos = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.expenses[pos].apply_patch(patch);
        Ok(self.expenses[pos].clone())
    }

    fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        match self.position(id) {
            Some(pos) => {
                self.expenses.remove(pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> ExpenseResult<usize> {
        Ok(self.expenses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn sample_expense(description: &str, cents: i64) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            Category::Shopping,
            description,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_add_list_delete_round_trip() {
        let mut store = MemoryExpenseStore::new();

        let expense = sample_expense("Socks", 999);
        let id = expense.id;
        store.add(expense).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);

        assert!(store.delete(id).unwrap());
        assert!(store.list().unwrap().is_empty());
        assert!(!store.delete(id).unwrap());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = MemoryExpenseStore::new();
        let a = sample_expense("first", 100);
        let b = sample_expense("second", 200);
        let c = sample_expense("third", 300);
        store.add(a.clone()).unwrap();
        store.add(b.clone()).unwrap();
        store.add(c.clone()).unwrap();

        let descriptions: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = MemoryExpenseStore::new();
        let err = store
            .update(ExpenseId::new(), ExpensePatch::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
