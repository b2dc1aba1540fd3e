//! JSON-file-backed expense store
//!
//! The whole collection lives in one JSON document that is rewritten
//! atomically on every mutation. A missing or corrupt file loads as the
//! empty collection; startup never fails because of bad data on disk.

use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpensePatch};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;

/// Serializable on-disk layout
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// File-backed store holding the collection in memory between mutations
pub struct JsonExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl JsonExpenseStore {
    /// Open the store, loading any existing data
    ///
    /// A corrupt file is treated as empty: the error is reported on stderr
    /// and the store starts fresh rather than refusing to run. The bad file
    /// is only overwritten once the user actually records something.
    pub fn open(path: PathBuf) -> Self {
        let expenses = match read_json::<ExpenseData, _>(&path) {
            Ok(data) => data.expenses,
            Err(e) => {
                eprintln!("warning: {}; starting with an empty expense list", e);
                Vec::new()
            }
        };
        Self { path, expenses }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn save(&self) -> ExpenseResult<()> {
        let data = ExpenseData {
            expenses: self.expenses.clone(),
        };
        write_json_atomic(&self.path, &data)
    }

    fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }
}

impl ExpenseStore for JsonExpenseStore {
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
        self.save()
    }

    fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> ExpenseResult<Expense> {
        let pos = self
            .position(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.expenses[pos].apply_patch(patch);
        let updated = self.expenses[pos].clone();
        self.save()?;
        Ok(updated)
    }

    fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        match self.position(id) {
            Some(pos) => {
                self.expenses.remove(pos);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> ExpenseResult<usize> {
        Ok(self.expenses.len())
    }
}
