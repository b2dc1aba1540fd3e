//! Storage layer for spendlog
//!
//! The record store is a trait so the pure logic (filtering, summaries,
//! export) can be exercised against an in-memory implementation while
//! production uses the JSON-file-backed one.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json::JsonExpenseStore;
pub use memory::MemoryExpenseStore;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseId, ExpensePatch};

/// Persistent collection of expense records
///
/// The collection is persisted as one unit on every mutating call; there are
/// no partial writes and no transaction log.
pub trait ExpenseStore {
    /// All records, in stored order (insertion order is not guaranteed to
    /// survive edits)
    fn list(&self) -> ExpenseResult<Vec<Expense>>;

    /// Look up one record by id
    fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>>;

    /// Append a record and persist the collection
    ///
    /// Fails with `Duplicate` if a record with the same id already exists.
    fn add(&mut self, expense: Expense) -> ExpenseResult<()>;

    /// Merge a patch onto the record matching `id` and persist
    ///
    /// Fails with `NotFound` if no record matches. Returns the updated
    /// record.
    fn update(&mut self, id: ExpenseId, patch: ExpensePatch) -> ExpenseResult<Expense>;

    /// Remove the record matching `id` and persist
    ///
    /// Returns `false` (never an error) if no record matches.
    fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool>;

    /// Number of stored records
    fn count(&self) -> ExpenseResult<usize> {
        Ok(self.list()?.len())
    }
}
