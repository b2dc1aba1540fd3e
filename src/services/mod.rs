//! Business logic layer
//!
//! Bridges validation and the record store; the only code allowed to write
//! through the store.

pub mod expense;

pub use expense::{find_expense, CreateExpenseInput, ExpenseService};
