//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expense records, the closed category set, monetary
//! amounts, and derived summary types.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod summary;

pub use category::Category;
pub use expense::{Expense, ExpensePatch, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::Money;
pub use summary::{CategoryBreakdown, CategoryShare, ExpenseSummary, MonthlyTotal};
