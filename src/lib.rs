//! spendlog - local-first personal expense tracker
//!
//! This library provides the core functionality for the spendlog CLI. All
//! state lives in a single JSON file under the user's config directory;
//! there is no server and no database.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, summaries)
//! - `storage`: The record store trait plus JSON-file and in-memory backends
//! - `filter`: Pure record selection by criteria
//! - `reports`: Pure aggregation (summary, monthly trend)
//! - `export`: CSV serialization
//! - `services`: Business logic bridging validation and storage
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: clap command handlers
//!
//! The pure pieces (`filter`, `reports`, `export`) only ever see `&[Expense]`
//! and can be used without any storage at all.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
