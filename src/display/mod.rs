//! Terminal display formatting

pub mod expense;
pub mod report;
