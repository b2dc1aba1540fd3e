//! Data export
//!
//! Serializes expense records for use outside the application.

pub mod csv;

pub use csv::{default_export_filename, export_to_file, to_csv, write_csv};
