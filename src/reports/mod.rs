//! Report generation
//!
//! Pure aggregation over a record list: the dashboard summary and the
//! monthly spending trend. Nothing in here touches storage.

pub mod summary;
pub mod trend;

pub use summary::summarize;
pub use trend::monthly_trend;
