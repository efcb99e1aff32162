//! Reports computed from store snapshots

pub mod filter;
pub mod summary;

pub use filter::ExpenseFilter;
pub use summary::{DashboardSummary, RECENT_LIMIT};
