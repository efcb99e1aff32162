//! Display formatting for terminal output

pub mod budget;
pub mod expense;
pub mod summary;

pub use budget::{format_budget_details, format_budget_list};
pub use expense::{format_expense_details, format_expense_list};
pub use summary::{format_notification, format_summary};
