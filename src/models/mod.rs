//! Core data models for Spendwise
//!
//! Expenses and budgets as they travel between the remote service and the
//! in-memory store, plus the input payloads used to create and update them.

pub mod attachment;
pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use attachment::Attachment;
pub use budget::{Budget, BudgetDraft, BudgetPatch};
pub use expense::{Expense, ExpenseDraft};
pub use ids::{BudgetId, ExpenseId, LocalIdGenerator, RecordId};
pub use money::Money;
