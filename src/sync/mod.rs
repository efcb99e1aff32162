//! Data synchronization between the remote service and the in-memory store

pub mod defaults;
pub mod engine;
pub mod outcome;

pub use defaults::{default_budgets, default_expenses};
pub use engine::SyncEngine;
pub use outcome::{FetchSummary, SyncOutcome, SyncStatus};
