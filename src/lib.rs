//! Spendwise - expense and budget tracking with a remote sync engine
//!
//! Records live on a remote service. This crate keeps an in-memory copy of
//! them, mediates every change through a [`SyncEngine`] that falls back to
//! local-only state when the service is unreachable, and runs background
//! monitors that raise reminders for recurring expenses and alerts for
//! budgets spent past a threshold.
//!
//! # Architecture
//!
//! - `models`: Expense, budget, money and id types
//! - `store`: Observable in-memory collections
//! - `remote`: The remote service seam and its HTTP implementation
//! - `sync`: The sync engine and its fallback outcomes
//! - `monitors`: Reminder scheduler and budget threshold monitor
//! - `notify`: Notification events and the channel carrying them
//! - `tracker`: A running session tying the above together
//! - `reports`, `display`, `cli`: Summaries, terminal output and commands
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::{HttpRemote, SyncEngine};
//!
//! let remote = Arc::new(HttpRemote::new("http://localhost:5000")?);
//! let engine = SyncEngine::new(remote);
//! engine.fetch_all().await;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod monitors;
pub mod notify;
pub mod remote;
pub mod reports;
pub mod store;
pub mod sync;
pub mod telemetry;
pub mod tracker;

pub use error::{SpendwiseError, SpendwiseResult};
pub use remote::{HttpRemote, RemoteClient, RemoteError};
pub use sync::{SyncEngine, SyncOutcome, SyncStatus};
pub use tracker::Tracker;
