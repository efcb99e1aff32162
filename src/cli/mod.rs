//! CLI command handlers
//!
//! Bridges clap argument parsing with the sync engine. Every invocation
//! starts from a fresh in-memory store filled by `fetch_all`, so a change
//! that fell back to local-only state is gone when the process exits; the
//! handlers say so instead of pretending it was saved.

pub mod budget;
pub mod expense;
pub mod session;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use session::{run_summary, run_watch};

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::SpendwiseResult;
use crate::models::Money;
use crate::remote::{HttpRemote, RemoteClient};
use crate::sync::SyncOutcome;

/// Build the HTTP client for the configured backend
pub fn connect(settings: &Settings) -> SpendwiseResult<Arc<dyn RemoteClient>> {
    let remote = HttpRemote::new(settings.api_base_url.as_str())?;
    Ok(Arc::new(remote))
}

/// clap value parser for money amounts
pub fn parse_money(s: &str) -> Result<Money, String> {
    Money::parse(s).map_err(|e| e.to_string())
}

/// clap value parser for non-negative money amounts
pub fn parse_amount(s: &str) -> Result<Money, String> {
    let amount = parse_money(s)?;
    if amount.is_negative() {
        return Err(format!("amount must not be negative: {}", s));
    }
    Ok(amount)
}

/// clap value parser for `YYYY-MM-DD` dates
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

/// Warning text for an operation that only took effect locally
pub(crate) fn fallback_warning<T>(outcome: &SyncOutcome<T>, action: &str) -> Option<String> {
    let cause = outcome.cause()?;
    let reason = if cause.is_local() {
        format!("request not sent, {}", cause)
    } else {
        format!("backend not available ({})", cause)
    };
    Some(format!(
        "Warning: {}. {} locally only; the change will not persist.",
        reason, action
    ))
}

/// Print a warning when an operation only took effect locally
pub(crate) fn warn_if_fallback<T>(outcome: &SyncOutcome<T>, action: &str) {
    if let Some(warning) = fallback_warning(outcome, action) {
        eprintln!("{}", warning);
    }
}
