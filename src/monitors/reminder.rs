//! Reminders for recurring expenses
//!
//! A recurring expense is due once at least one whole day has passed since
//! its date. The check runs when the scheduler starts, then every
//! [`REMINDER_PERIOD`]. Any change to the expense collection re-arms the
//! scheduler: the check runs again immediately and the period restarts from
//! zero. A steady stream of expense edits therefore keeps pushing the next
//! periodic tick out.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{sleep_until, Instant};

use super::MonitorHandle;
use crate::models::Expense;
use crate::notify::{Notification, Notifier};
use crate::store::{EntityStore, Snapshot};

/// Interval between periodic reminder checks
pub const REMINDER_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days from midnight UTC of `date` to `now`, rounded down
pub fn days_elapsed(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
    (now - start).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Reminders for every recurring expense that is due at `now`
pub fn due_reminders(expenses: &[Expense], now: DateTime<Utc>) -> Vec<Notification> {
    expenses
        .iter()
        .filter(|e| e.recurring && days_elapsed(e.date, now) > 0)
        .map(Notification::recurring_reminder)
        .collect()
}

/// Periodic reminder task over the expense store
pub struct ReminderScheduler;

impl ReminderScheduler {
    /// Start the scheduler; it checks once immediately
    pub fn spawn(expenses: &EntityStore<Expense>, notifier: Notifier) -> MonitorHandle {
        let (current, changes) = expenses.subscribe();
        let task = tokio::spawn(run(current, changes, notifier));
        MonitorHandle::new("reminders", task)
    }
}

async fn run(
    mut current: Snapshot<Expense>,
    mut changes: tokio::sync::broadcast::Receiver<Snapshot<Expense>>,
    notifier: Notifier,
) {
    let mut deadline = Instant::now();

    loop {
        tokio::select! {
            _ = sleep_until(deadline) => {
                let due = due_reminders(&current, Utc::now());
                tracing::debug!(due = due.len(), "reminder check");
                for reminder in due {
                    notifier.emit(reminder);
                }
                deadline = Instant::now() + REMINDER_PERIOD;
            }
            change = changes.recv() => match change {
                Ok(snapshot) => {
                    if !Arc::ptr_eq(&snapshot, &current) {
                        current = snapshot;
                        // Re-arm: check now, then restart the period
                        deadline = Instant::now();
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "reminder scheduler lagged behind expense changes");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}
