//! Background monitors that turn store changes into notifications
//!
//! - [`ReminderScheduler`]: periodic reminders for recurring expenses
//! - [`ThresholdMonitor`]: warnings for budgets spent past a threshold
//!
//! Both subscribe to their store's change events and run as Tokio tasks.
//! The returned [`MonitorHandle`] must be kept alive for as long as the
//! monitor should run; dropping or cancelling it aborts the task.

pub mod reminder;
pub mod threshold;

pub use reminder::{days_elapsed, due_reminders, ReminderScheduler, REMINDER_PERIOD};
pub use threshold::{ThresholdMonitor, DEFAULT_THRESHOLD};

use tokio::task::JoinHandle;

/// Owner of a running monitor task
#[derive(Debug)]
pub struct MonitorHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub(crate) fn new(name: &'static str, task: JoinHandle<()>) -> Self {
        Self { name, task }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the task has stopped (cancelled, or its store went away)
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the task
    pub fn cancel(self) {
        // Drop does the work
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        tracing::debug!(monitor = self.name, "stopping monitor");
        self.task.abort();
    }
}
