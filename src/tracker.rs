//! A running tracker session
//!
//! [`Tracker`] wires the sync engine's store to the reminder scheduler and
//! the threshold monitor, and hands the notification stream to the caller.
//! Dropping the tracker (or calling [`Tracker::shutdown`]) stops both
//! background tasks.

use std::sync::Arc;

use crate::monitors::{MonitorHandle, ReminderScheduler, ThresholdMonitor};
use crate::notify::{self, NotificationStream};
use crate::remote::RemoteClient;
use crate::sync::SyncEngine;

pub struct Tracker {
    engine: Arc<SyncEngine>,
    monitors: Vec<MonitorHandle>,
}

impl Tracker {
    /// Start a session; must be called from within a Tokio runtime
    pub fn start(
        remote: Arc<dyn RemoteClient>,
        threshold: ThresholdMonitor,
    ) -> (Self, NotificationStream) {
        let engine = Arc::new(SyncEngine::new(remote));
        let (notifier, stream) = notify::channel();

        let store = engine.store();
        let monitors = vec![
            ReminderScheduler::spawn(&store.expenses, notifier.clone()),
            threshold.spawn(&store.budgets, notifier),
        ];
        tracing::debug!(threshold = threshold.threshold(), "tracker started");

        (Self { engine, monitors }, stream)
    }

    /// The engine, shareable with other tasks
    pub fn engine(&self) -> &Arc<SyncEngine> {
        &self.engine
    }

    /// Stop the background monitors
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        for monitor in self.monitors.drain(..) {
            monitor.cancel();
        }
    }
}
