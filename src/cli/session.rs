//! Summary and watch commands

use std::sync::Arc;

use chrono::Utc;

use crate::config::Settings;
use crate::display::{format_notification, format_summary};
use crate::error::SpendwiseResult;
use crate::monitors::{due_reminders, ThresholdMonitor};
use crate::remote::RemoteClient;
use crate::reports::DashboardSummary;
use crate::sync::SyncEngine;
use crate::tracker::Tracker;

/// Print the dashboard plus any alerts that apply right now
pub fn run_summary(engine: &SyncEngine, settings: &Settings) -> SpendwiseResult<()> {
    let expenses = engine.expenses();
    let budgets = engine.budgets();

    let summary = DashboardSummary::generate(&expenses, &budgets);
    print!("{}", format_summary(&summary, settings));

    let monitor = ThresholdMonitor::new(settings.budget_threshold)?;
    let alerts: Vec<_> = due_reminders(&expenses, Utc::now())
        .into_iter()
        .chain(monitor.evaluate(&budgets))
        .collect();

    if !alerts.is_empty() {
        println!();
        for alert in &alerts {
            println!("{}", format_notification(alert));
        }
    }

    Ok(())
}

/// Run a live session, printing notifications until Ctrl-C
pub async fn run_watch(remote: Arc<dyn RemoteClient>, settings: &Settings) -> SpendwiseResult<()> {
    let monitor = ThresholdMonitor::new(settings.budget_threshold)?;
    let (tracker, mut notifications) = Tracker::start(remote, monitor);

    let outcome = tracker.engine().fetch_all().await;
    let summary = outcome.value();
    match outcome.cause() {
        None => println!(
            "Watching {} expenses and {} budgets. Press Ctrl-C to stop.",
            summary.expenses, summary.budgets
        ),
        Some(cause) => println!(
            "Backend not available ({}); watching default data. Press Ctrl-C to stop.",
            cause
        ),
    }

    loop {
        tokio::select! {
            notification = notifications.recv() => match notification {
                Some(notification) => println!("{}", format_notification(&notification)),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    tracker.shutdown();
    Ok(())
}
