//! Notification events
//!
//! The core never renders anything. Background monitors emit
//! [`Notification`] values through a [`Notifier`]; whoever owns the
//! [`NotificationStream`] decides how to show them.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::models::{Budget, BudgetId, Expense, ExpenseId, Money};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// What a notification is about
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationKind {
    /// A recurring expense is due again
    RecurringReminder {
        expense_id: ExpenseId,
        description: String,
        amount: Money,
    },
    /// A budget's spending is above the configured threshold
    BudgetThreshold {
        budget_id: BudgetId,
        category: String,
        threshold: f64,
    },
}

/// A notification event for the display surface
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub notification_type: NotificationType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Reminder that a recurring expense is due
    pub fn recurring_reminder(expense: &Expense) -> Self {
        Self {
            message: format!(
                "Reminder: Recurring expense \"{}\" of {} is due!",
                expense.description, expense.amount
            ),
            kind: NotificationKind::RecurringReminder {
                expense_id: expense.id.clone(),
                description: expense.description.clone(),
                amount: expense.amount,
            },
            notification_type: NotificationType::Info,
            created_at: Utc::now(),
        }
    }

    /// Warning that a budget is over its threshold
    pub fn budget_threshold(budget: &Budget, threshold: f64) -> Self {
        Self {
            message: format!(
                "Whoa, {} budget is over {}%!",
                budget.category,
                format_percent(threshold)
            ),
            kind: NotificationKind::BudgetThreshold {
                budget_id: budget.id.clone(),
                category: budget.category.clone(),
                threshold,
            },
            notification_type: NotificationType::Error,
            created_at: Utc::now(),
        }
    }
}

/// Render a ratio as a percentage with at most two decimals (0.8 -> "80")
pub fn format_percent(ratio: f64) -> String {
    let hundredths = (ratio * 10_000.0).round() as i64;
    if hundredths % 100 == 0 {
        format!("{}", hundredths / 100)
    } else {
        let text = format!("{:.2}", hundredths as f64 / 100.0);
        text.trim_end_matches('0').to_string()
    }
}

/// Sending half, cloned into every producer
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl Notifier {
    /// Emit a notification; silently dropped once the stream is gone
    pub fn emit(&self, notification: Notification) {
        tracing::debug!(message = %notification.message, "notification");
        let _ = self.tx.send(notification);
    }
}

/// Receiving half, owned by the display surface
#[derive(Debug)]
pub struct NotificationStream {
    rx: mpsc::UnboundedReceiver<Notification>,
}

impl NotificationStream {
    /// Wait for the next notification; `None` once every notifier is dropped
    pub async fn recv(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }

    /// Take every notification that is already queued
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        while let Ok(notification) = self.rx.try_recv() {
            out.push(notification);
        }
        out
    }
}

/// Create a connected notifier/stream pair
pub fn channel() -> (Notifier, NotificationStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Notifier { tx }, NotificationStream { rx })
}
