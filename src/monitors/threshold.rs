//! Budget threshold alerts
//!
//! Re-evaluated on every change to the budget collection. The check is
//! level-triggered: a budget that stays over its threshold is reported again
//! on each later change, not only when it first crosses.

use tokio::sync::broadcast::error::RecvError;

use super::MonitorHandle;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Budget;
use crate::notify::{Notification, Notifier};
use crate::store::EntityStore;

/// Fraction of a budget that may be spent before warning
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Evaluates budgets against a spend ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdMonitor {
    threshold: f64,
}

impl Default for ThresholdMonitor {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ThresholdMonitor {
    /// Create a monitor; the threshold must lie in (0, 1]
    pub fn new(threshold: f64) -> SpendwiseResult<Self> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(SpendwiseError::Validation(format!(
                "Budget threshold must be greater than 0 and at most 1, got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `spent > amount * threshold`
    pub fn is_over(&self, budget: &Budget) -> bool {
        let spent = budget.spent().cents() as f64;
        let limit = budget.amount.cents() as f64 * self.threshold;
        spent > limit
    }

    /// One warning per budget currently over the threshold
    pub fn evaluate(&self, budgets: &[Budget]) -> Vec<Notification> {
        budgets
            .iter()
            .filter(|b| self.is_over(b))
            .map(|b| Notification::budget_threshold(b, self.threshold))
            .collect()
    }

    /// Evaluate now and after every change to `budgets`
    pub fn spawn(self, budgets: &EntityStore<Budget>, notifier: Notifier) -> MonitorHandle {
        let (current, mut changes) = budgets.subscribe();

        let task = tokio::spawn(async move {
            self.emit(&current, &notifier);
            loop {
                match changes.recv().await {
                    Ok(snapshot) => self.emit(&snapshot, &notifier),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "threshold monitor lagged behind budget changes");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        MonitorHandle::new("budget-threshold", task)
    }

    fn emit(&self, budgets: &[Budget], notifier: &Notifier) {
        for warning in self.evaluate(budgets) {
            notifier.emit(warning);
        }
    }
}
