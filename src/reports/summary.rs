//! Dashboard Summary
//!
//! Totals across the current snapshots plus the most recent expenses.

use crate::models::{Budget, Expense, Money};

/// Number of expenses listed under "recent transactions"
pub const RECENT_LIMIT: usize = 5;

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Sum of all expense amounts
    pub total_spent: Money,
    /// Sum of all budget amounts
    pub total_budget: Money,
    /// Sum of all budget remainders (negative when overspent overall)
    pub total_remaining: Money,
    /// Latest expenses by date, newest first
    pub recent: Vec<Expense>,
}

impl DashboardSummary {
    pub fn generate(expenses: &[Expense], budgets: &[Budget]) -> Self {
        let mut recent = expenses.to_vec();
        // Stable sort keeps insertion order among same-day expenses
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_LIMIT);

        Self {
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            total_budget: budgets.iter().map(|b| b.amount).sum(),
            total_remaining: budgets.iter().map(|b| b.remaining).sum(),
            recent,
        }
    }

    pub fn is_overspent(&self) -> bool {
        self.total_remaining.is_negative()
    }
}
