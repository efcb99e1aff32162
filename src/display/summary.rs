//! Dashboard summary and notification formatting

use crate::config::Settings;
use crate::notify::Notification;
use crate::reports::DashboardSummary;

use super::expense::format_expense_list;

/// Format the dashboard headline figures and recent expenses
pub fn format_summary(summary: &DashboardSummary, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "Spent So Far:    {}\n",
        summary.total_spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Budget:    {}\n",
        summary.total_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Remaining: {}{}\n",
        summary.total_remaining.format_with_symbol(symbol),
        if summary.is_overspent() { "  (overspent)" } else { "" }
    ));
    output.push('\n');
    output.push_str("Recent Transactions\n");
    output.push_str(&format_expense_list(&summary.recent, settings));
    output.push('\n');

    output
}

/// One-line rendering of a notification event
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {}: {}",
        notification.notification_type.icon(),
        notification.notification_type.title(),
        notification.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{default_budgets, default_expenses};

    #[test]
    fn test_summary_output() {
        let summary = DashboardSummary::generate(&default_expenses(), &default_budgets());
        let output = format_summary(&summary, &Settings::default());
        assert!(output.contains("Spent So Far:    $80.00"));
        assert!(output.contains("Total Budget:    $300.00"));
        assert!(!output.contains("overspent"));
        assert!(output.contains("Bus fare"));
    }

    #[test]
    fn test_notification_line() {
        let budget = &default_budgets()[0];
        let line = format_notification(&Notification::budget_threshold(budget, 0.8));
        assert_eq!(line, "[x] Error: Whoa, Food budget is over 80%!");
    }
}
