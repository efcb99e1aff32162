//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Budget;
use crate::monitors::ThresholdMonitor;
use crate::notify::format_percent;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format budgets as a table, marking those over `threshold`
pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    let symbol = &settings.currency_symbol;
    let monitor = ThresholdMonitor::new(settings.budget_threshold).unwrap_or_default();
    let rows = budgets.iter().map(|b| {
        let spent = b.spent();
        let status = if b.is_overspent() {
            "OVERSPENT".to_string()
        } else if monitor.is_over(b) {
            format!("over {}%", format_percent(monitor.threshold()))
        } else {
            String::new()
        };

        BudgetRow {
            id: b.id.to_string(),
            category: b.category.clone(),
            amount: b.amount.format_with_symbol(symbol),
            spent: spent.format_with_symbol(symbol),
            remaining: b.remaining.format_with_symbol(symbol),
            status,
        }
    });

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single budget for confirmation output
pub fn format_budget_details(budget: &Budget, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    format!(
        "Budget:    {}\nCategory:  {}\nAmount:    {}\nRemaining: {}\n",
        budget.id,
        budget.category,
        budget.amount.format_with_symbol(symbol),
        budget.remaining.format_with_symbol(symbol)
    )
}
