//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Recurring")]
    recurring: &'static str,
    #[tabled(rename = "Receipt")]
    receipt: &'static str,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format(&settings.date_format).to_string(),
            description: expense.description.clone(),
            category: expense.category.clone(),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
            recurring: if expense.recurring { "yes" } else { "" },
            receipt: match expense.receipt.as_deref() {
                None => "",
                Some(r) if crate::models::attachment::is_local_reference(r) => "local",
                Some(_) => "yes",
            },
        }
    }
}

/// Format expenses as a table
pub fn format_expense_list<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    settings: &Settings,
) -> String {
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    Table::new(rows).with(Style::sharp()).to_string()
}

/// Format a single expense for confirmation output
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(&settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));
    if expense.recurring {
        output.push_str("Recurring:   yes\n");
    }
    if let Some(receipt) = &expense.receipt {
        output.push_str(&format!("Receipt:     {}\n", receipt));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::default_expenses;

    #[test]
    fn test_list_contains_rows() {
        let output = format_expense_list(&default_expenses(), &Settings::default());
        assert!(output.contains("Lunch"));
        assert!(output.contains("$30.00"));
        assert!(output.contains("2025-03-13"));
    }

    #[test]
    fn test_empty_list() {
        let output = format_expense_list(&[], &Settings::default());
        assert_eq!(output, "No expenses found.");
    }

    #[test]
    fn test_details() {
        let expense = &default_expenses()[0];
        let output = format_expense_details(expense, &Settings::default());
        assert!(output.contains("Expense:     1"));
        assert!(!output.contains("Receipt"));
    }
}
