//! Built-in sample data shown when the initial fetch fails

use chrono::NaiveDate;

use crate::models::{Budget, BudgetId, Expense, ExpenseId, Money};

fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 13).unwrap_or_default()
}

/// Two sample expenses
pub fn default_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: ExpenseId::from(1),
            amount: Money::from_units(50),
            category: "Food".into(),
            date: sample_date(),
            description: "Lunch".into(),
            receipt: None,
            recurring: false,
        },
        Expense {
            id: ExpenseId::from(2),
            amount: Money::from_units(30),
            category: "Transport".into(),
            date: sample_date(),
            description: "Bus fare".into(),
            receipt: None,
            recurring: false,
        },
    ]
}

/// Two sample budgets
pub fn default_budgets() -> Vec<Budget> {
    vec![
        Budget {
            id: BudgetId::from(1),
            category: "Food".into(),
            amount: Money::from_units(200),
            remaining: Money::from_units(150),
        },
        Budget {
            id: BudgetId::from(2),
            category: "Transport".into(),
            amount: Money::from_units(100),
            remaining: Money::from_units(70),
        },
    ]
}
