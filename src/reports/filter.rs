//! Expense filtering
//!
//! Every criterion is optional; an expense must match all the ones that are set.

use chrono::NaiveDate;

use crate::models::{Expense, Money};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Case-insensitive substring of the category
    pub category: Option<String>,
    /// Exact date
    pub date: Option<NaiveDate>,
    /// Inclusive lower bound on the amount
    pub min_amount: Option<Money>,
    /// Inclusive upper bound on the amount
    pub max_amount: Option<Money>,
    /// Case-insensitive substring of the description
    pub keyword: Option<String>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        contains_ci(&expense.category, self.category.as_deref())
            && self.date.map_or(true, |d| expense.date == d)
            && self.min_amount.map_or(true, |min| expense.amount >= min)
            && self.max_amount.map_or(true, |max| expense.amount <= max)
            && contains_ci(&expense.description, self.keyword.as_deref())
    }

    /// Matching expenses, in their original order
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None | Some("") => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}
