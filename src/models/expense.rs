//! Expense model
//!
//! An expense is a single outflow recorded by the user, optionally flagged as
//! recurring and optionally carrying a receipt reference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// An expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    pub amount: Money,

    #[serde(default)]
    pub category: String,

    #[serde(with = "wire_date")]
    pub date: NaiveDate,

    #[serde(default)]
    pub description: String,

    /// Reference to the uploaded receipt (server URL or local blob reference)
    #[serde(default)]
    pub receipt: Option<String>,

    #[serde(default)]
    pub recurring: bool,
}

impl Expense {
    /// Materialize an expense from user input under the given id
    pub fn from_draft(id: ExpenseId, draft: &ExpenseDraft, receipt: Option<String>) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category.clone(),
            date: draft.date,
            description: draft.description.clone(),
            receipt,
            recurring: draft.recurring,
        }
    }

    /// Shallow merge of an update onto this expense
    ///
    /// Every draft field replaces the stored one. The receipt is replaced only
    /// when a new reference is supplied.
    pub fn merged_with(&self, draft: &ExpenseDraft, new_receipt: Option<String>) -> Self {
        Self::from_draft(
            self.id.clone(),
            draft,
            new_receipt.or_else(|| self.receipt.clone()),
        )
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// User-supplied fields for creating or updating an expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: String,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub recurring: bool,
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            amount: expense.amount,
            category: expense.category.clone(),
            date: expense.date,
            description: expense.description.clone(),
            recurring: expense.recurring,
        }
    }
}

/// Calendar dates on the wire
///
/// Written as `YYYY-MM-DD`. On input a full timestamp is accepted too and
/// truncated to its date part, since document stores tend to hand dates back
/// as `2025-03-13T00:00:00.000Z`.
pub(crate) mod wire_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, FORMAT).map_err(serde::de::Error::custom)
    }
}
