//! Budget model
//!
//! A budget caps spending for one category. `remaining` is maintained by the
//! server and may go negative when the category is overspent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A budget for one spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    #[serde(default)]
    pub category: String,

    pub amount: Money,

    pub remaining: Money,
}

impl Budget {
    /// A freshly created budget has nothing spent yet
    pub fn from_draft(id: BudgetId, draft: &BudgetDraft) -> Self {
        Self {
            id,
            category: draft.category.clone(),
            amount: draft.amount,
            remaining: draft.amount,
        }
    }

    /// Shallow merge: fields present in the patch replace stored ones
    pub fn merged_with(&self, patch: &BudgetPatch) -> Self {
        Self {
            id: self.id.clone(),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            amount: patch.amount.unwrap_or(self.amount),
            remaining: patch.remaining.unwrap_or(self.remaining),
        }
    }

    /// Amount spent against this budget (`amount - remaining`)
    pub fn spent(&self) -> Money {
        self.amount - self.remaining
    }

    pub fn is_overspent(&self) -> bool {
        self.remaining.is_negative()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} remaining",
            self.category, self.remaining, self.amount
        )
    }
}

/// User-supplied fields for creating a budget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDraft {
    pub category: String,
    pub amount: Money,
}

/// Partial update for a budget; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<Money>,
}

impl BudgetPatch {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.amount.is_none() && self.remaining.is_none()
    }
}
