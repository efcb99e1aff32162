//! In-memory state for Spendwise
//!
//! One [`EntityStore`] per entity kind. The stores are the only source of
//! truth for current state and are written exclusively by the sync engine;
//! everything else reads snapshots or subscribes to change events.

pub mod entity_store;

pub use entity_store::EntityStore;

use std::fmt;
use std::sync::Arc;

use crate::models::{Budget, BudgetId, Expense, ExpenseId};

/// Shared, immutable view of a collection at one point in time
pub type Snapshot<T> = Arc<Vec<T>>;

/// The two managed record types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Expense,
    Budget,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Expense => write!(f, "expense"),
            EntityKind::Budget => write!(f, "budget"),
        }
    }
}

/// A record that can live in an [`EntityStore`]
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: PartialEq + Clone + fmt::Display + Send + Sync;

    const KIND: EntityKind;

    fn id(&self) -> &Self::Id;
}

impl Entity for Expense {
    type Id = ExpenseId;

    const KIND: EntityKind = EntityKind::Expense;

    fn id(&self) -> &ExpenseId {
        &self.id
    }
}

impl Entity for Budget {
    type Id = BudgetId;

    const KIND: EntityKind = EntityKind::Budget;

    fn id(&self) -> &BudgetId {
        &self.id
    }
}

/// Stores for both entity kinds
#[derive(Default)]
pub struct Store {
    pub expenses: EntityStore<Expense>,
    pub budgets: EntityStore<Budget>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
