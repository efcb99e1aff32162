//! The sync engine
//!
//! Every create/update/delete and the bulk fetch go through [`SyncEngine`].
//! Each operation tries the remote service once. On success the server's
//! canonical record is written to the store; on failure a locally
//! synthesized record is written instead and the caller gets
//! [`SyncOutcome::LocalFallback`].
//!
//! Operations take `&self` and may be in flight concurrently. Store writes
//! happen after the remote call resolves, so two operations on the same id
//! resolve last-writer-wins regardless of issue order.

use std::sync::Arc;

use tokio::sync::watch;

use super::defaults::{default_budgets, default_expenses};
use super::outcome::{FetchSummary, SyncOutcome, SyncStatus};
use crate::models::{
    Attachment, Budget, BudgetDraft, BudgetId, BudgetPatch, Expense, ExpenseDraft, ExpenseId,
    LocalIdGenerator,
};
use crate::remote::RemoteClient;
use crate::store::Store;

/// Mediates all mutations between callers, the remote service and the store
pub struct SyncEngine {
    remote: Arc<dyn RemoteClient>,
    store: Arc<Store>,
    ids: LocalIdGenerator,
    status: watch::Sender<SyncStatus>,
}

impl SyncEngine {
    /// Create an engine with a fresh, empty store
    pub fn new(remote: Arc<dyn RemoteClient>) -> Self {
        Self::with_store(remote, Arc::new(Store::new()))
    }

    /// Create an engine writing to an existing store
    pub fn with_store(remote: Arc<dyn RemoteClient>, store: Arc<Store>) -> Self {
        let (status, _) = watch::channel(SyncStatus::Idle);
        Self {
            remote,
            store,
            ids: LocalIdGenerator::new(),
            status,
        }
    }

    /// The store this engine owns writes to
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Snapshot of all expenses in insertion order
    pub fn expenses(&self) -> Vec<Expense> {
        self.store.expenses.all()
    }

    /// Snapshot of all budgets in insertion order
    pub fn budgets(&self) -> Vec<Budget> {
        self.store.budgets.all()
    }

    /// Watch the loading/ready/degraded state
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.status.subscribe()
    }

    pub fn current_status(&self) -> SyncStatus {
        self.status.borrow().clone()
    }

    /// Load both collections from the server
    ///
    /// Both list requests run concurrently. If either fails, *both*
    /// collections are replaced with the built-in sample data; a mix of server
    /// and sample data is never produced.
    pub async fn fetch_all(&self) -> SyncOutcome<FetchSummary> {
        self.status.send_replace(SyncStatus::Loading);
        tracing::debug!("fetching expenses and budgets");

        let (expenses, budgets) =
            tokio::join!(self.remote.list_expenses(), self.remote.list_budgets());

        match (expenses, budgets) {
            (Ok(expenses), Ok(budgets)) => {
                self.store.expenses.replace_all(expenses);
                self.store.budgets.replace_all(budgets);
                let summary = self.summary();
                tracing::info!(
                    expenses = summary.expenses,
                    budgets = summary.budgets,
                    "loaded data from server"
                );
                self.status.send_replace(SyncStatus::Ready);
                SyncOutcome::Synced(summary)
            }
            (Err(cause), _) | (_, Err(cause)) => {
                tracing::warn!(%cause, "data fetch failed, using default data");
                self.store.expenses.replace_all(default_expenses());
                self.store.budgets.replace_all(default_budgets());
                self.status.send_replace(SyncStatus::Degraded(format!(
                    "Failed to fetch data, using default data instead: {}",
                    cause
                )));
                SyncOutcome::fallback(self.summary(), cause)
            }
        }
    }

    fn summary(&self) -> FetchSummary {
        FetchSummary {
            expenses: self.store.expenses.len(),
            budgets: self.store.budgets.len(),
        }
    }

    /// Create an expense, optionally uploading a receipt
    pub async fn create_expense(
        &self,
        draft: ExpenseDraft,
        receipt: Option<Attachment>,
    ) -> SyncOutcome<Expense> {
        tracing::debug!(category = %draft.category, "creating expense");
        match self.remote.create_expense(&draft, receipt.as_ref()).await {
            Ok(created) => {
                self.store.expenses.upsert(created.clone());
                SyncOutcome::Synced(created)
            }
            Err(cause) => {
                let id = self.ids.next_expense_id();
                tracing::warn!(%id, %cause, "expense create failed, added locally");
                let local_receipt = receipt.as_ref().map(Attachment::local_reference);
                let expense = Expense::from_draft(id, &draft, local_receipt);
                self.store.expenses.upsert(expense.clone());
                SyncOutcome::fallback(expense, cause)
            }
        }
    }

    /// Replace an expense's fields, optionally uploading a new receipt
    ///
    /// The fallback keeps the stored receipt unless a new one was supplied.
    pub async fn update_expense(
        &self,
        id: &ExpenseId,
        draft: ExpenseDraft,
        receipt: Option<Attachment>,
    ) -> SyncOutcome<Expense> {
        tracing::debug!(%id, "updating expense");
        match self.remote.update_expense(id, &draft, receipt.as_ref()).await {
            Ok(updated) => {
                self.store.expenses.upsert(updated.clone());
                SyncOutcome::Synced(updated)
            }
            Err(cause) => {
                tracing::warn!(%id, %cause, "expense update failed, updated locally");
                let new_receipt = receipt.as_ref().map(Attachment::local_reference);
                let expense = match self.store.expenses.get(id) {
                    Some(existing) => existing.merged_with(&draft, new_receipt),
                    None => Expense::from_draft(id.clone(), &draft, new_receipt),
                };
                self.store.expenses.upsert(expense.clone());
                SyncOutcome::fallback(expense, cause)
            }
        }
    }

    /// Delete an expense; it leaves the store whatever the server says
    pub async fn delete_expense(&self, id: &ExpenseId) -> SyncOutcome<()> {
        tracing::debug!(%id, "deleting expense");
        let result = self.remote.delete_expense(id).await;
        self.store.expenses.remove(id);
        match result {
            Ok(()) => SyncOutcome::Synced(()),
            Err(cause) => {
                tracing::warn!(%id, %cause, "expense delete failed, deleted locally");
                SyncOutcome::fallback((), cause)
            }
        }
    }

    /// Create a budget; the server computes the initial `remaining`
    pub async fn create_budget(&self, draft: BudgetDraft) -> SyncOutcome<Budget> {
        tracing::debug!(category = %draft.category, "creating budget");
        match self.remote.create_budget(&draft).await {
            Ok(created) => {
                self.store.budgets.upsert(created.clone());
                SyncOutcome::Synced(created)
            }
            Err(cause) => {
                let id = self.ids.next_budget_id();
                tracing::warn!(%id, %cause, "budget create failed, added locally");
                let budget = Budget::from_draft(id, &draft);
                self.store.budgets.upsert(budget.clone());
                SyncOutcome::fallback(budget, cause)
            }
        }
    }

    /// Apply a partial update to a budget
    pub async fn update_budget(&self, id: &BudgetId, patch: BudgetPatch) -> SyncOutcome<Budget> {
        tracing::debug!(%id, "updating budget");
        match self.remote.update_budget(id, &patch).await {
            Ok(updated) => {
                self.store.budgets.upsert(updated.clone());
                SyncOutcome::Synced(updated)
            }
            Err(cause) => {
                tracing::warn!(%id, %cause, "budget update failed, updated locally");
                let budget = match self.store.budgets.get(id) {
                    Some(existing) => existing.merged_with(&patch),
                    None => Budget::from_draft(id.clone(), &BudgetDraft::default())
                        .merged_with(&patch),
                };
                self.store.budgets.upsert(budget.clone());
                SyncOutcome::fallback(budget, cause)
            }
        }
    }

    /// Delete a budget; it leaves the store whatever the server says
    pub async fn delete_budget(&self, id: &BudgetId) -> SyncOutcome<()> {
        tracing::debug!(%id, "deleting budget");
        let result = self.remote.delete_budget(id).await;
        self.store.budgets.remove(id);
        match result {
            Ok(()) => SyncOutcome::Synced(()),
            Err(cause) => {
                tracing::warn!(%id, %cause, "budget delete failed, deleted locally");
                SyncOutcome::fallback((), cause)
            }
        }
    }
}
