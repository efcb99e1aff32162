//! Remote persistence service
//!
//! [`RemoteClient`] is the seam between the sync engine and whatever stores
//! records server-side. Implementations make exactly one attempt per call:
//! no retries, no backoff, no timeouts. Any non-success is a [`RemoteError`].

pub mod http;

pub use http::HttpRemote;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Attachment, Budget, BudgetDraft, BudgetId, BudgetPatch, Expense, ExpenseDraft, ExpenseId,
};

/// Why a remote call did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The request could not be built from local input; nothing was sent
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RemoteError {
    /// Whether the service was never contacted because the input was bad
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// CRUD surface of the remote service consumed by the sync engine
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// `GET /expenses`
    async fn list_expenses(&self) -> RemoteResult<Vec<Expense>>;

    /// `POST /expenses` (multipart, optional `receipt` part)
    async fn create_expense(
        &self,
        draft: &ExpenseDraft,
        receipt: Option<&Attachment>,
    ) -> RemoteResult<Expense>;

    /// `PUT /expenses/{id}` (multipart, optional `receipt` part)
    async fn update_expense(
        &self,
        id: &ExpenseId,
        draft: &ExpenseDraft,
        receipt: Option<&Attachment>,
    ) -> RemoteResult<Expense>;

    /// `DELETE /expenses/{id}`
    async fn delete_expense(&self, id: &ExpenseId) -> RemoteResult<()>;

    /// `GET /budgets`
    async fn list_budgets(&self) -> RemoteResult<Vec<Budget>>;

    /// `POST /budgets`; the server fills in `remaining`
    async fn create_budget(&self, draft: &BudgetDraft) -> RemoteResult<Budget>;

    /// `PUT /budgets/{id}`
    async fn update_budget(&self, id: &BudgetId, patch: &BudgetPatch) -> RemoteResult<Budget>;

    /// `DELETE /budgets/{id}`
    async fn delete_budget(&self, id: &BudgetId) -> RemoteResult<()>;
}
