//! HTTP implementation of [`RemoteClient`]
//!
//! Lists and budgets travel as JSON; expense writes are `multipart/form-data`
//! so a receipt can ride along as a binary part. Cookies are kept so a
//! session established by the auth collaborator is sent with every call.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::{RemoteClient, RemoteError, RemoteResult};
use crate::models::{
    Attachment, Budget, BudgetDraft, BudgetId, BudgetPatch, Expense, ExpenseDraft, ExpenseId,
};

/// Remote client speaking to the REST backend
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:5000`)
    pub fn new(base_url: impl Into<String>) -> RemoteResult<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured reqwest client (proxies, auth headers, ...)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `<base>/<collection>/<id>` with the id percent-encoded as one segment
    fn record_url(&self, collection: &str, id: &impl std::fmt::Display) -> RemoteResult<Url> {
        let invalid = |reason: String| RemoteError::InvalidRequest(reason);
        let mut url = Url::parse(&self.url(collection))
            .map_err(|e| invalid(format!("bad base url '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid(format!("base url '{}' cannot have a path", self.base_url)))?
            .push(&id.to_string());
        Ok(url)
    }
}

/// Build the multipart body for an expense write
fn expense_form(draft: &ExpenseDraft, receipt: Option<&Attachment>) -> RemoteResult<Form> {
    let mut form = Form::new()
        .text("amount", draft.amount.to_decimal_string())
        .text("category", draft.category.clone())
        .text("date", draft.date.format("%Y-%m-%d").to_string())
        .text("description", draft.description.clone())
        .text("recurring", draft.recurring.to_string());

    if let Some(attachment) = receipt {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)
            .map_err(|e| RemoteError::InvalidRequest(format!("invalid content type: {}", e)))?;
        form = form.part("receipt", part);
    }

    Ok(form)
}

async fn send(request: reqwest::RequestBuilder) -> RemoteResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %body, "remote call rejected");
    Err(RemoteError::status(status.as_u16(), body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> RemoteResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| RemoteError::Decode(e.to_string()))
}

/// A `null` list body counts as an empty list
async fn decode_list<T: DeserializeOwned>(response: Response) -> RemoteResult<Vec<T>> {
    let list: Option<Vec<T>> = decode(response).await?;
    Ok(list.unwrap_or_default())
}

#[async_trait]
impl RemoteClient for HttpRemote {
    async fn list_expenses(&self) -> RemoteResult<Vec<Expense>> {
        let response = send(self.client.get(self.url("/expenses"))).await?;
        decode_list(response).await
    }

    async fn create_expense(
        &self,
        draft: &ExpenseDraft,
        receipt: Option<&Attachment>,
    ) -> RemoteResult<Expense> {
        let form = expense_form(draft, receipt)?;
        let response = send(self.client.post(self.url("/expenses")).multipart(form)).await?;
        decode(response).await
    }

    async fn update_expense(
        &self,
        id: &ExpenseId,
        draft: &ExpenseDraft,
        receipt: Option<&Attachment>,
    ) -> RemoteResult<Expense> {
        let form = expense_form(draft, receipt)?;
        let url = self.record_url("/expenses", id)?;
        let response = send(self.client.put(url).multipart(form)).await?;
        decode(response).await
    }

    async fn delete_expense(&self, id: &ExpenseId) -> RemoteResult<()> {
        let url = self.record_url("/expenses", id)?;
        send(self.client.delete(url)).await?;
        Ok(())
    }

    async fn list_budgets(&self) -> RemoteResult<Vec<Budget>> {
        let response = send(self.client.get(self.url("/budgets"))).await?;
        decode_list(response).await
    }

    async fn create_budget(&self, draft: &BudgetDraft) -> RemoteResult<Budget> {
        let response = send(self.client.post(self.url("/budgets")).json(draft)).await?;
        decode(response).await
    }

    async fn update_budget(&self, id: &BudgetId, patch: &BudgetPatch) -> RemoteResult<Budget> {
        let url = self.record_url("/budgets", id)?;
        let response = send(self.client.put(url).json(patch)).await?;
        decode(response).await
    }

    async fn delete_budget(&self, id: &BudgetId) -> RemoteResult<()> {
        let url = self.record_url("/budgets", id)?;
        send(self.client.delete(url)).await?;
        Ok(())
    }
}
