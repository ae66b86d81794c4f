//! HTTP API Client
//!
//! [`ExpenseApi`] over `reqwest` for native targets (CLI and tests).

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::{
    decode_body, ClientError, ClientResult, Endpoints, Expense, ExpenseApi, ExpenseId, NewExpense,
    Summary,
};

/// Expense API client backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpExpenseApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpExpenseApi {
    /// Create a client for the server at `base_url`.
    ///
    /// `timeout` of `None` means requests may wait indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoints: Endpoints::new(base_url),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Read the body of a response, turning non-success statuses into errors
    async fn read_body(response: Response) -> ClientResult<String> {
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::from_status(status.as_u16(), &body))
        }
    }
}

#[async_trait(?Send)]
impl ExpenseApi for HttpExpenseApi {
    async fn list_expenses(&self) -> ClientResult<Vec<Expense>> {
        let url = self.endpoints.expenses();
        tracing::debug!(%url, "Fetching expenses");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let body = Self::read_body(response).await?;

        decode_body(&body)
    }

    async fn create_expense(&self, expense: &NewExpense) -> ClientResult<()> {
        let url = self.endpoints.expenses();
        tracing::debug!(%url, description = %expense.description, "Creating expense");

        let response = self
            .client
            .post(&url)
            .json(expense)
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_body(response).await.map(|_| ())
    }

    async fn delete_expense(&self, id: &ExpenseId) -> ClientResult<()> {
        let url = self.endpoints.expense(id);
        tracing::debug!(%url, "Deleting expense");

        let response = self.client.delete(&url).send().await.map_err(transport_error)?;

        Self::read_body(response).await.map(|_| ())
    }

    async fn fetch_summary(&self) -> ClientResult<Summary> {
        let url = self.endpoints.summary();
        tracing::debug!(%url, "Fetching summary");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let body = Self::read_body(response).await?;

        decode_body(&body)
    }
}

fn transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Transport(format!("Request timed out: {}", error))
    } else {
        ClientError::Transport(error.to_string())
    }
}
