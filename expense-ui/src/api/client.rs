//! HTTP API Client
//!
//! [`ExpenseApi`] over `gloo-net` (browser `fetch`).

use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use expense_tracker::api::decode_body;
use expense_tracker::{
    ClientError, ClientResult, Endpoints, Expense, ExpenseApi, ExpenseId, NewExpense, Summary,
};

/// Local storage key holding the API base URL
const API_BASE_KEY: &str = "expense_api_url";

/// Get the API base URL from local storage.
///
/// Empty when nothing is stored, so requests go to the page origin.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_default();

    normalize_base(&url)
}

/// Set the API base URL in local storage; an empty URL clears it
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let url = normalize_base(url);
            let _ = if url.is_empty() {
                storage.remove_item(API_BASE_KEY)
            } else {
                storage.set_item(API_BASE_KEY, &url)
            };
        }
    }
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Expense API client backed by the browser's `fetch`
#[derive(Debug, Clone)]
pub struct GlooExpenseApi {
    endpoints: Endpoints,
}

impl GlooExpenseApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }

    /// Client for the base URL stored in local storage
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    async fn read_body(response: Response) -> ClientResult<String> {
        let ok = response.ok();
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if ok {
            Ok(body)
        } else {
            Err(ClientError::from_status(status, &body))
        }
    }
}

#[async_trait(?Send)]
impl ExpenseApi for GlooExpenseApi {
    async fn list_expenses(&self) -> ClientResult<Vec<Expense>> {
        let response = Request::get(&self.endpoints.expenses())
            .send()
            .await
            .map_err(transport_error)?;

        decode_body(&Self::read_body(response).await?)
    }

    async fn create_expense(&self, expense: &NewExpense) -> ClientResult<()> {
        let response = Request::post(&self.endpoints.expenses())
            .json(expense)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_body(response).await.map(|_| ())
    }

    async fn delete_expense(&self, id: &ExpenseId) -> ClientResult<()> {
        let response = Request::delete(&self.endpoints.expense(id))
            .send()
            .await
            .map_err(transport_error)?;

        Self::read_body(response).await.map(|_| ())
    }

    async fn fetch_summary(&self) -> ClientResult<Summary> {
        let response = Request::get(&self.endpoints.summary())
            .send()
            .await
            .map_err(transport_error)?;

        decode_body(&Self::read_body(response).await?)
    }
}

fn transport_error(error: gloo_net::Error) -> ClientError {
    ClientError::Transport(error.to_string())
}
