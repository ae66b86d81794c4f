//! Expense REST API
//!
//! The client's view of the remote expense server.
//!
//! # Endpoints
//!
//! - `GET /api/expenses` - List all expenses, server order
//! - `POST /api/expenses` - Create an expense
//! - `DELETE /api/expenses/{id}` - Delete an expense
//! - `GET /api/summary` - Daily, monthly and yearly totals, newest first
//!
//! [`ExpenseApi`] is the seam the controller talks through. On native targets
//! [`HttpExpenseApi`] implements it with `reqwest`; the browser front end
//! provides its own implementation on top of `fetch`.

pub mod dto;
pub mod error;

#[cfg(feature = "native")]
pub mod client;

pub use dto::{Aggregate, DailyTotal, Expense, ExpenseId, MonthlyTotal, NewExpense, Summary, YearlyTotal};
pub use error::{ClientError, ClientResult};

#[cfg(feature = "native")]
pub use client::HttpExpenseApi;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Operations offered by the expense server.
///
/// Futures are not required to be `Send`: the client runs on a single event
/// loop, and browser HTTP futures are `!Send`.
#[async_trait(?Send)]
pub trait ExpenseApi {
    /// Fetch every expense record, in server order
    async fn list_expenses(&self) -> ClientResult<Vec<Expense>>;

    /// Create an expense. The response body is not used.
    async fn create_expense(&self, expense: &NewExpense) -> ClientResult<()>;

    /// Delete the expense with the given identifier. The response body is not used.
    async fn delete_expense(&self, id: &ExpenseId) -> ClientResult<()>;

    /// Fetch the aggregated totals
    async fn fetch_summary(&self) -> ClientResult<Summary>;
}

/// URL builder for the expense API paths.
///
/// An empty base resolves paths against the page origin, which is what the
/// browser front end uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        // Normalize: remove trailing slash
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The expense collection, `/api/expenses`
    pub fn expenses(&self) -> String {
        format!("{}/api/expenses", self.base_url)
    }

    /// A single expense, the collection endpoint followed by `/` and the identifier
    pub fn expense(&self, id: &ExpenseId) -> String {
        format!("{}/{}", self.expenses(), id)
    }

    /// The aggregated totals, `/api/summary`
    pub fn summary(&self) -> String {
        format!("{}/api/summary", self.base_url)
    }
}

/// Parse a response body, mapping failures to [`ClientError::Malformed`]
pub fn decode_body<T: DeserializeOwned>(body: &str) -> ClientResult<T> {
    serde_json::from_str(body).map_err(|e| ClientError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_base_url() {
        let endpoints = Endpoints::new("http://localhost:5000/");

        assert_eq!(endpoints.expenses(), "http://localhost:5000/api/expenses");
        assert_eq!(endpoints.summary(), "http://localhost:5000/api/summary");
        assert_eq!(
            endpoints.expense(&ExpenseId::new("42")),
            "http://localhost:5000/api/expenses/42"
        );
    }

    #[test]
    fn test_endpoints_relative_to_origin() {
        let endpoints = Endpoints::new("");

        assert_eq!(endpoints.expenses(), "/api/expenses");
        assert_eq!(endpoints.expense(&ExpenseId::new("7")), "/api/expenses/7");
    }

    #[test]
    fn test_decode_body_reports_malformed_json() {
        let result: ClientResult<Vec<Expense>> = decode_body("<html>oops</html>");

        assert!(matches!(result, Err(ClientError::Malformed(_))));
    }

    #[test]
    fn test_decode_body_reports_wrong_shape() {
        let result: ClientResult<Summary> = decode_body(r#"{"daily": 5}"#);

        assert!(matches!(result, Err(ClientError::Malformed(_))));
    }
}
