//! # Expense Tracker
//!
//! Client for the expense tracker REST API: list, record and delete expenses,
//! and chart daily, monthly and yearly totals.
//!
//! ## Modules
//!
//! - [`api`]: REST API types, the [`ExpenseApi`] seam and its error taxonomy
//! - [`chart`]: Summary reshaping into chart series, plus plotting geometry
//! - [`controller`]: The [`ClientController`] that keeps views and server in sync
//! - [`view`]: The [`ExpenseView`] seam and table row formatting
//! - `config`, `logging`: TOML configuration and `tracing` setup (native only)
//!
//! The core builds for `wasm32-unknown-unknown` with default features off;
//! the `native` feature adds the `reqwest` client, configuration, logging
//! setup and the `expense-cli` binary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use expense_tracker::{ClientController, FormInput, HttpExpenseApi, TerminalView};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpExpenseApi::new("http://localhost:5000", None)?;
//!     let view = TerminalView::stdio();
//!     view.fill_form(FormInput::new("Coffee", "3.5", "2024-01-01"));
//!
//!     let controller = ClientController::new(api, view);
//!
//!     // Create the expense, then print the refreshed table and charts
//!     controller.init_charts();
//!     controller.submit_expense().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod controller;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use api::{
    ClientError, ClientResult, Endpoints, Expense, ExpenseApi, ExpenseId, NewExpense, Summary,
};

#[cfg(feature = "native")]
pub use api::HttpExpenseApi;

pub use chart::{ChartKind, ChartSeries, ChartStyle, ChartSurface, Plot, PlotArea};

pub use controller::{
    ActionError, ActionResult, ClickOutcome, ClickTarget, ClientController, ClientState,
    FormInput, RefreshOutcome,
};

pub use view::{ExpenseRow, ExpenseView};

#[cfg(feature = "native")]
pub use view::TerminalView;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
