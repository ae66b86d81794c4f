//! UI Components
//!
//! Leptos components for the expense page.

pub mod chart;
pub mod expense_form;
pub mod expense_table;
pub mod settings;
pub mod toast;

pub use chart::Chart;
pub use expense_form::ExpenseForm;
pub use expense_table::ExpenseTable;
pub use settings::ApiSettings;
pub use toast::Toast;
