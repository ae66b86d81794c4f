//! Views
//!
//! The rendering surface the controller drives: an expense table, an entry
//! form and three charts.
//!
//! - [`ExpenseView`]: the seam, implemented by the browser front end and by
//!   [`TerminalView`] for the CLI
//! - [`ExpenseRow`]: one table row, already formatted for display

#[cfg(feature = "native")]
pub mod terminal;

#[cfg(feature = "native")]
pub use terminal::TerminalView;

use crate::api::{Expense, ExpenseId};
use crate::chart::ChartSurface;
use crate::controller::FormInput;

/// Marker class carried by every delete control in the table
pub const DELETE_BUTTON_CLASS: &str = "action-btn";

/// DOM surface the controller renders into.
///
/// Methods take `&self`: implementations keep their own interior state
/// (reactive signals in the browser, a `RefCell` elsewhere).
pub trait ExpenseView {
    /// Replace every rendered table row with `rows`
    fn replace_rows(&self, rows: Vec<ExpenseRow>);

    /// Current raw values of the entry form
    fn read_form(&self) -> FormInput;

    /// Clear the entry form
    fn reset_form(&self);

    /// Redraw a chart from its surface
    fn draw_chart(&self, surface: &ChartSurface);

    /// Tell the user something went wrong
    fn show_error(&self, message: &str);
}

/// A table row ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub description: String,
    /// Amount with exactly two decimal places
    pub amount: String,
    pub date: String,
}

impl ExpenseRow {
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            id: expense.id.clone(),
            description: expense.description.clone(),
            amount: format_amount(expense.amount),
            date: expense.date.clone(),
        }
    }

    /// Markup for the row.
    ///
    /// Description and date are inserted verbatim, the same way the server
    /// stored them.
    pub fn to_html(&self) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td><button class=\"{}\" data-id=\"{}\">Delete</button></td></tr>",
            self.description, self.amount, self.date, DELETE_BUTTON_CLASS, self.id
        )
    }
}

/// One row per expense, in the order given
pub fn render_rows(expenses: &[Expense]) -> Vec<ExpenseRow> {
    expenses.iter().map(ExpenseRow::from_expense).collect()
}

/// Markup for a whole table body
pub fn rows_html(rows: &[ExpenseRow]) -> String {
    rows.iter().map(ExpenseRow::to_html).collect()
}

/// Format an amount with exactly two decimal places.
///
/// Rounds the way browsers do for `toFixed(2)`: an amount exactly halfway
/// between two cents goes away from zero, everything else to the nearest
/// cent of its exact binary value.
pub fn format_amount(amount: f64) -> String {
    let magnitude = amount.abs();

    // Odd multiples of 1/8 (x.125, x.375, ...) are the only exact half-cent values
    let eighths = magnitude * 8.0;
    let rounded = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        (magnitude * 100.0 + 0.5) / 100.0
    } else {
        magnitude
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{:.2}", sign, rounded)
}
