//! Terminal View
//!
//! [`ExpenseView`] for the command line: the table and chart series are
//! printed as text, errors go to the error stream, and the "form" is filled
//! in from command arguments before the controller reads it.

use std::cell::RefCell;
use std::io::{self, Stderr, Stdout, Write};

use super::{ExpenseRow, ExpenseView};
use crate::chart::ChartSurface;
use crate::controller::FormInput;

/// Width of the longest chart bar, in characters
const BAR_WIDTH: usize = 40;

pub struct TerminalView<W = Stdout, E = Stderr> {
    out: RefCell<W>,
    err: RefCell<E>,
    form: RefCell<FormInput>,
}

impl TerminalView {
    /// A view printing to stdout and stderr
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> TerminalView<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
            form: RefCell::new(FormInput::default()),
        }
    }

    /// Pre-fill the form the next submission reads
    pub fn fill_form(&self, form: FormInput) {
        *self.form.borrow_mut() = form;
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn print(&self, text: &str) {
        if let Err(e) = self.out.borrow_mut().write_all(text.as_bytes()) {
            tracing::warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write, E: Write> ExpenseView for TerminalView<W, E> {
    fn replace_rows(&self, rows: Vec<ExpenseRow>) {
        self.print(&format_table(&rows));
    }

    fn read_form(&self) -> FormInput {
        self.form.borrow().clone()
    }

    fn reset_form(&self) {
        *self.form.borrow_mut() = FormInput::default();
    }

    fn draw_chart(&self, surface: &ChartSurface) {
        // Nothing to show until the first summary arrives
        if surface.revision() == 0 {
            return;
        }

        self.print(&format_chart(surface));
    }

    fn show_error(&self, message: &str) {
        if let Err(e) = writeln!(self.err.borrow_mut(), "Error: {}", message) {
            tracing::warn!("Failed to write error: {}", e);
        }
    }
}

/// Expense rows as an aligned text table
pub fn format_table(rows: &[ExpenseRow]) -> String {
    if rows.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut text = format!("{:<8} {:<12} {:>10}  {}\n", "ID", "Date", "Amount", "Description");
    text.push_str(&"-".repeat(60));
    text.push('\n');

    for row in rows {
        text.push_str(&format!(
            "{:<8} {:<12} {:>10}  {}\n",
            row.id.as_str(),
            row.date,
            row.amount,
            row.description
        ));
    }

    text
}

/// A chart as a titled list of labels with bars scaled to the largest value
pub fn format_chart(surface: &ChartSurface) -> String {
    let series = surface.series();
    let mut text = format!("\n{}\n", surface.label());

    if series.is_empty() {
        text.push_str("  no data\n");
        return text;
    }

    let max = series
        .values()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let label_width = series.labels().iter().map(String::len).max().unwrap_or(0);

    for (label, value) in series.iter() {
        let bar = if max > 0.0 && value > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        text.push_str(&format!(
            "  {:<width$} {:>10.2} {}\n",
            label,
            value,
            "#".repeat(bar),
            width = label_width
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ExpenseId;
    use crate::chart::{ChartKind, ChartSeries, ChartStyle};

    fn view() -> TerminalView<Vec<u8>, Vec<u8>> {
        TerminalView::new(Vec::new(), Vec::new())
    }

    fn row(id: &str, description: &str, amount: &str) -> ExpenseRow {
        ExpenseRow {
            id: ExpenseId::new(id),
            description: description.to_string(),
            amount: amount.to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let table = format_table(&[row("2", "Lunch", "12.00"), row("1", "Coffee", "3.50")]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].starts_with("2 "));
        assert!(lines[2].ends_with("12.00  Lunch"));
        assert!(lines[3].ends_with("3.50  Coffee"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[]), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_chart_bars_scale_to_largest_value() {
        let mut surface = ChartSurface::new(ChartKind::Monthly, ChartStyle::default());
        surface.update(
            ChartKind::Monthly.title(),
            ChartSeries::from_pairs([("2024-01", 10.0), ("2024-02", 40.0)]),
        );

        let text = format_chart(&surface);

        assert!(text.contains("Monthly Expenses"));
        let lines: Vec<&str> = text.lines().filter(|l| l.contains("2024-")).collect();
        assert!(lines[0].ends_with(&format!(" {}", "#".repeat(10))));
        assert!(lines[1].ends_with(&format!(" {}", "#".repeat(BAR_WIDTH))));
    }

    #[test]
    fn test_initial_empty_chart_is_not_printed() {
        let view = view();

        view.draw_chart(&ChartSurface::new(ChartKind::Daily, ChartStyle::default()));

        let (out, _) = view.into_writers();
        assert!(out.is_empty());
    }

    #[test]
    fn test_errors_go_to_error_stream() {
        let view = view();

        view.show_error("Could not reach the expense server");

        let (out, err) = view.into_writers();
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: Could not reach the expense server\n"
        );
    }

    #[test]
    fn test_form_is_cleared_on_reset() {
        let view = view();
        view.fill_form(FormInput::new("Coffee", "3.5", "2024-01-01"));

        assert_eq!(view.read_form().description, "Coffee");
        view.reset_form();

        assert_eq!(view.read_form(), FormInput::default());
    }
}
