//! Test doubles for the API and view seams

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use tokio::sync::oneshot;

use crate::api::{ClientError, ClientResult, Expense, ExpenseApi, ExpenseId, NewExpense, Summary};
use crate::chart::ChartSurface;
use crate::controller::FormInput;
use crate::view::{ExpenseRow, ExpenseView};

/// API operation, used to pick which call should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListExpenses,
    CreateExpense,
    DeleteExpense,
    FetchSummary,
}

/// A request received by [`FakeApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListExpenses,
    CreateExpense(NewExpense),
    DeleteExpense(ExpenseId),
    FetchSummary,
}

/// In-memory expense server.
///
/// Created expenses get sequential ids and show up in later list calls.
/// Responses can be held back with [`FakeApi::gate_list`] and
/// [`FakeApi::gate_summary`]: each call takes the next queued receiver and
/// answers with whatever is sent through it.
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<ApiCall>>,
    expenses: RefCell<Vec<Expense>>,
    summary: RefCell<Summary>,
    failures: RefCell<HashMap<Operation, ClientError>>,
    list_gates: RefCell<VecDeque<oneshot::Receiver<Vec<Expense>>>>,
    summary_gates: RefCell<VecDeque<oneshot::Receiver<Summary>>>,
    next_id: Cell<u64>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_expenses(&self, expenses: Vec<Expense>) {
        *self.expenses.borrow_mut() = expenses;
    }

    pub fn set_summary(&self, summary: Summary) {
        *self.summary.borrow_mut() = summary;
    }

    /// Make every call of `operation` fail with `error`
    pub fn fail(&self, operation: Operation, error: ClientError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn gate_list(&self, gate: oneshot::Receiver<Vec<Expense>>) {
        self.list_gates.borrow_mut().push_back(gate);
    }

    pub fn gate_summary(&self, gate: oneshot::Receiver<Summary>) {
        self.summary_gates.borrow_mut().push_back(gate);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall, operation: Operation) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);

        match self.failures.borrow().get(&operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ExpenseApi for FakeApi {
    async fn list_expenses(&self) -> ClientResult<Vec<Expense>> {
        self.record(ApiCall::ListExpenses, Operation::ListExpenses)?;

        let gate = self.list_gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .map_err(|_| ClientError::Transport("gate dropped".to_string())),
            None => Ok(self.expenses.borrow().clone()),
        }
    }

    async fn create_expense(&self, expense: &NewExpense) -> ClientResult<()> {
        self.record(ApiCall::CreateExpense(expense.clone()), Operation::CreateExpense)?;

        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.expenses.borrow_mut().insert(
            0,
            Expense {
                id: ExpenseId::new(format!("new-{}", id)),
                description: expense.description.clone(),
                amount: expense.amount,
                date: expense.date.clone(),
            },
        );

        Ok(())
    }

    async fn delete_expense(&self, id: &ExpenseId) -> ClientResult<()> {
        self.record(ApiCall::DeleteExpense(id.clone()), Operation::DeleteExpense)?;

        self.expenses.borrow_mut().retain(|e| &e.id != id);
        Ok(())
    }

    async fn fetch_summary(&self) -> ClientResult<Summary> {
        self.record(ApiCall::FetchSummary, Operation::FetchSummary)?;

        let gate = self.summary_gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => gate
                .await
                .map_err(|_| ClientError::Transport("gate dropped".to_string())),
            None => Ok(self.summary.borrow().clone()),
        }
    }
}

/// View that remembers everything the controller asked of it
#[derive(Default)]
pub struct RecordingView {
    rows: RefCell<Vec<ExpenseRow>>,
    row_renders: Cell<usize>,
    form: RefCell<FormInput>,
    resets: Cell<usize>,
    charts: RefCell<Vec<ChartSurface>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type into the entry form
    pub fn fill_form(&self, form: FormInput) {
        *self.form.borrow_mut() = form;
    }

    pub fn form(&self) -> FormInput {
        self.form.borrow().clone()
    }

    pub fn rows(&self) -> Vec<ExpenseRow> {
        self.rows.borrow().clone()
    }

    /// Number of times the table body was replaced
    pub fn row_renders(&self) -> usize {
        self.row_renders.get()
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }

    /// Every chart draw, in order
    pub fn drawn_charts(&self) -> Vec<ChartSurface> {
        self.charts.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl ExpenseView for RecordingView {
    fn replace_rows(&self, rows: Vec<ExpenseRow>) {
        *self.rows.borrow_mut() = rows;
        self.row_renders.set(self.row_renders.get() + 1);
    }

    fn read_form(&self) -> FormInput {
        self.form.borrow().clone()
    }

    fn reset_form(&self) {
        *self.form.borrow_mut() = FormInput::default();
        self.resets.set(self.resets.get() + 1);
    }

    fn draw_chart(&self, surface: &ChartSurface) {
        self.charts.borrow_mut().push(surface.clone());
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
