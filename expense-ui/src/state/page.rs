//! Page State
//!
//! Reactive state using Leptos signals, and [`UiView`], the
//! [`ExpenseView`] that writes into it.

use leptos::*;
use std::rc::Rc;

use expense_tracker::view::rows_html;
use expense_tracker::{ChartKind, ChartSurface, ClientController, ExpenseRow, ExpenseView, FormInput};

use crate::api::GlooExpenseApi;

/// How long an error toast stays up, in milliseconds
const ERROR_TOAST_MS: u32 = 5000;

pub type PageController = ClientController<GlooExpenseApi, UiView>;

/// Signals backing the page
#[derive(Clone, Copy)]
pub struct PageState {
    /// Markup of the table body
    pub rows_html: RwSignal<String>,
    pub description: RwSignal<String>,
    pub amount: RwSignal<String>,
    pub date: RwSignal<String>,
    pub daily_chart: RwSignal<Option<ChartSurface>>,
    pub monthly_chart: RwSignal<Option<ChartSurface>>,
    pub yearly_chart: RwSignal<Option<ChartSurface>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

impl PageState {
    fn new() -> Self {
        Self {
            rows_html: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            amount: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            daily_chart: create_rw_signal(None),
            monthly_chart: create_rw_signal(None),
            yearly_chart: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    pub fn chart(&self, kind: ChartKind) -> RwSignal<Option<ChartSurface>> {
        match kind {
            ChartKind::Daily => self.daily_chart,
            ChartKind::Monthly => self.monthly_chart,
            ChartKind::Yearly => self.yearly_chart,
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

/// [`ExpenseView`] over the page signals
pub struct UiView {
    state: PageState,
}

impl ExpenseView for UiView {
    fn replace_rows(&self, rows: Vec<ExpenseRow>) {
        self.state.rows_html.set(rows_html(&rows));
    }

    fn read_form(&self) -> FormInput {
        FormInput {
            description: self.state.description.get_untracked(),
            amount: self.state.amount.get_untracked(),
            date: self.state.date.get_untracked(),
        }
    }

    fn reset_form(&self) {
        self.state.description.set(String::new());
        self.state.amount.set(String::new());
        self.state.date.set(String::new());
    }

    fn draw_chart(&self, surface: &ChartSurface) {
        self.state.chart(surface.kind()).set(Some(surface.clone()));
    }

    fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.state.show_error(message);
    }
}

/// Create the page signals and controller and provide both to the component tree
pub fn provide_page_state() -> Rc<PageController> {
    let state = PageState::new();
    let controller = Rc::new(ClientController::new(
        GlooExpenseApi::from_storage(),
        UiView { state },
    ));

    provide_context(state);
    provide_context(Rc::clone(&controller));

    controller
}

pub fn use_page_state() -> PageState {
    use_context::<PageState>().expect("PageState not found")
}

pub fn use_controller() -> Rc<PageController> {
    use_context::<Rc<PageController>>().expect("PageController not found")
}
