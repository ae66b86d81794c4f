//! App Root Component
//!
//! Page layout, plus the start-up sequence: build the charts, then load the
//! expense list and the summary.

use leptos::*;

use expense_tracker::ChartKind;

use crate::components::{ApiSettings, Chart, ExpenseForm, ExpenseTable, Toast};
use crate::state::provide_page_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let controller = provide_page_state();

    spawn_local(async move {
        controller.start().await;
    });

    view! {
        <main>
            <h1>"Expense Tracker"</h1>

            <ExpenseForm />
            <ExpenseTable />

            <section class="charts">
                {ChartKind::ALL
                    .into_iter()
                    .map(|kind| view! { <Chart kind=kind /> })
                    .collect_view()}
            </section>

            <ApiSettings />
            <Toast />
        </main>
    }
}
