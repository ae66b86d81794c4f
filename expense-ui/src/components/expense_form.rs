//! Expense Form Component
//!
//! Entry form for a new expense.

use leptos::*;

use crate::state::{use_controller, use_page_state};

/// Description, amount and date inputs with an add button
#[component]
pub fn ExpenseForm() -> impl IntoView {
    let state = use_page_state();
    let controller = use_controller();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let controller = controller.clone();
        spawn_local(async move {
            controller.on_submit().await;
        });
    };

    view! {
        <form id="expense-form" on:submit=on_submit>
            <input
                id="description"
                type="text"
                placeholder="Description"
                required
                prop:value=move || state.description.get()
                on:input=move |ev| state.description.set(event_target_value(&ev))
            />
            <input
                id="amount"
                type="number"
                step="0.01"
                placeholder="Amount"
                required
                prop:value=move || state.amount.get()
                on:input=move |ev| state.amount.set(event_target_value(&ev))
            />
            <input
                id="date"
                type="date"
                required
                prop:value=move || state.date.get()
                on:input=move |ev| state.date.set(event_target_value(&ev))
            />
            <button type="submit">"Add Expense"</button>
        </form>
    }
}
