//! Expense Table Component
//!
//! The expense list. Rows are rendered as markup into the table body, and a
//! single click listener on the body handles every delete button.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use expense_tracker::ClickTarget;

use crate::state::{use_controller, use_page_state};

#[component]
pub fn ExpenseTable() -> impl IntoView {
    let state = use_page_state();
    let controller = use_controller();

    let on_click = move |ev: ev::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };

        let target = ClickTarget::from_attributes(&target.class_name(), target.get_attribute("data-id"));
        if !target.is_delete_button() {
            return;
        }

        let controller = controller.clone();
        spawn_local(async move {
            controller.on_table_click(target).await;
        });
    };

    view! {
        <table id="expenses-table">
            <thead>
                <tr>
                    <th>"Description"</th>
                    <th>"Amount"</th>
                    <th>"Date"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody
                prop:innerHTML=move || state.rows_html.get()
                on:click=on_click
            />
        </table>
    }
}
