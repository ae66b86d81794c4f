//! Toast Notification Component
//!
//! Shows the latest error message.

use leptos::*;

use crate::state::use_page_state;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_page_state();

    view! {
        {move || {
            state.error.get().map(|message| view! {
                <div class="toast" role="alert" on:click=move |_| state.error.set(None)>
                    {message}
                </div>
            })
        }}
    }
}
