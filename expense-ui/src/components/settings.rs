//! API Settings Component
//!
//! Lets the user point the page at a different expense server.

use leptos::*;

use crate::api::{get_api_base, set_api_base};

/// Base URL input; saving stores it and reloads the page
#[component]
pub fn ApiSettings() -> impl IntoView {
    let (api_url, set_api_url) = create_signal(get_api_base());

    let on_save = move |_| {
        set_api_base(&api_url.get_untracked());

        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="settings">
            <label for="api-url">"API server "</label>
            <input
                id="api-url"
                type="url"
                placeholder="same origin"
                prop:value=move || api_url.get()
                on:input=move |ev| set_api_url.set(event_target_value(&ev))
            />
            <button on:click=on_save>"Save"</button>
        </div>
    }
}
