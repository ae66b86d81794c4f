//! Expense Tracker Page
//!
//! Browser front end built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The page owns one `ClientController` from the core crate;
//! components forward form submissions and table clicks to it, and it renders
//! back through reactive signals. HTTP goes through `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
