//! API Access
//!
//! The browser implementation of the expense API seam.

mod client;

pub use client::{get_api_base, set_api_base, GlooExpenseApi};
