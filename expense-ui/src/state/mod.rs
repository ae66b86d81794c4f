//! State Management
//!
//! Page signals and the controller that drives them.

pub mod page;

pub use page::{provide_page_state, use_controller, use_page_state, PageController, PageState, UiView};
