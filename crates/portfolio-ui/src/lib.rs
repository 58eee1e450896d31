//! Portfolio UI Components
//!
//! Reusable Dioxus primitives for the portfolio page: buttons, the modal
//! shell shared by the achievement and partner dialogs, the hamburger toggle
//! and the scroll-reveal wrapper.
//!
//! Components here are stateless. Open/closed and revealed flags come in as
//! props; the page derives them from `portfolio_core::PageState`.

pub mod components;

pub use components::*;
