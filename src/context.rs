//! Page state provider for the portfolio.
//!
//! The App root owns one [`PageState`] inside a signal and provides it to all
//! components via context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut page = use_page();
//! let open = page.read().overlays.is_sidebar_open();
//! page.write().toggle_sidebar();
//! ```

use dioxus::prelude::*;
use portfolio_core::{PageState, SiteContent};

/// Get the site content parsed at startup
pub fn use_site() -> &'static SiteContent {
    crate::site()
}

/// Hook to access the page state from context.
pub fn use_page() -> Signal<PageState> {
    use_context::<Signal<PageState>>()
}

/// Create the page state and provide it to every child component.
///
/// Called once by the App root.
pub fn use_page_provider() -> Signal<PageState> {
    let site = use_site();
    let page = use_signal(|| PageState::new(&site.settings));
    use_context_provider(|| page)
}
